//! Quiz session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use date_quiz_core::QuizSession;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// Run `f` against a live session, mapping an unknown id to 404.
fn with_quiz<T>(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut QuizSession) -> Result<T>,
) -> Result<T> {
    state
        .sessions
        .with_session(id, f)
        .ok_or_else(|| ApiError::NotFound(format!("quiz {id}")))?
}

/// POST /api/quiz
///
/// Starts a quiz from the saved settings.
pub async fn start(State(state): State<AppState>) -> Result<(StatusCode, Json<QuizView>)> {
    let settings = state.settings.get();
    let session = QuizSession::from_settings(&state.catalog, &settings, &mut rand::rng())?;
    let total = session.total();
    let id = state.sessions.insert(session);

    tracing::info!(
        quiz = %id,
        category = settings.category.as_str(),
        total,
        "quiz started"
    );

    let view = with_quiz(&state, id, |session| {
        Ok(QuizView::new(id, session, &state.manifest))
    })?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/quiz/{id}
pub async fn current(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<QuizView>> {
    let view = with_quiz(&state, id, |session| {
        Ok(QuizView::new(id, session, &state.manifest))
    })?;
    Ok(Json(view))
}

/// POST /api/quiz/{id}/choice
///
/// The first click resolves the question and moves on.
pub async fn choice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ChoiceRequest>,
) -> Result<Json<AnswerResponse>> {
    let response = with_quiz(&state, id, |session| {
        let outcome = session.submit_choice(&request.choice)?;
        session.advance(&mut rand::rng())?;
        Ok(AnswerResponse {
            correct: outcome.correct,
            counted: outcome.correct,
            answer: outcome.answer,
            advanced: true,
            quiz: QuizView::new(id, session, &state.manifest),
        })
    })?;
    Ok(Json(response))
}

/// POST /api/quiz/{id}/check
///
/// A wrong answer leaves the question open for another try.
pub async fn check(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<AnswerResponse>> {
    let response = with_quiz(&state, id, |session| {
        let outcome = session.check_typing(&request.answer)?;
        if outcome.accepted {
            session.advance(&mut rand::rng())?;
        }
        Ok(AnswerResponse {
            correct: outcome.accepted,
            counted: outcome.counted,
            answer: outcome.answer,
            advanced: outcome.accepted,
            quiz: QuizView::new(id, session, &state.manifest),
        })
    })?;
    Ok(Json(response))
}

/// POST /api/quiz/{id}/skip
pub async fn skip(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<AnswerResponse>> {
    let response = with_quiz(&state, id, |session| {
        let answer = session.skip()?;
        session.advance(&mut rand::rng())?;
        Ok(AnswerResponse {
            correct: false,
            counted: false,
            answer,
            advanced: true,
            quiz: QuizView::new(id, session, &state.manifest),
        })
    })?;
    Ok(Json(response))
}

/// GET /api/quiz/{id}/results
pub async fn results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizResults>> {
    let results = with_quiz(&state, id, |session| Ok(session.results()?))?;
    tracing::info!(quiz = %id, correct = results.correct, total = results.total, "quiz finished");
    Ok(Json(results))
}

/// DELETE /api/quiz/{id}
pub async fn discard(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("quiz {id}")))
    }
}
