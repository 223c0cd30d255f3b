//! Error handling for the quiz API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use date_quiz_core::QuizError;
use serde::Serialize;
use thiserror::Error;

use crate::services::settings_store::StoreError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("Settings error: {0}")]
    Store(#[from] StoreError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Quiz(e) => match e {
                QuizError::EmptyPool => (StatusCode::BAD_REQUEST, "bad_request"),
                QuizError::InvalidDataset(_) => (StatusCode::INTERNAL_SERVER_ERROR, "dataset_error"),
                QuizError::Finished
                | QuizError::NotFinished
                | QuizError::AlreadyAnswered { .. }
                | QuizError::Unanswered { .. }
                | QuizError::WrongAnswerKind { .. } => (StatusCode::CONFLICT, "quiz_state"),
            },
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "settings_error"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Quiz(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.message(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
