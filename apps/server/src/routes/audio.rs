//! Audio endpoints
//!
//! The server does not play anything itself: it tells the client which clips
//! to play for an item, in order, and serves the files under
//! [`AUDIO_ROUTE`](crate::AUDIO_ROUTE).

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use date_quiz_core::{audio_available, audio_tokens, export_missing_audio, missing_audio};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::{AppState, AUDIO_ROUTE};

/// File name offered for the missing-audio download.
pub const EXPORT_FILENAME: &str = "missing_audio.txt";

/// GET /api/audio/status
pub async fn status(State(state): State<AppState>) -> Json<AudioStatusResponse> {
    let settings = state.settings.get();
    Json(AudioStatusResponse {
        enabled: settings.audio_enabled,
        volume: settings.audio_volume,
        manifest_loaded: !state.manifest.has_error(),
        token_count: state.manifest.len(),
        missing_count: missing_audio(&state.manifest).len(),
    })
}

/// GET /api/audio/items/{item_id}
pub async fn playlist(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<PlaylistResponse>> {
    let item = state
        .catalog
        .get(&item_id)
        .ok_or_else(|| ApiError::NotFound(format!("item {item_id}")))?;

    let tokens = audio_tokens(item, &state.manifest);
    let clips: Vec<ClipRef> = tokens
        .iter()
        .filter_map(|token| {
            let url = state.manifest.resolve_path(token, AUDIO_ROUTE);
            if url.is_none() {
                tracing::warn!(token = %token, item = %item_id, "no audio mapped for token");
            }
            url.map(|url| ClipRef {
                token: token.clone(),
                url,
            })
        })
        .collect();

    let settings = state.settings.get();
    let available = audio_available(item, &state.manifest);

    Ok(Json(PlaylistResponse {
        item_id,
        tokens,
        clips: if settings.audio_enabled { clips } else { Vec::new() },
        available,
        enabled: settings.audio_enabled,
        volume: settings.audio_volume,
    }))
}

/// GET /api/audio/missing
pub async fn export_missing(State(state): State<AppState>) -> impl IntoResponse {
    let body = export_missing_audio(&state.manifest, &state.config.speaker_label);
    let disposition = format!("attachment; filename=\"{EXPORT_FILENAME}\"");
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
}
