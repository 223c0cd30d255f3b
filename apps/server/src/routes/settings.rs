//! Settings endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/settings
pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.get())
}

/// PUT /api/settings
pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<SettingsUpdate>,
) -> Result<Json<Settings>> {
    let settings = state.settings.update(request, &state.catalog)?;
    tracing::debug!(?settings, "settings updated");
    Ok(Json(settings))
}

/// POST /api/settings/reset
pub async fn reset_settings(State(state): State<AppState>) -> Result<Json<Settings>> {
    let settings = state.settings.reset()?;
    Ok(Json(settings))
}
