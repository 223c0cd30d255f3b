//! Vocabulary listing endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::models::*;
use crate::AppState;

/// GET /api/items
///
/// Lists the words a quiz with the current (or overridden) selection would
/// draw from.
pub async fn selected(
    State(state): State<AppState>,
    Query(query): Query<ItemsQuery>,
) -> Json<SelectedWordsResponse> {
    let settings = state.settings.get();
    let category = query.category.unwrap_or(settings.category);
    let focus_mode = query.focus_mode.unwrap_or(settings.focus_mode);
    let display_mode = query.display_mode.unwrap_or(settings.display_mode);

    let words = state.catalog.selected_words(category, focus_mode, display_mode);

    Json(SelectedWordsResponse {
        category,
        category_label: category.label().to_string(),
        focus_mode,
        focus_available: state.catalog.focus_mode_available(category),
        count: words.len(),
        words,
    })
}
