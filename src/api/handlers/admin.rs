use axum::{extract::State, http::StatusCode, response::IntoResponse};
use log::info;
use std::sync::Arc;

use super::AppState;

/// Drop cached tournament files so the next request re-reads them from disk
pub async fn refresh(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.service().clear_cache();
    info!("Tournament cache cleared on request");

    (StatusCode::ACCEPTED, "Refresh triggered")
}
