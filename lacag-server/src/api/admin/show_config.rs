use axum::{Json, extract::State, response::IntoResponse};

use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `GET /config`: the current wallet routing configuration.
pub async fn show_config(State(state): State<AppState>, _auth: AdminAuth) -> impl IntoResponse {
    Json(state.store.config())
}
