use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use super::AdminApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `GET /export`: the configuration as a pretty-printed JSON document.
pub async fn export_config(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> Result<impl IntoResponse, AdminApiError> {
    let document = state.store.export_config()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], document))
}
