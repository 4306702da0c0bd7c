use axum::{Json, extract::State};
use lacag_sdk::objects::AdminConfigResponse;

use super::{AdminApiError, config_response};
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `POST /reset`: restore the built-in wallet routing configuration.
pub async fn reset_config(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> Result<Json<AdminConfigResponse>, AdminApiError> {
    state.store.reset_to_default()?;
    Ok(Json(config_response(&state)))
}
