use axum::{Json, extract::State};
use lacag_sdk::objects::AdminConfigResponse;

use super::{AdminApiError, config_response};
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `POST /import`: replace the configuration with the JSON document in the body.
///
/// The body is taken verbatim so that parse errors are reported by the
/// store's validation rather than by the extractor.
pub async fn import_config(
    State(state): State<AppState>,
    _auth: AdminAuth,
    document: String,
) -> Result<Json<AdminConfigResponse>, AdminApiError> {
    state.store.import_config(&document)?;
    Ok(Json(config_response(&state)))
}
