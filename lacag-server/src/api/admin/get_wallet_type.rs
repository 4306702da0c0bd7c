use axum::{
    Json,
    extract::{Path, State},
};
use lacag_sdk::objects::WalletType;

use super::AdminApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `GET /wallet-types/{key}`: a single wallet type.
pub async fn get_wallet_type(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(key): Path<String>,
) -> Result<Json<WalletType>, AdminApiError> {
    state
        .store
        .wallet_type(&key)
        .map(Json)
        .ok_or(AdminApiError::NotFound(key))
}
