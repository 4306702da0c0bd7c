use axum::{
    Json,
    extract::{Path, State},
};
use lacag_sdk::objects::{UpdateWalletTypeRequest, WalletType};

use super::AdminApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `PATCH /wallet-types/{key}`: merge the given fields into a wallet type.
///
/// The body is rejected by the `Json` extractor if it names an unknown field
/// (including `key`) or carries a malformed prefix.
pub async fn update_wallet_type(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(key): Path<String>,
    Json(request): Json<UpdateWalletTypeRequest>,
) -> Result<Json<WalletType>, AdminApiError> {
    let updated = state.store.update_wallet_type(&key, request)?;
    Ok(Json(updated))
}
