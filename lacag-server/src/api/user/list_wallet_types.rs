use axum::{Json, extract::State};
use lacag_sdk::objects::WalletOption;

use crate::state::AppState;

/// `GET /wallet-types`: wallets offered on the payment form, in registry order.
pub async fn list_wallet_types(State(state): State<AppState>) -> Json<Vec<WalletOption>> {
    let options = state
        .store
        .wallet_types()
        .into_iter()
        .map(WalletOption::from)
        .collect();
    Json(options)
}
