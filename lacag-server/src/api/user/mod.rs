//! User API handlers.
//!
//! These endpoints are called by the payment form (user's browser) and need
//! no authentication; they only read the routing configuration.
//!
//! # Endpoints
//!
//! - `GET  /wallet-types` – wallets offered on the payment form
//! - `POST /resolve`      – which wallet type(s) a phone number routes to

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

mod list_wallet_types;
mod resolve;

/// Build the User API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/wallet-types", get(list_wallet_types::list_wallet_types))
        .route("/resolve", post(resolve::resolve))
}
