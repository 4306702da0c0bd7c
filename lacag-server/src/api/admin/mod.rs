//! Admin API handlers.
//!
//! These endpoints are called by the admin dashboard frontend and require
//! the `Lacag-Admin-Authorization` header with the plaintext admin secret.
//!
//! # Endpoints
//!
//! - `GET   /config`             – current wallet routing configuration
//! - `GET   /wallet-types/{key}` – a single wallet type
//! - `PATCH /wallet-types/{key}` – update label, prefixes or placeholder
//! - `POST  /reset`              – restore the built-in configuration
//! - `GET   /export`             – pretty-printed JSON document
//! - `POST  /import`             – replace the configuration from a JSON document

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use lacag_core::StoreError;
use lacag_sdk::ValidationError;
use lacag_sdk::objects::AdminConfigResponse;

use crate::state::AppState;

mod export_config;
mod get_wallet_type;
mod import_config;
mod reset_config;
mod show_config;
mod update_wallet_type;

/// Build the Admin API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/config", get(show_config::show_config))
        .route(
            "/wallet-types/{key}",
            get(get_wallet_type::get_wallet_type).patch(update_wallet_type::update_wallet_type),
        )
        .route("/reset", post(reset_config::reset_config))
        .route("/export", get(export_config::export_config))
        .route("/import", post(import_config::import_config))
}

// ---------------------------------------------------------------------------
// Shared error type
// ---------------------------------------------------------------------------

/// Errors that can occur in Admin API handlers.
#[derive(Debug)]
pub(crate) enum AdminApiError {
    NotFound(String),
    Validation(ValidationError),
    PersistenceUnavailable,
    Internal,
}

impl From<StoreError> for AdminApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(key) => AdminApiError::NotFound(key.to_string()),
            StoreError::Validation(e) => AdminApiError::Validation(e),
            StoreError::PersistenceUnavailable(e) => {
                tracing::error!(error = %e, "Admin API: wallet routing config not persisted");
                AdminApiError::PersistenceUnavailable
            }
            StoreError::Serialize(e) => {
                tracing::error!(error = %e, "Admin API: failed to serialize config");
                AdminApiError::Internal
            }
        }
    }
}

impl IntoResponse for AdminApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AdminApiError::NotFound(key) => {
                (StatusCode::NOT_FOUND, format!("wallet type {key} not found")).into_response()
            }
            AdminApiError::Validation(e) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
            }
            AdminApiError::PersistenceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "configuration storage unavailable",
            )
                .into_response(),
            AdminApiError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub(crate) fn config_response(state: &AppState) -> AdminConfigResponse {
    AdminConfigResponse {
        version: state.store.version(),
        config: state.store.config(),
    }
}
