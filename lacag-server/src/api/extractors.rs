//! Custom Axum extractors for request authentication.
//!
//! Provides `AdminAuth`, which verifies the plaintext secret in the
//! `Lacag-Admin-Authorization` header against the argon2 hash from the
//! configuration (used by the Admin API).

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use lacag_sdk::ADMIN_AUTH_HEADER;

use crate::state::AppState;

/// Marker extractor: the request carries a valid admin secret.
///
/// Implements `FromRequestParts` so it can be combined with `Json<T>`,
/// `Path<T>`, etc.
pub struct AdminAuth;

/// Errors returned by the [`AdminAuth`] extractor.
#[derive(Debug, thiserror::Error)]
pub enum AdminAuthError {
    #[error("missing Lacag-Admin-Authorization header")]
    MissingHeader,
    #[error("invalid Lacag-Admin-Authorization header")]
    InvalidHeader,
    #[error("invalid admin secret")]
    InvalidSecret,
}

impl IntoResponse for AdminAuthError {
    fn into_response(self) -> Response {
        let status = match self {
            AdminAuthError::MissingHeader | AdminAuthError::InvalidSecret => {
                StatusCode::UNAUTHORIZED
            }
            AdminAuthError::InvalidHeader => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AdminAuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let secret = parts
            .headers
            .get(ADMIN_AUTH_HEADER)
            .ok_or(AdminAuthError::MissingHeader)?
            .to_str()
            .map_err(|_| AdminAuthError::InvalidHeader)?;

        let verified = state.config.admin.read().await.verify(secret);
        if let Err(e) = verified {
            tracing::warn!(error = %e, "Admin API: rejected request");
            return Err(AdminAuthError::InvalidSecret);
        }

        Ok(AdminAuth)
    }
}
