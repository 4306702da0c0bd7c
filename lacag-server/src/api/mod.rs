//! HTTP API: `/api/v1` (User API) and `/api/v1/admin` (Admin API).

use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod extractors;
pub mod user;

/// Build the versioned API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1/admin", admin::router())
        .nest("/api/v1", user::router())
}
