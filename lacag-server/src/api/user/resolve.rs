use axum::{Json, extract::State};
use lacag_sdk::objects::{ResolveRequest, ResolveResponse};

use crate::state::AppState;

/// `POST /resolve`: classify a phone number against the routing config.
///
/// A number that cannot be normalized simply matches nothing.
pub async fn resolve(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Json<ResolveResponse> {
    let resolver = state.config.resolver.read().await.clone();
    let mode = request.mode.unwrap_or(resolver.mode);

    let phone = if request.normalize {
        resolver.normalize(&request.phone)
    } else {
        Some(request.phone.clone())
    };

    let wallet_types = phone
        .as_deref()
        .map(|p| state.store.resolve(p, mode))
        .unwrap_or_default();

    tracing::debug!(mode = %mode, matches = wallet_types.len(), "resolved phone number");

    Json(ResolveResponse {
        phone: phone.unwrap_or(request.phone),
        mode,
        wallet_types,
    })
}
