//! Axum server setup and router configuration.

use crate::api;
use crate::shutdown::shutdown_signal;
use crate::state::AppState;
use axum::{Json, Router, response::IntoResponse, routing::get};
use lacag_core::routing::WalletRoutingStore;
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Build the main application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .merge(api::router())
        // Add state to all routes
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Simple health check - returns OK if the server is running.
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Run the server with graceful shutdown support.
pub async fn run_server(router: Router, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Spawns a task that logs every committed change to the routing config.
///
/// The task ends when the store is dropped.
pub fn spawn_change_logger(store: WalletRoutingStore) -> tokio::task::JoinHandle<()> {
    let mut watcher = store.subscribe();
    drop(store);
    tokio::spawn(async move {
        while watcher.changed().await.is_ok() {
            tracing::info!(
                version = watcher.version(),
                "Wallet routing configuration changed"
            );
        }
        tracing::debug!("Wallet routing change logger stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use lacag_core::config::{AdminConfig, ResolverConfig, ServerConfig, SharedConfig};
    use lacag_core::storage::MemoryStorage;
    use lacag_sdk::ADMIN_AUTH_HEADER;
    use lacag_sdk::objects::{
        AdminConfigResponse, ResolveMode, ResolveResponse, WalletConfig, WalletOption, WalletType,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    const SECRET: &str = "test-admin-secret";

    fn test_state() -> AppState {
        let config = SharedConfig::new(
            ServerConfig {
                listen: SocketAddr::from(([127, 0, 0, 1], 0)),
            },
            AdminConfig::from_plaintext(SECRET).unwrap(),
            ResolverConfig::default(),
        );
        let store = WalletRoutingStore::load(Arc::new(MemoryStorage::new()));
        AppState::new(store, config)
    }

    async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
        serde_json::from_slice(&body_bytes(resp).await).unwrap()
    }

    fn admin_request(method: &str, uri: &str, body: Body) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(ADMIN_AUTH_HEADER, SECRET)
            .header("content-type", "application/json")
            .body(body)
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_wallet_types() {
        let app = build_router(test_state());
        let req = Request::builder()
            .uri("/api/v1/wallet-types")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let options: Vec<WalletOption> = body_json(resp).await;
        let keys: Vec<_> = options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(
            keys,
            ["MWALLET_EVC", "MWALLET_ZAAD", "MWALLET_SAHAL", "MWALLET_WAAFI"]
        );
    }

    #[tokio::test]
    async fn test_resolve() {
        let app = build_router(test_state());

        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/resolve")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"phone":"+25268123456"}"#))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let resolved: ResolveResponse = body_json(resp).await;
        assert_eq!(resolved.mode, ResolveMode::First);
        assert_eq!(resolved.wallet_types, ["MWALLET_EVC"]);

        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/resolve")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"phone":"063 123 4567","mode":"all","normalize":true}"#,
            ))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        let resolved: ResolveResponse = body_json(resp).await;
        assert_eq!(resolved.phone, "+252631234567");
        assert_eq!(resolved.wallet_types, ["MWALLET_ZAAD", "MWALLET_WAAFI"]);

        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/resolve")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"phone":"not a number","normalize":true}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let resolved: ResolveResponse = body_json(resp).await;
        assert!(resolved.wallet_types.is_empty());
    }

    #[tokio::test]
    async fn test_admin_requires_secret() {
        let app = build_router(test_state());

        let req = Request::builder()
            .uri("/api/v1/admin/config")
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = Request::builder()
            .uri("/api/v1/admin/config")
            .header(ADMIN_AUTH_HEADER, "wrong")
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = app
            .oneshot(admin_request("GET", "/api/v1/admin/config", Body::empty()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let config: WalletConfig = body_json(resp).await;
        assert_eq!(config.wallet_types.len(), 4);
    }

    #[tokio::test]
    async fn test_update_wallet_type() {
        let state = test_state();
        let app = build_router(state.clone());

        let resp = app
            .clone()
            .oneshot(admin_request(
                "PATCH",
                "/api/v1/admin/wallet-types/MWALLET_ZAAD",
                Body::from(r#"{"prefixes":["+25263","+25264"]}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: WalletType = body_json(resp).await;
        assert_eq!(updated.prefixes.len(), 2);
        assert_eq!(
            state.store.resolve("+25264111111", ResolveMode::First),
            ["MWALLET_ZAAD"]
        );

        let resp = app
            .clone()
            .oneshot(admin_request(
                "GET",
                "/api/v1/admin/wallet-types/MWALLET_ZAAD",
                Body::empty(),
            ))
            .await
            .unwrap();
        let fetched: WalletType = body_json(resp).await;
        assert_eq!(fetched, updated);

        let resp = app
            .clone()
            .oneshot(admin_request(
                "PATCH",
                "/api/v1/admin/wallet-types/MWALLET_NOPE",
                Body::from(r#"{"label":"x"}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = app
            .clone()
            .oneshot(admin_request(
                "PATCH",
                "/api/v1/admin/wallet-types/MWALLET_ZAAD",
                Body::from(r#"{"prefixes":[]}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // Malformed prefixes and key changes are rejected before the store sees them.
        for body in [r#"{"prefixes":["25263"]}"#, r#"{"key":"MWALLET_X"}"#] {
            let resp = app
                .clone()
                .oneshot(admin_request(
                    "PATCH",
                    "/api/v1/admin/wallet-types/MWALLET_ZAAD",
                    Body::from(body),
                ))
                .await
                .unwrap();
            assert!(resp.status().is_client_error(), "{body}");
        }

        assert_eq!(state.store.version(), 1);
    }

    #[tokio::test]
    async fn test_export_import_reset() {
        let state = test_state();
        let app = build_router(state.clone());

        let resp = app
            .clone()
            .oneshot(admin_request(
                "PATCH",
                "/api/v1/admin/wallet-types/MWALLET_SAHAL",
                Body::from(r#"{"label":"Sahal (Golis)"}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .clone()
            .oneshot(admin_request("GET", "/api/v1/admin/export", Body::empty()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let exported = String::from_utf8(body_bytes(resp).await).unwrap();

        let resp = app
            .clone()
            .oneshot(admin_request("POST", "/api/v1/admin/reset", Body::empty()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let reset: AdminConfigResponse = body_json(resp).await;
        assert_eq!(reset.config.get("MWALLET_SAHAL").unwrap().label, "SAHAL");

        let resp = app
            .clone()
            .oneshot(admin_request(
                "POST",
                "/api/v1/admin/import",
                Body::from(r#"{"walletTypes":[{"key":"X"}]}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(state.store.config(), reset.config);

        let resp = app
            .oneshot(admin_request(
                "POST",
                "/api/v1/admin/import",
                Body::from(exported),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let imported: AdminConfigResponse = body_json(resp).await;
        assert_eq!(
            imported.config.get("MWALLET_SAHAL").unwrap().label,
            "Sahal (Golis)"
        );
        assert_eq!(imported.version, 3);
    }

    #[tokio::test]
    async fn test_change_logger_stops_with_store() {
        let state = test_state();
        let handle = spawn_change_logger(state.store.clone());
        state.store.reset_to_default().unwrap();
        drop(state);
        tokio::time::timeout(std::time::Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
    }
}
