//! Application state shared across all request handlers.

use lacag_core::config::SharedConfig;
use lacag_core::routing::WalletRoutingStore;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// The wallet routing config store, built once in `main`.
    pub store: WalletRoutingStore,
    /// Runtime configuration (can be reloaded via SIGHUP).
    pub config: SharedConfig,
}

impl AppState {
    /// Create a new AppState with the given store and configuration.
    pub fn new(store: WalletRoutingStore, config: SharedConfig) -> Self {
        Self { store, config }
    }
}
