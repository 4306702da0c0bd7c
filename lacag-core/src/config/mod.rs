//! Runtime configuration types for Lacag.
//!
//! These types represent the validated runtime configuration used by the
//! server. The actual config loading/parsing is handled by the server crate.

mod admin;
mod resolver;
mod server;

pub use admin::{AdminConfig, AdminSecretError};
pub use resolver::ResolverConfig;
pub use server::ServerConfig;

use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared configuration state with separate locks for each section.
///
/// This allows independent access to different configuration sections
/// without blocking other readers/writers. The wallet routing rules are not
/// part of it; they live in the
/// [`WalletRoutingStore`](crate::routing::WalletRoutingStore).
#[derive(Clone)]
pub struct SharedConfig {
    /// Server configuration (listen address, etc.).
    pub server: Arc<RwLock<ServerConfig>>,
    /// Admin configuration (authentication).
    pub admin: Arc<RwLock<AdminConfig>>,
    /// Phone resolution settings.
    pub resolver: Arc<RwLock<ResolverConfig>>,
}

impl SharedConfig {
    /// Create a new SharedConfig from individual configuration parts.
    pub fn new(server: ServerConfig, admin: AdminConfig, resolver: ResolverConfig) -> Self {
        Self {
            server: Arc::new(RwLock::new(server)),
            admin: Arc::new(RwLock::new(admin)),
            resolver: Arc::new(RwLock::new(resolver)),
        }
    }
}
