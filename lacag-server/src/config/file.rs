//! TOML file configuration structures.
//!
//! These structs directly map to the `lacag-config.toml` file format.

use lacag_core::storage::DEFAULT_STORAGE_KEY;
use lacag_sdk::objects::ResolveMode;
use lacag_sdk::phone::DEFAULT_COUNTRY_CODE;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub admin: AdminConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Admin configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// The admin secret. If this is plaintext (doesn't start with `$argon2`),
    /// it will be hashed and the config file will be rewritten.
    pub secret: String,
}

/// Which medium persists the wallet routing config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per key under `dir`.
    #[default]
    File,
    /// Process memory only; every restart starts from the defaults.
    Memory,
}

/// Storage configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Directory for the file backend.
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
    /// Key the routing config is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("./lacag-data")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Resolver configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Mode used when a resolve request does not name one.
    #[serde(default)]
    pub mode: ResolveMode,
    /// Country code for local-format numbers, digits only.
    #[serde(default = "default_country_code")]
    pub country_code: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: ResolveMode::default(),
            country_code: default_country_code(),
        }
    }
}

fn default_country_code() -> String {
    DEFAULT_COUNTRY_CODE.to_string()
}

impl FileConfig {
    /// Check if the admin secret is already hashed (argon2 format).
    pub fn is_admin_secret_hashed(&self) -> bool {
        self.admin.secret.starts_with("$argon2")
    }
}
