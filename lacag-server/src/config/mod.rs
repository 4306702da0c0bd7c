//! Configuration module for lacag-server.
//!
//! Handles loading configuration from TOML files and CLI arguments.
//! Plaintext admin secrets are hashed on first load and written back.

pub mod file;
pub mod runtime;

use crate::config::file::{FileConfig, StorageBackend, StorageConfig};
use crate::config::runtime::{
    AdminConfig, AdminSecretError, ResolverConfig, ServerConfig, SharedConfig,
};
use lacag_core::storage::{FileStorage, MemoryStorage, StorageMedium};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Longest country calling code (ITU E.164).
const MAX_COUNTRY_CODE_DIGITS: usize = 3;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("admin secret error: {0}")]
    AdminSecret(#[from] AdminSecretError),
}

/// Loaded configuration result containing all parts.
pub struct LoadedConfig {
    pub server: ServerConfig,
    pub admin: AdminConfig,
    pub resolver: ResolverConfig,
    pub storage: StorageConfig,
}

impl LoadedConfig {
    /// Convert into a SharedConfig with Arc<RwLock<T>> wrappers.
    ///
    /// Storage settings are only read at startup and are not shared.
    pub fn into_shared(self) -> SharedConfig {
        SharedConfig::new(self.server, self.admin, self.resolver)
    }
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    listen_override: Option<SocketAddr>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, listen_override: Option<SocketAddr>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply CLI overrides
    /// 3. Validate the configuration
    /// 4. Hash the admin secret if it's plaintext (and rewrite the file)
    /// 5. Build the loaded configuration
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        let mut file_config: FileConfig = toml::from_str(&config_content)?;

        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }

        self.validate(&file_config)?;

        let admin = if file_config.is_admin_secret_hashed() {
            AdminConfig::from_hash(&file_config.admin.secret)?
        } else {
            let admin = AdminConfig::from_plaintext(&file_config.admin.secret)?;
            file_config.admin.secret = admin.secret_hash().to_string();
            self.rewrite_config(&file_config)?;
            tracing::info!("Admin secret hashed and config file updated");
            admin
        };

        Ok(self.build_loaded_config(file_config, admin))
    }

    /// Reload the configuration (used during SIGHUP).
    pub fn reload(&self) -> Result<LoadedConfig, ConfigError> {
        self.load()
    }

    fn validate(&self, config: &FileConfig) -> Result<(), ConfigError> {
        if config.admin.secret.is_empty() {
            return Err(ConfigError::ValidationError(
                "admin secret must not be empty".to_string(),
            ));
        }

        let country_code = &config.resolver.country_code;
        if country_code.is_empty()
            || country_code.len() > MAX_COUNTRY_CODE_DIGITS
            || !country_code.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ConfigError::ValidationError(format!(
                "resolver.country_code {country_code:?} must be 1-{MAX_COUNTRY_CODE_DIGITS} digits"
            )));
        }

        let key = &config.storage.key;
        if key.is_empty()
            || key.starts_with('.')
            || !key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.')
        {
            return Err(ConfigError::ValidationError(format!(
                "storage.key {key:?} may only contain letters, digits, '_', '-' and '.'"
            )));
        }

        Ok(())
    }

    fn rewrite_config(&self, config: &FileConfig) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(config)?;

        // Write atomically: write to temp file, then rename
        let temp_path = self.config_path.with_extension("toml.tmp");
        std::fs::write(&temp_path, toml_string)?;
        std::fs::rename(&temp_path, &self.config_path)?;

        Ok(())
    }

    fn build_loaded_config(&self, file_config: FileConfig, admin: AdminConfig) -> LoadedConfig {
        LoadedConfig {
            server: ServerConfig {
                listen: file_config.server.listen,
            },
            admin,
            resolver: ResolverConfig::new(
                file_config.resolver.mode,
                file_config.resolver.country_code,
            ),
            storage: file_config.storage,
        }
    }
}

/// Build the storage medium selected by the `[storage]` section.
pub fn build_storage(config: &StorageConfig) -> Arc<dyn StorageMedium> {
    match config.backend {
        StorageBackend::File => Arc::new(FileStorage::new(&config.dir)),
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
    }
}
