//! The wallet routing config store.
//!
//! `WalletRoutingStore` is the only way to change the routing configuration.
//! It owns the [`WalletTypeRegistry`], mirrors every accepted change to a
//! [`StorageMedium`], and keeps a watch-based version counter so consumers
//! can react to changes without polling.

use compact_str::CompactString;
use lacag_sdk::objects::{ResolveMode, WalletConfig, WalletType, WalletTypePatch};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::defaults::default_config;
use super::registry::WalletTypeRegistry;
use super::resolver::PrefixResolver;
use crate::error::StoreError;
use crate::storage::{DEFAULT_STORAGE_KEY, StorageMedium};

/// A shared handle to the routing configuration.
///
/// Cloning is cheap and every clone observes the same state; the
/// application builds one store at startup and hands clones to whoever
/// needs it.
pub struct WalletRoutingStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    registry: Mutex<WalletTypeRegistry>,
    storage: Arc<dyn StorageMedium>,
    storage_key: String,
    version: AtomicU64,
    version_tx: watch::Sender<u64>,
}

/// Receives notifications when a [`WalletRoutingStore`] is updated.
///
/// Call [`changed()`](ConfigWatcher::changed) to wait for the next update.
pub struct ConfigWatcher {
    version_rx: watch::Receiver<u64>,
}

/// Where [`WalletRoutingStore::load`] took its configuration from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// A valid snapshot was found in storage.
    Storage,
    /// Nothing usable was stored; the built-in defaults are in effect.
    Defaults,
}

// -- WalletRoutingStore -------------------------------------------------

impl WalletRoutingStore {
    /// Build a store over `storage`, persisting under the default key.
    pub fn load(storage: Arc<dyn StorageMedium>) -> Self {
        Self::load_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Build a store over `storage`, persisting under `storage_key`.
    ///
    /// Adopts the stored snapshot if it parses and validates, otherwise
    /// starts from the defaults. Never fails.
    pub fn load_with_key(storage: Arc<dyn StorageMedium>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let (config, _) = read_snapshot(storage.as_ref(), &storage_key);
        let (version_tx, _) = watch::channel(0u64);
        Self {
            inner: Arc::new(StoreInner {
                registry: Mutex::new(registry_from(config)),
                storage,
                storage_key,
                version: AtomicU64::new(0),
                version_tx,
            }),
        }
    }

    /// Re-read the snapshot from storage, as on a fresh start.
    ///
    /// Watchers are notified whether or not the content changed.
    pub fn reload(&self) -> LoadSource {
        let mut registry = self.inner.registry.lock();
        let (config, source) = read_snapshot(self.inner.storage.as_ref(), &self.inner.storage_key);
        *registry = registry_from(config);
        self.notify();
        drop(registry);
        source
    }

    /// An owned copy of the current configuration.
    pub fn config(&self) -> WalletConfig {
        self.inner.registry.lock().to_config()
    }

    /// An owned copy of one wallet type.
    pub fn wallet_type(&self, key: &str) -> Option<WalletType> {
        self.inner.registry.lock().get(key)
    }

    /// An owned copy of every wallet type in registry order.
    pub fn wallet_types(&self) -> Vec<WalletType> {
        self.inner.registry.lock().list()
    }

    /// Merge `patch` into the wallet type `key` and persist.
    ///
    /// Returns the updated wallet type. Fails with [`StoreError::NotFound`]
    /// for an unknown key, [`StoreError::Validation`] if the result breaks an
    /// invariant (e.g. an empty prefix list) and
    /// [`StoreError::PersistenceUnavailable`] if storage refuses the write.
    pub fn update_wallet_type(
        &self,
        key: &str,
        patch: WalletTypePatch,
    ) -> Result<WalletType, StoreError> {
        let mut registry = self.inner.registry.lock();
        let mut wallet_types = registry.list();
        let entry = wallet_types
            .iter_mut()
            .find(|w| w.key == key)
            .ok_or_else(|| StoreError::NotFound(CompactString::from(key)))?;
        patch.apply_to(entry);
        let updated = entry.clone();

        self.commit(&mut registry, WalletConfig::new(wallet_types))?;
        self.notify();
        drop(registry);

        info!(key = %updated.key, prefixes = updated.prefixes.len(), "wallet type updated");
        Ok(updated)
    }

    /// Replace the configuration with a fresh copy of the defaults and persist.
    pub fn reset_to_default(&self) -> Result<(), StoreError> {
        let mut registry = self.inner.registry.lock();
        self.commit(&mut registry, default_config())?;
        self.notify();
        drop(registry);

        info!("wallet routing config reset to defaults");
        Ok(())
    }

    /// The current configuration as pretty-printed JSON.
    pub fn export_config(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(&self.config()).map_err(StoreError::Serialize)
    }

    /// Parse `text`, validate it, persist it and make it current.
    pub fn import_config(&self, text: &str) -> Result<(), StoreError> {
        let config = WalletConfig::from_json(text).inspect_err(|e| {
            debug!(error = %e, "rejected imported wallet routing config");
        })?;

        let mut registry = self.inner.registry.lock();
        let count = config.wallet_types.len();
        self.commit(&mut registry, config)?;
        self.notify();
        drop(registry);

        info!(wallet_types = count, "wallet routing config imported");
        Ok(())
    }

    /// Classify `phone` against the current configuration.
    pub fn resolve(&self, phone: &str, mode: ResolveMode) -> Vec<CompactString> {
        let registry = self.inner.registry.lock();
        PrefixResolver::new(mode).resolve(registry.as_slice(), phone)
    }

    /// Number of successful changes since the store was built.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Relaxed)
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> ConfigWatcher {
        ConfigWatcher {
            version_rx: self.inner.version_tx.subscribe(),
        }
    }

    /// Validate `config`, write it to storage, then swap it into `registry`.
    ///
    /// The caller holds the registry lock for the whole sequence so
    /// concurrent writers serialize.
    fn commit(
        &self,
        registry: &mut WalletTypeRegistry,
        config: WalletConfig,
    ) -> Result<(), StoreError> {
        config.validate()?;
        let mut next = registry.clone();
        next.replace_all(config.wallet_types)?;
        self.persist(&next)?;
        *registry = next;
        Ok(())
    }

    fn persist(&self, registry: &WalletTypeRegistry) -> Result<(), StoreError> {
        let json = serde_json::to_string(&registry.to_config()).map_err(StoreError::Serialize)?;
        self.inner
            .storage
            .set_item(&self.inner.storage_key, &json)
            .inspect_err(|e| {
                warn!(
                    error = %e,
                    key = %self.inner.storage_key,
                    "failed to persist wallet routing config"
                );
            })?;
        Ok(())
    }

    /// Bump the version and wake watchers.
    ///
    /// Called with the registry lock held so versions are published in
    /// commit order.
    fn notify(&self) {
        let new_version = self.inner.version.fetch_add(1, Ordering::Relaxed) + 1;
        // `send_replace` also records the version while nobody is subscribed.
        self.inner.version_tx.send_replace(new_version);
    }
}

impl Clone for WalletRoutingStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

fn read_snapshot(storage: &dyn StorageMedium, key: &str) -> (WalletConfig, LoadSource) {
    let stored = match storage.get_item(key) {
        Ok(stored) => stored,
        Err(e) => {
            warn!(error = %e, key, "failed to read wallet routing config, using defaults");
            None
        }
    };
    let Some(text) = stored else {
        debug!(key, "no stored wallet routing config, using defaults");
        return (default_config(), LoadSource::Defaults);
    };
    match WalletConfig::from_json(&text) {
        Ok(config) => {
            debug!(
                key,
                wallet_types = config.wallet_types.len(),
                "loaded stored wallet routing config"
            );
            (config, LoadSource::Storage)
        }
        Err(e) => {
            warn!(error = %e, key, "stored wallet routing config is corrupt, using defaults");
            (default_config(), LoadSource::Defaults)
        }
    }
}

fn registry_from(config: WalletConfig) -> WalletTypeRegistry {
    // `read_snapshot` only yields validated configs; fall back to the
    // defaults rather than panic if that ever stops holding.
    WalletTypeRegistry::new(config.wallet_types).unwrap_or_else(|_| {
        WalletTypeRegistry::new(default_config().wallet_types).unwrap_or_default()
    })
}

// -- ConfigWatcher ------------------------------------------------------

impl ConfigWatcher {
    /// Wait until the store is updated.
    ///
    /// Returns `Ok(())` when a new version is available, or `Err` if the
    /// [`WalletRoutingStore`] has been dropped.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.version_rx.changed().await
    }

    /// The latest version seen by this watcher.
    pub fn version(&self) -> u64 {
        *self.version_rx.borrow()
    }
}
