//! In-memory table of wallet types.

use itertools::Itertools;
use lacag_sdk::ValidationError;
use lacag_sdk::objects::{WalletConfig, WalletType};

/// The authoritative ordered list of wallet types.
///
/// Reads hand out owned copies; the only way to change the content is
/// [`replace_all`](WalletTypeRegistry::replace_all).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletTypeRegistry {
    wallet_types: Vec<WalletType>,
}

impl WalletTypeRegistry {
    pub fn new(wallet_types: Vec<WalletType>) -> Result<Self, ValidationError> {
        let mut registry = Self::default();
        registry.replace_all(wallet_types)?;
        Ok(registry)
    }

    pub fn get(&self, key: &str) -> Option<WalletType> {
        self.wallet_types.iter().find(|w| w.key == key).cloned()
    }

    pub fn list(&self) -> Vec<WalletType> {
        self.wallet_types.clone()
    }

    /// Swap in `wallet_types` as a whole.
    ///
    /// Rejects a list with repeated keys without touching the current content.
    pub fn replace_all(&mut self, wallet_types: Vec<WalletType>) -> Result<(), ValidationError> {
        if let Some(key) = wallet_types.iter().map(|w| &w.key).duplicates().next() {
            return Err(ValidationError::DuplicateKey(key.clone()));
        }
        self.wallet_types = wallet_types;
        Ok(())
    }

    pub(crate) fn as_slice(&self) -> &[WalletType] {
        &self.wallet_types
    }

    pub fn to_config(&self) -> WalletConfig {
        WalletConfig::new(self.list())
    }
}
