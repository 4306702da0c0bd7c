//! Wallet routing configuration objects.
//!
//! These map directly to the persisted JSON document:
//!
//! ```text
//! { "walletTypes": [ { "key": "...", "label": "...", "prefixes": ["+252..."], "placeholder": "..." } ] }
//! ```

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ValidationError;
use crate::prefix::Prefix;

/// One mobile-money provider routing rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletType {
    /// Stable identifier, e.g. `MWALLET_EVC`.
    pub key: CompactString,
    /// Human-readable display name.
    pub label: String,
    /// Phone-number prefixes routed to this wallet type.
    pub prefixes: Vec<Prefix>,
    /// Example input shown to users.
    pub placeholder: String,
}

impl WalletType {
    pub fn new(
        key: impl Into<CompactString>,
        label: impl Into<String>,
        prefixes: Vec<Prefix>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            prefixes,
            placeholder: placeholder.into(),
        }
    }

    /// Whether `phone` starts with any of this wallet type's prefixes.
    pub fn matches(&self, phone: &str) -> bool {
        self.prefixes.iter().any(|p| p.matches(phone))
    }

    /// Check the per-wallet-type invariants: non-empty, no repeated prefix.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prefixes.is_empty() {
            return Err(ValidationError::EmptyPrefixes {
                key: self.key.clone(),
            });
        }
        let mut seen = HashSet::with_capacity(self.prefixes.len());
        for prefix in &self.prefixes {
            if !seen.insert(prefix.as_str()) {
                return Err(ValidationError::DuplicatePrefix {
                    key: self.key.clone(),
                    prefix: prefix.as_str().into(),
                });
            }
        }
        Ok(())
    }
}

/// The persisted root of the wallet routing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConfig {
    pub wallet_types: Vec<WalletType>,
}

impl WalletConfig {
    pub fn new(wallet_types: Vec<WalletType>) -> Self {
        Self { wallet_types }
    }

    /// Parse and validate a JSON document.
    ///
    /// Missing or mistyped fields and malformed prefixes are reported as
    /// [`ValidationError`]; nothing here panics on bad input.
    pub fn from_json(text: &str) -> Result<Self, ValidationError> {
        let config: WalletConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant of a persisted configuration.
    ///
    /// Prefixes may overlap across different wallet types.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut keys = HashSet::with_capacity(self.wallet_types.len());
        for wallet_type in &self.wallet_types {
            if !keys.insert(wallet_type.key.as_str()) {
                return Err(ValidationError::DuplicateKey(wallet_type.key.clone()));
            }
            wallet_type.validate()?;
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&WalletType> {
        self.wallet_types.iter().find(|w| w.key == key)
    }
}

/// A partial update for a single wallet type.
///
/// The key is not part of the patch; wallet type keys never change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletTypePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<Prefix>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl WalletTypePatch {
    /// A patch that only replaces the prefix list.
    pub fn prefixes(prefixes: Vec<Prefix>) -> Self {
        Self {
            prefixes: Some(prefixes),
            ..Self::default()
        }
    }

    /// Merge the provided fields into `target`.
    pub fn apply_to(self, target: &mut WalletType) {
        if let Some(label) = self.label {
            target.label = label;
        }
        if let Some(prefixes) = self.prefixes {
            target.prefixes = prefixes;
        }
        if let Some(placeholder) = self.placeholder {
            target.placeholder = placeholder;
        }
    }
}
