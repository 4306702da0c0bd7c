//! Phone number → wallet type resolution.

use compact_str::CompactString;
use lacag_sdk::objects::{ResolveMode, WalletType};

/// Classifies a phone number against the configured wallet types.
///
/// A wallet type matches when the number starts with any of its prefixes.
/// Wallet types are tested in registry order and no longest-prefix rule is
/// applied, so with [`ResolveMode::First`] an earlier, more generic prefix
/// wins over a later, more specific one.
///
/// The number must already carry `+` and the country code; see
/// [`lacag_sdk::phone::normalize_phone`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixResolver {
    mode: ResolveMode,
}

impl PrefixResolver {
    pub fn new(mode: ResolveMode) -> Self {
        Self { mode }
    }

    /// Keys of the matching wallet types, in registry order.
    pub fn resolve(&self, wallet_types: &[WalletType], phone: &str) -> Vec<CompactString> {
        let mut matches = wallet_types.iter().filter(|w| w.matches(phone));
        match self.mode {
            ResolveMode::First => matches.next().map(|w| w.key.clone()).into_iter().collect(),
            ResolveMode::All => matches.map(|w| w.key.clone()).collect(),
        }
    }
}
