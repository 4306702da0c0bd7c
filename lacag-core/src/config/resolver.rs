//! Phone resolution settings.

use lacag_sdk::objects::ResolveMode;
use lacag_sdk::phone::normalize_phone;

/// How the public resolve endpoint classifies numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Mode used when a request does not name one.
    pub mode: ResolveMode,
    /// Country code prepended to local-format numbers, without `+`.
    pub country_code: String,
}

impl ResolverConfig {
    pub fn new(mode: ResolveMode, country_code: impl Into<String>) -> Self {
        Self {
            mode,
            country_code: country_code.into(),
        }
    }

    /// Normalize a user-entered number with this config's country code.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        normalize_phone(raw, &self.country_code)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new(
            ResolveMode::default(),
            lacag_sdk::phone::DEFAULT_COUNTRY_CODE,
        )
    }
}
