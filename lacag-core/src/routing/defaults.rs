//! The built-in routing snapshot used on first start and by reset.

use lacag_sdk::objects::{WalletConfig, WalletType};
use lacag_sdk::prefix::Prefix;

/// `(key, label, prefixes, placeholder)` for every built-in wallet type.
const DEFAULT_WALLET_TYPES: &[(&str, &str, &[&str], &str)] = &[
    (
        "MWALLET_EVC",
        "EVC Plus",
        &["+25261", "+25268"],
        "61xxxxxxx or 68xxxxxxx",
    ),
    ("MWALLET_ZAAD", "ZAAD", &["+25263"], "63xxxxxxx"),
    ("MWALLET_SAHAL", "SAHAL", &["+25290"], "90xxxxxxx"),
    ("MWALLET_WAAFI", "WAAFI", &["+252"], "xxxxxxxxx"),
];

/// A fresh copy of the default configuration.
pub fn default_config() -> WalletConfig {
    let wallet_types = DEFAULT_WALLET_TYPES
        .iter()
        .map(|&(key, label, prefixes, placeholder)| {
            WalletType::new(
                key,
                label,
                prefixes
                    .iter()
                    .filter_map(|p| Prefix::parse(p).ok())
                    .collect(),
                placeholder,
            )
        })
        .collect();
    WalletConfig::new(wallet_types)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.wallet_types.len(), 4);
        // Every literal prefix survived parsing.
        for ((_, _, prefixes, _), wallet_type) in
            DEFAULT_WALLET_TYPES.iter().zip(&config.wallet_types)
        {
            assert_eq!(prefixes.len(), wallet_type.prefixes.len());
        }
        assert_eq!(
            config.get("MWALLET_EVC").map(|w| w.label.as_str()),
            Some("EVC Plus")
        );
    }
}
