//! User API request and response types.
//!
//! These types are used by the payment form to offer and classify
//! mobile-money wallets on behalf of the paying user.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::wallet::WalletType;
use crate::prefix::Prefix;

/// A wallet type as offered to the paying user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletOption {
    pub key: CompactString,
    pub label: String,
    pub placeholder: String,
    pub prefixes: Vec<Prefix>,
}

impl From<WalletType> for WalletOption {
    fn from(w: WalletType) -> Self {
        Self {
            key: w.key,
            label: w.label,
            placeholder: w.placeholder,
            prefixes: w.prefixes,
        }
    }
}
