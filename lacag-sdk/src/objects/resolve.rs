//! Phone-number resolution request and response types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many wallet types a resolution reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// The first matching wallet type in registry order.
    #[default]
    First,
    /// Every matching wallet type, in registry order.
    All,
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveMode::First => f.write_str("first"),
            ResolveMode::All => f.write_str("all"),
        }
    }
}

/// An unrecognized resolve mode string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resolve mode {0:?} (expected \"first\" or \"all\")")]
pub struct UnknownResolveMode(pub String);

impl FromStr for ResolveMode {
    type Err = UnknownResolveMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(ResolveMode::First),
            "all" => Ok(ResolveMode::All),
            other => Err(UnknownResolveMode(other.to_owned())),
        }
    }
}

/// `POST /api/v1/resolve` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// The phone number as entered.
    pub phone: String,
    /// Overrides the server's configured mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ResolveMode>,
    /// Normalize `phone` against the server's country code first.
    #[serde(default)]
    pub normalize: bool,
}

/// `POST /api/v1/resolve` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveResponse {
    /// The number that was matched (normalized if requested).
    pub phone: String,
    pub mode: ResolveMode,
    /// Matching wallet type keys in registry order; empty if none match.
    pub wallet_types: Vec<CompactString>,
}
