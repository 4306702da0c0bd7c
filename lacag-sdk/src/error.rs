//! Validation errors shared by every component that accepts routing config.

use compact_str::CompactString;

use crate::prefix::PrefixError;

/// A proposed wallet routing configuration failed structural or format checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The document could not be parsed into the expected shape.
    #[error("malformed config: {0}")]
    Malformed(String),

    #[error(transparent)]
    InvalidPrefix(#[from] PrefixError),

    #[error("wallet type {key} has no prefixes")]
    EmptyPrefixes { key: CompactString },

    #[error("wallet type {key} lists prefix {prefix} more than once")]
    DuplicatePrefix {
        key: CompactString,
        prefix: CompactString,
    },

    #[error("duplicate wallet type key {0}")]
    DuplicateKey(CompactString),
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
