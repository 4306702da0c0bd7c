//! Phone-number prefixes used to route a number to a wallet type.
//!
//! A prefix is a `+` followed by 3 to 6 decimal digits, e.g. `+252` or
//! `+25261`. [`is_valid_prefix`] is the grammar check; [`Prefix`] is the
//! validated form carried by [`WalletType`](crate::objects::WalletType).

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of digits after the leading `+`.
pub const MIN_PREFIX_DIGITS: usize = 3;
/// Maximum number of digits after the leading `+`.
pub const MAX_PREFIX_DIGITS: usize = 6;

/// Returns `true` if `candidate` is exactly `+` followed by 3 to 6 ASCII digits.
///
/// No trimming is performed; callers strip surrounding whitespace first.
pub fn is_valid_prefix(candidate: &str) -> bool {
    let Some(digits) = candidate.strip_prefix('+') else {
        return false;
    };
    (MIN_PREFIX_DIGITS..=MAX_PREFIX_DIGITS).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
}

/// A prefix string rejected by [`is_valid_prefix`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid prefix {0:?}: expected '+' followed by 3-6 digits")]
pub struct PrefixError(pub String);

/// A validated phone-number prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Prefix(CompactString);

impl Prefix {
    /// Validate `candidate` and wrap it.
    pub fn parse(candidate: &str) -> Result<Self, PrefixError> {
        if is_valid_prefix(candidate) {
            Ok(Self(CompactString::from(candidate)))
        } else {
            Err(PrefixError(candidate.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `phone` begins with this prefix.
    pub fn matches(&self, phone: &str) -> bool {
        phone.starts_with(self.as_str())
    }
}

impl TryFrom<String> for Prefix {
    type Error = PrefixError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl std::str::FromStr for Prefix {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_prefix_grammar() {
        assert!(is_valid_prefix("+252"));
        assert!(is_valid_prefix("+25261"));
        assert!(is_valid_prefix("+123456"));
        assert!(!is_valid_prefix("+2"));
        assert!(!is_valid_prefix("+25"));
        assert!(!is_valid_prefix("+1234567"));
        assert!(!is_valid_prefix("252"));
        assert!(!is_valid_prefix("+25a61"));
        assert!(!is_valid_prefix(""));
        assert!(!is_valid_prefix("+"));
        assert!(!is_valid_prefix(" +252"));
        assert!(!is_valid_prefix("+252 "));
        assert!(!is_valid_prefix("++252"));
        // Non-ASCII digits are not decimal digits for routing purposes.
        assert!(!is_valid_prefix("+٢٥٢"));
    }

    #[test]
    fn test_prefix_deserialization_validates() {
        let ok: Prefix = serde_json::from_str("\"+25263\"").unwrap();
        assert_eq!(ok.as_str(), "+25263");
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"+25263\"");

        let err = serde_json::from_str::<Prefix>("\"25263\"").unwrap_err();
        assert!(err.to_string().contains("invalid prefix"));
    }

    #[test]
    fn test_prefix_matches() {
        let prefix = Prefix::parse("+25261").unwrap();
        assert!(prefix.matches("+252612345678"));
        assert!(!prefix.matches("+252631234567"));
        assert!(!prefix.matches(""));
    }

    proptest! {
        #[test]
        fn validator_is_total(s in ".*") {
            let _ = is_valid_prefix(&s);
        }

        #[test]
        fn generated_prefixes_are_valid(digits in "[0-9]{3,6}") {
            let candidate = format!("+{digits}");
            prop_assert!(is_valid_prefix(&candidate));
            let parsed = Prefix::parse(&candidate).unwrap();
            prop_assert_eq!(parsed.as_str(), candidate.as_str());
        }

        #[test]
        fn missing_plus_is_rejected(digits in "[0-9]{0,10}") {
            prop_assert!(!is_valid_prefix(&digits));
        }
    }
}
