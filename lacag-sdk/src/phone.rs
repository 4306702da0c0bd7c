//! Phone-number normalization for routing.
//!
//! Resolution compares raw string prefixes, so the number must already carry
//! a leading `+` and the country code. Payment forms collect numbers in the
//! local format shown by a wallet's placeholder (`61xxxxxxx`), which is what
//! [`normalize_phone`] turns into `+25261xxxxxxx`.

/// Default country code of the platform (Somalia).
pub const DEFAULT_COUNTRY_CODE: &str = "252";

const SEPARATORS: &[char] = &[' ', '-', '.', '(', ')'];

/// Normalize a user-entered phone number to `+{country code}{subscriber}`.
///
/// - `+25261...` is kept as is.
/// - `0025261...` becomes `+25261...`.
/// - `061...` drops the trunk `0` and gains `+{country_code}`.
/// - any other digit string gains `+{country_code}`.
///
/// Spaces, dashes, dots and parentheses are ignored. Returns `None` for
/// empty input or anything containing other characters.
pub fn normalize_phone(raw: &str, country_code: &str) -> Option<String> {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect();

    let (international, digits) = if let Some(rest) = compact.strip_prefix('+') {
        (true, rest)
    } else if let Some(rest) = compact.strip_prefix("00") {
        (true, rest)
    } else if let Some(rest) = compact.strip_prefix('0') {
        (false, rest)
    } else {
        (false, compact.as_str())
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if international {
        Some(format!("+{digits}"))
    } else {
        Some(format!("+{country_code}{digits}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone() {
        let cc = DEFAULT_COUNTRY_CODE;
        assert_eq!(
            normalize_phone("+252612345678", cc).as_deref(),
            Some("+252612345678")
        );
        assert_eq!(
            normalize_phone("00252612345678", cc).as_deref(),
            Some("+252612345678")
        );
        assert_eq!(
            normalize_phone("0612345678", cc).as_deref(),
            Some("+252612345678")
        );
        assert_eq!(
            normalize_phone("612345678", cc).as_deref(),
            Some("+252612345678")
        );
        assert_eq!(
            normalize_phone(" 61 234-56.78 ", cc).as_deref(),
            Some("+252612345678")
        );
        assert_eq!(
            normalize_phone("(063) 123 4567", cc).as_deref(),
            Some("+252631234567")
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        let cc = DEFAULT_COUNTRY_CODE;
        assert_eq!(normalize_phone("", cc), None);
        assert_eq!(normalize_phone("+", cc), None);
        assert_eq!(normalize_phone("0", cc), None);
        assert_eq!(normalize_phone("61abc", cc), None);
        assert_eq!(normalize_phone("+252+61", cc), None);
    }
}
