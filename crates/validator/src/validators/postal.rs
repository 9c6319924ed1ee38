//! Postal code validation
//!
//! Accepts a US ZIP code (`12345` or `12345-6789`) or a Canadian postal code
//! (`A1A 1A1`, space optional), case-insensitively. The whole input must
//! match.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::foundation::ValidationError;

/// Pattern accepted by [`PostalCode`].
pub const POSTAL_CODE_PATTERN: &str = r"^(\d{5}(-\d{4})?|[A-Z]\d[A-Z] ?\d[A-Z]\d)$";

/// Normalized length at which postal code fields start validating.
pub const POSTAL_CODE_MIN_CHARS: usize = 6;

static POSTAL_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(POSTAL_CODE_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("postal code pattern is valid")
});

crate::validator! {
    /// Validates US ZIP and Canadian postal codes.
    pub PostalCode { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("", "postal_code")
            .with_help("Use 12345, 12345-6789 or A1A 1A1")
    }
    new() {
        Self {
            pattern: POSTAL_CODE_REGEX.clone(),
        }
    }
    fn postal_code();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case::zip("12345")]
    #[case::zip_plus_four("12345-6789")]
    #[case::canadian_spaced("K1A 0B1")]
    #[case::canadian_compact("K1A0B1")]
    #[case::canadian_lowercase("k1a 0b1")]
    #[case::canadian_mixed_case("m5V3l9")]
    fn test_accepts(#[case] input: &str) {
        assert!(postal_code().validate(input).is_ok(), "{input} should pass");
    }

    #[rstest]
    #[case::too_short("1234")]
    #[case::letters("ABCDE")]
    #[case::empty("")]
    #[case::six_digits("123456")]
    #[case::short_plus_four("12345-678")]
    #[case::plus_four_without_dash("123456789")]
    #[case::double_space("K1A  0B1")]
    #[case::leading_text("zip 12345")]
    #[case::trailing_text("12345 ok")]
    #[case::formatted_zip("123 45")]
    fn test_rejects(#[case] input: &str) {
        assert!(postal_code().validate(input).is_err(), "{input} should fail");
    }

    #[test]
    fn test_error_shape() {
        let err = postal_code().validate("ABCDE").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("postal_code"));
        assert!(err.help.is_some());
    }
}
