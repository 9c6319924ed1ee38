//! String content validators

use regex::RegexBuilder;

use crate::foundation::ValidationError;

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// The pattern is compiled once, when the validator is built, so a bad
    /// pattern surfaces as a construction error and never per keystroke.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("", "regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl MatchesRegex {
    /// Compiles a case-insensitive pattern.
    pub fn case_insensitive(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: RegexBuilder::new(pattern).case_insensitive(true).build()?,
        })
    }
}

/// Creates a case-insensitive regex validator.
pub fn matches_regex_ci(pattern: &str) -> Result<MatchesRegex, regex::Error> {
    MatchesRegex::case_insensitive(pattern)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_regex() {
        let validator = matches_regex(r"^\d{3}-\d{4}$").unwrap();
        assert!(validator.validate("123-4567").is_ok());
        assert!(validator.validate("invalid").is_err());
    }

    #[test]
    fn test_regex_is_case_sensitive_by_default() {
        let validator = matches_regex(r"^[A-Z]+$").unwrap();
        assert!(validator.validate("ABC").is_ok());
        assert!(validator.validate("abc").is_err());
    }

    #[test]
    fn test_regex_case_insensitive() {
        let validator = matches_regex_ci(r"^[A-Z]+$").unwrap();
        assert!(validator.validate("abc").is_ok());
        assert!(validator.validate("aBc").is_ok());
        assert!(validator.validate("ab1").is_err());
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        assert!(matches_regex(r"^(\d{5}$").is_err());
        assert!(matches_regex_ci(r"[A-Z").is_err());
    }

    #[test]
    fn test_error_carries_pattern() {
        let validator = matches_regex(r"^\d+$").unwrap();
        let err = validator.validate("abc").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("regex"));
        assert_eq!(err.param("pattern"), Some(r"^\d+$"));
    }
}
