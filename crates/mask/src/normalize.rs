//! Input normalization

/// Strips every character that is not a letter or a digit, keeping order.
///
/// Letters and digits are classified with [`char::is_alphanumeric`], so
/// non-ASCII letters survive normalization.
///
/// # Examples
///
/// ```rust
/// use fieldguard_mask::normalize;
///
/// assert_eq!(normalize("K1A 0B1"), "K1A0B1");
/// assert_eq!(normalize("12345-6789"), "123456789");
/// assert_eq!(normalize(" - "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_separators() {
        assert_eq!(normalize("1a2!b3"), "1a2b3");
        assert_eq!(normalize("(555) 010-9999"), "5550109999");
    }

    #[test]
    fn test_keeps_unicode_letters() {
        assert_eq!(normalize("é-1 ß"), "é1ß");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
    }
}
