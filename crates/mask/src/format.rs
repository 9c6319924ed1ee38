//! Template insertion

use crate::normalize::normalize;

/// Formats raw input against a template.
///
/// The input is normalized first (see [`normalize`](crate::normalize)), then
/// template literals are inserted at their template positions. Formatting
/// stops as soon as the input runs out, so a partially typed value never
/// gets trailing literals, and the result is capped at the template length.
///
/// Positions and lengths are counted in chars.
///
/// # Examples
///
/// ```rust
/// use fieldguard_mask::format_with_pattern;
///
/// assert_eq!(format_with_pattern("", "### ###", '#'), "");
/// assert_eq!(format_with_pattern("123", "### ###", '#'), "123");
/// assert_eq!(format_with_pattern("123456789", "### ###", '#'), "123 456");
/// assert_eq!(format_with_pattern("1a2!b3", "##-##", '#'), "1a-2b");
/// ```
#[must_use]
pub fn format_with_pattern(raw: &str, template: &str, placeholder: char) -> String {
    let pattern: Vec<char> = template.chars().collect();
    apply_pattern(raw, &pattern, placeholder)
}

pub(crate) fn apply_pattern(raw: &str, pattern: &[char], placeholder: char) -> String {
    let mut working: Vec<char> = normalize(raw).chars().collect();

    for (index, &literal) in pattern.iter().enumerate() {
        if index >= working.len() {
            break;
        }
        if literal == placeholder {
            continue;
        }
        working.insert(index, literal);
    }

    working.truncate(pattern.len());
    working.into_iter().collect()
}
