//! Format templates

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::format::apply_pattern;

/// Placeholder used when a template is parsed from a bare string.
pub const DEFAULT_PLACEHOLDER: char = '#';

/// An immutable format template.
///
/// Each character is either the placeholder, filled by the next input
/// character, or a literal that is inserted as-is.
///
/// # Examples
///
/// ```rust
/// use fieldguard_mask::Template;
///
/// let phone = Template::new("(###) ###-####", '#');
/// assert_eq!(phone.len(), 14);
/// assert_eq!(phone.slots(), 10);
/// assert_eq!(phone.apply("5550101999"), "(555) 010-1999");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    source: String,
    chars: Box<[char]>,
    placeholder: char,
}

impl Template {
    /// Creates a template with an explicit placeholder character.
    pub fn new(pattern: impl Into<String>, placeholder: char) -> Self {
        let source = pattern.into();
        let chars = source.chars().collect();
        Self {
            source,
            chars,
            placeholder,
        }
    }

    /// Returns the template length in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the template has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the placeholder character.
    #[must_use]
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Returns the number of placeholder positions.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.chars.iter().filter(|&&c| c == self.placeholder).count()
    }

    /// Returns the template as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Formats raw input against this template.
    ///
    /// Equivalent to [`format_with_pattern`](crate::format_with_pattern)
    /// without re-collecting the template on every keystroke.
    #[must_use]
    pub fn apply(&self, raw: &str) -> String {
        apply_pattern(raw, &self.chars, self.placeholder)
    }

    /// Returns true if `formatted` fills every template position.
    ///
    /// Placeholder positions must hold a letter or digit and literal
    /// positions must hold their literal.
    #[must_use]
    pub fn is_complete(&self, formatted: &str) -> bool {
        let mut chars = formatted.chars();
        for &expected in &*self.chars {
            let Some(actual) = chars.next() else {
                return false;
            };
            let ok = if expected == self.placeholder {
                actual.is_alphanumeric()
            } else {
                actual == expected
            };
            if !ok {
                return false;
            }
        }
        chars.next().is_none()
    }
}

impl FromStr for Template {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s, DEFAULT_PLACEHOLDER))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
