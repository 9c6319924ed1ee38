//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), matching how the
//! activation threshold counts typed characters.

use crate::foundation::ValidationError;

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum number of chars.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length("", self.min, input.chars().count()) }
    new(min: usize) { Self { min } }
    fn min_length(min: usize);
}
