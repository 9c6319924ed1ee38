//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Generic over the input type so `str` validators stay `str` validators.
/// All validators return `Result<(), ValidationError>`.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::foundation::{Validate, ValidationError};
///
/// struct Exactly { len: usize }
///
/// impl Validate for Exactly {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.chars().count() == self.len {
///             Ok(())
///         } else {
///             Err(ValidationError::new("exact_length", "wrong length"))
///         }
///     }
/// }
///
/// assert!(Exactly { len: 5 }.validate("12345").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns true if the input passes.
    ///
    /// Boolean view used wherever only the verdict matters, such as the
    /// predicate handed to an activatable field.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
