//! Core validation types and traits
//!
//! - **Traits**: `Validate`
//! - **Errors**: `ValidationError`
//!
//! Validators are generic over their input type, so a validator for `str`
//! cannot be handed a number by accident:
//!
//! ```rust
//! use fieldguard_validator::foundation::{Validate, ValidationError};
//!
//! struct NoDigits;
//!
//! impl Validate for NoDigits {
//!     type Input = str;
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         if input.chars().any(|c| c.is_ascii_digit()) {
//!             Err(ValidationError::new("no_digits", "Digits are not allowed"))
//!         } else {
//!             Ok(())
//!         }
//!     }
//! }
//!
//! assert!(NoDigits.validate("abc").is_ok());
//! assert!(NoDigits.validate("a1c").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
