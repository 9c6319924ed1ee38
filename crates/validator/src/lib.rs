//! # fieldguard-validator
//!
//! Validation for text fields that should stay quiet while the user is still
//! typing.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! let mut field = ActivatableValidator::new(String::from("K1A"), POSTAL_CODE_MIN_CHARS);
//! let rule = postal_code();
//!
//! // Below the threshold nothing fires.
//! assert!(field.check(&rule).is_none());
//!
//! *field.source_mut() = String::from("K1A 0B1");
//! assert!(matches!(field.check(&rule), Some(Ok(()))));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Length**: [`MinLength`](validators::MinLength)
//! - **Pattern**: [`MatchesRegex`](validators::MatchesRegex),
//!   [`PostalCode`](validators::PostalCode)
//!
//! ## Activation
//!
//! [`ActivatableValidator`](activation::ActivatableValidator) gates any
//! predicate or validator behind a minimum input length. Once the threshold
//! is reached the gate stays open for the lifetime of the instance.

pub mod activation;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
