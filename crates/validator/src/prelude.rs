//! Prelude module for convenient imports.
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! let mut field = ActivatableValidator::new("12345-6789", POSTAL_CODE_MIN_CHARS);
//! assert_eq!(field.check(&postal_code()), Some(Ok(())));
//! ```

pub use crate::activation::{ActivatableValidator, ActivationGate, GateState, TextSource, from_fn};
pub use crate::foundation::{Validate, ValidationError, ValidationResult};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
