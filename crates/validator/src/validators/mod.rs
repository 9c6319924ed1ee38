//! Built-in validators
//!
//! # Categories
//!
//! - **Length**: minimum length in chars
//! - **Content**: arbitrary regular expressions
//! - **Postal**: US ZIP and Canadian postal codes
//!
//! # Examples
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! assert!(postal_code().validate("12345-6789").is_ok());
//! assert!(min_length(3).validate("ab").is_err());
//! ```

pub mod content;
pub mod length;
pub mod postal;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use content::{MatchesRegex, matches_regex, matches_regex_ci};
pub use length::{MinLength, min_length};
pub use postal::{POSTAL_CODE_MIN_CHARS, POSTAL_CODE_PATTERN, PostalCode, postal_code};
