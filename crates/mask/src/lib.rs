//! # fieldguard-mask
//!
//! Incremental pattern formatting for masked text input.
//!
//! A template such as `"### ###"` describes the shape of the value a user is
//! typing: every placeholder (`#` here) is filled by the next alphanumeric
//! input character, every other character is a literal inserted at its
//! position. Formatting runs on each keystroke, so it tolerates partial input
//! and input that already contains literals from a previous pass.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldguard_mask::{Template, format_with_pattern};
//!
//! assert_eq!(format_with_pattern("12345", "### ###", '#'), "123 45");
//!
//! let postal: Template = "### ###".parse().unwrap();
//! assert_eq!(postal.apply("k1a0b1"), "k1a 0b1");
//! assert!(postal.is_complete(&postal.apply("k1a0b1")));
//! ```

mod format;
mod normalize;
mod template;

pub use format::format_with_pattern;
pub use normalize::normalize;
pub use template::{DEFAULT_PLACEHOLDER, Template};
