//! # fieldguard
//!
//! Binds text fields to an input mask and an activatable validator.
//!
//! The host owns the widgets and the event loop. It forwards three events
//! per field (text changed, focus lost, submit requested) and applies the
//! boolean verdict to its own presentation layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldguard::prelude::*;
//!
//! let mut fields = FieldRegistry::new();
//! fields.bind("zip", FieldBinding::postal_code());
//!
//! let mut verdict = None;
//! let shown = fields.dispatch("zip", FieldEvent::TextChanged("k1a0b1".into()), |ok| verdict = Some(ok));
//!
//! assert_eq!(shown.as_deref(), Some("k1a 0b1"));
//! assert_eq!(verdict, Some(true));
//! ```
//!
//! ## Crates
//!
//! - [`mask`]: pattern formatting (`"### ###"` templates)
//! - [`validator`]: validators and the activation gate
//! - [`log`]: subscriber setup for hosts and tests

mod binding;
mod config;
mod error;
mod event;
mod registry;

pub use fieldguard_log as log;
pub use fieldguard_mask as mask;
pub use fieldguard_validator as validator;

pub use binding::{FieldBinding, POSTAL_CODE_TEMPLATE};
pub use config::{FieldConfig, RuleConfig};
pub use error::ConfigError;
pub use event::FieldEvent;
pub use registry::FieldRegistry;

/// Common imports for hosts.
pub mod prelude {
    pub use crate::{
        ConfigError, FieldBinding, FieldConfig, FieldEvent, FieldRegistry, RuleConfig,
    };
    pub use fieldguard_mask::{Template, format_with_pattern};
    pub use fieldguard_validator::prelude::*;
}
