//! Configuration errors

use thiserror::Error;

/// Errors raised while building field bindings.
///
/// All of them surface when a binding is built, never while the user types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A validation pattern failed to compile.
    #[error("invalid validation pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A named field failed to build.
    #[error("field {field:?}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<ConfigError>,
    },

    /// The configuration document is malformed.
    #[error("malformed field configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Attaches a field name to this error.
    pub fn for_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }
}
