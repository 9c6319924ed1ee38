//! Configuration presets for common scenarios

use super::{Config, Format};

/// Variable holding the filter directive; falls back to `RUST_LOG`.
pub const LEVEL_VAR: &str = "FIELDGUARD_LOG";
/// Variable selecting `pretty`, `compact` or `json`.
pub const FORMAT_VAR: &str = "FIELDGUARD_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables.
    ///
    /// Reads `FIELDGUARD_LOG` (then `RUST_LOG`) for the level and
    /// `FIELDGUARD_LOG_FORMAT` for the format. Unknown formats keep the
    /// default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_VAR).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup(FORMAT_VAR).and_then(|f| f.parse().ok()) {
            config.format = format;
            if format == Format::Json {
                config.ansi = false;
            }
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            ansi: false,
            ..Self::default()
        }
    }

    /// Test configuration (trace level, captured output)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            ansi: false,
            test_writer: true,
            ..Self::default()
        }
    }
}
