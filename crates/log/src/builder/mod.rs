//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger's root span entered.
///
/// Drop it when the host shuts down.
#[derive(Debug)]
pub struct LoggerGuard {
    /// RAII guard for the root span; never read directly.
    #[allow(dead_code)]
    root_span: Option<tracing::span::EnteredSpan>,
}

/// Builds the format layer with the shared display options and installs it
/// on top of the filter. Avoids repeating the chain for every format.
macro_rules! try_init_layer {
    ($filter:expr, $layer:expr, $config:expr) => {{
        let layer = $layer
            .with_ansi($config.ansi)
            .with_target($config.target);
        if $config.test_writer {
            Registry::default()
                .with($filter)
                .with(layer.with_test_writer())
                .try_init()
        } else {
            Registry::default().with($filter).with(layer).try_init()
        }
    }};
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The level string cannot be parsed as a filter
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            directive: self.config.level.clone(),
            reason: e.to_string(),
        })?;

        let installed = match self.config.format {
            Format::Pretty => try_init_layer!(filter, fmt::layer().pretty(), self.config),
            Format::Compact => try_init_layer!(filter, fmt::layer().compact(), self.config),
            Format::Json => try_init_layer!(filter, fmt::layer().json(), self.config),
        };
        installed.map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard { root_span })
    }
}
