//! # fieldguard-log
//!
//! Subscriber setup for hosts embedding fieldguard and for its tests.
//! The library crates only emit `tracing` events; nothing is printed until a
//! host installs a subscriber.
//!
//! ```rust,no_run
//! use fieldguard_log::{Config, LoggerBuilder};
//!
//! let _guard = LoggerBuilder::from_config(Config::from_env()).build()?;
//! tracing::info!("ready");
//! # Ok::<(), fieldguard_log::LogError>(())
//! ```

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, Format};
pub use error::{LogError, LogResult};

/// Initializes logging from the environment.
///
/// See [`Config::from_env`] for the variables read.
pub fn init() -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(Config::from_env()).build()
}

/// Installs the test subscriber once per process.
///
/// Output goes through the test writer so `cargo test` captures it. Later
/// calls are no-ops.
pub fn init_test() {
    let _ = LoggerBuilder::from_config(Config::test()).build();
}
