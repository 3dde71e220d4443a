//! # tagval-log
//!
//! Subscriber setup shared by tagval binaries. Libraries in the workspace only
//! emit `tracing` events; this crate decides where they go.
//!
//! ```rust,no_run
//! use tagval_log::{Config, Format};
//!
//! let _guard = tagval_log::init_with(Config::from_env().with_format(Format::Json))?;
//! tracing::info!("ready");
//! # Ok::<(), tagval_log::LogError>(())
//! ```

#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Installs a logger configured from the environment.
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Installs a logger with the given configuration.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
