//! Logger builder implementation

#[macro_use]
mod format;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard returned by [`LoggerBuilder::build`].
///
/// Reports the configuration the logger was installed with. The subscriber
/// is global and stays installed after the guard is dropped.
#[derive(Debug)]
#[must_use = "the guard is the only record of the installed logger configuration"]
pub struct LoggerGuard {
    config: Config,
}

impl LoggerGuard {
    /// Configuration the logger was installed with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl LoggerBuilder {
    /// Create builder from config
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber. Output goes to stderr.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {}", &self.config.level, e)))?;

        let display = &self.config.display;
        let fmt_layer = match self.config.format {
            Format::Pretty => fmt_layer!(tracing_subscriber::fmt::layer().pretty(), display),
            Format::Compact => fmt_layer!(tracing_subscriber::fmt::layer().compact(), display),
            Format::Json => fmt_layer!(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(display.flatten),
                display
            ),
        };

        Registry::default()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        tracing::debug!(level = %self.config.level, format = %self.config.format, "logger initialized");
        Ok(LoggerGuard {
            config: self.config,
        })
    }
}
