//! Logger errors.

/// Errors raised while setting up the logger.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("logger initialization failed: {0}")]
    Init(String),

    /// Unknown output format name.
    #[error("unknown log format `{0}`; expected pretty, compact or json")]
    Format(String),
}

/// Result type for logger operations.
pub type LogResult<T> = Result<T, LogError>;
