//! Validation configuration.
//!
//! [`ValidationConfig`] is plain serde data so callers can layer it from
//! files, environment, or flags. [`RecordValidator::from_config`] turns it
//! into a ready dispatcher.
//!
//! [`RecordValidator::from_config`]: crate::dispatch::RecordValidator::from_config

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where string validators take their bounds from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleMode {
    /// One shared validator per type, configured in code. Rule text only
    /// decides whether a field is validated at all.
    #[default]
    Fixed,
    /// Each field's rule text is parsed and a validator is built from it.
    Parsed,
}

impl RuleMode {
    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleMode::Fixed => "fixed",
            RuleMode::Parsed => "parsed",
        }
    }
}

impl fmt::Display for RuleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a rule mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule mode `{0}` (expected `fixed` or `parsed`)")]
pub struct ParseRuleModeError(String);

impl FromStr for RuleMode {
    type Err = ParseRuleModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(RuleMode::Fixed),
            "parsed" => Ok(RuleMode::Parsed),
            other => Err(ParseRuleModeError(other.to_string())),
        }
    }
}

/// Dispatcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Where validators take their configuration from.
    pub rule_mode: RuleMode,
    /// Treat rule-carrying fields that were never checked as a failure.
    pub strict: bool,
}
