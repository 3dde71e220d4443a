//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tagval_validator::RuleMode;

/// Validate a sample record against its field rules.
#[derive(Parser, Debug)]
#[command(name = "tagval", version, about)]
pub struct Cli {
    /// TOML settings file.
    #[arg(long, global = true, env = "TAGVAL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where string validators take their bounds from.
    #[arg(long = "rules", global = true, value_name = "MODE")]
    pub rule_mode: Option<RuleMode>,

    /// Fail when a field with a rule was not checked.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log filter, e.g. `debug` or `tagval_validator=trace`.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log format: pretty, compact or json.
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<tagval_log::Format>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the record's fields, types and rules.
    Describe,
    /// Print the sample record as JSON.
    Encode(SampleArgs),
    /// Validate the sample record; exits non-zero on failure.
    Check(SampleArgs),
}

/// Sample record values.
#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    /// User id.
    #[arg(long, default_value_t = 123)]
    pub id: i64,
    /// User name.
    #[arg(long, default_value = "Testowe")]
    pub name: String,
    /// Email address.
    #[arg(long, default_value = "test@example.com")]
    pub email: String,
    /// Age in years.
    #[arg(long, default_value_t = 0)]
    pub age: i32,
    /// Password; never encoded.
    #[arg(long, default_value = "123456123456123456123456")]
    pub password: String,
}

/// How command results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
