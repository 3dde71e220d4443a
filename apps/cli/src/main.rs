//! # tagval CLI Entry Point
//!
//! Loads settings, installs the logger and dispatches to a handler.

mod cli;
mod commands;
mod settings;
mod user;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::settings::Settings;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli).context("failed to load settings")?;

    let _log = tagval_log::init_with(settings.log.clone()).context("failed to initialize logging")?;
    tracing::debug!(?settings, "settings loaded");

    match cli.command {
        Command::Describe => commands::describe(&settings),
        Command::Encode(sample) => commands::encode(sample),
        Command::Check(sample) => commands::check(&settings, sample),
    }
}
