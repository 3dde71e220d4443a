//! Layered settings: defaults, then the TOML file, then `TAGVAL_*`
//! environment variables, then flags.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tagval_validator::ValidationConfig;

use crate::cli::{Cli, OutputFormat};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(flatten)]
    pub validation: ValidationConfig,
    pub output: OutputFormat,
    pub log: tagval_log::Config,
}

impl Settings {
    /// Defaults, file and environment, without flags.
    pub fn figment(file: Option<&Path>) -> Figment {
        let defaults = Settings {
            log: tagval_log::Config::from_env(),
            ..Settings::default()
        };

        let mut figment = Figment::from(Serialized::defaults(defaults));
        if let Some(file) = file {
            figment = figment.merge(Toml::file_exact(file));
        }

        figment
            .merge(
                Env::prefixed("TAGVAL_")
                    .ignore(&["config", "log", "log_format"])
                    .split("__"),
            )
            .merge(Env::raw().only(&["TAGVAL_LOG"]).map(|_| "log.level".into()))
            .merge(Env::raw().only(&["TAGVAL_LOG_FORMAT"]).map(|_| "log.format".into()))
    }

    /// Resolves the final settings for `cli`.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut settings: Settings = Self::figment(cli.config.as_deref()).extract()?;
        settings.apply_flags(cli);
        Ok(settings)
    }

    fn apply_flags(&mut self, cli: &Cli) {
        if let Some(mode) = cli.rule_mode {
            self.validation.rule_mode = mode;
        }
        if cli.strict {
            self.validation.strict = true;
        }
        if let Some(output) = cli.output {
            self.output = output;
        }
        if let Some(level) = &cli.log_level {
            self.log.level.clone_from(level);
        }
        if let Some(format) = cli.log_format {
            self.log.format = format;
        }
    }
}
