/*
[INPUT]:  Process arguments
[OUTPUT]: Parsed command line and config overrides
[POS]:    CLI layer - argument definitions
[UPDATE]: When adding flags or subcommands
*/

pub mod init;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};
use crate::theme::ThemeMode;

#[derive(Parser, Debug)]
#[command(name = "task-app", version, about = "Terminal client for the task API")]
pub struct Cli {
    /// YAML config file; must exist when given
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    /// Overrides api.base_url
    #[arg(long = "api-base", value_name = "URL")]
    pub api_base: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
    /// Overrides ui.theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeMode>,
    /// Validate configuration and exit
    #[arg(long = "dry-run")]
    pub dry_run: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a config file interactively
    Init {
        #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Flags take precedence over file and environment
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.api_base {
            config.api.base_url = base_url.clone();
        }
        if let Some(theme) = self.theme {
            config.ui.theme = theme;
        }
    }
}
