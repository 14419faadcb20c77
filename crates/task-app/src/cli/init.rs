/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When AppConfig schema changes
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::config::AppConfig;
use crate::theme::ThemeMode;

const THEMES: [(&str, ThemeMode); 3] = [
    ("auto", ThemeMode::Auto),
    ("light", ThemeMode::Light),
    ("dark", ThemeMode::Dark),
];

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Welcome to task-app init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a client configuration.").dim()
    );

    let theme = ColorfulTheme::default();
    let defaults = AppConfig::default();

    if output.exists()
        && !Confirm::with_theme(&theme)
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?
    {
        println!("{}", style("Aborted.").yellow());
        return Ok(());
    }

    println!("\n{}", style("--- API ---").bold());
    let base_url: String = Input::with_theme(&theme)
        .with_prompt("API base URL")
        .default(defaults.api.base_url.clone())
        .interact_text()?;

    println!("\n{}", style("--- Session ---").bold());
    let default_email: String = Input::with_theme(&theme)
        .with_prompt("Default email (optional)")
        .allow_empty(true)
        .interact_text()?;
    let restore_on_start = Confirm::with_theme(&theme)
        .with_prompt("Skip the login screen when a session is saved?")
        .default(false)
        .interact()?;

    println!("\n{}", style("--- Appearance ---").bold());
    let names: Vec<&str> = THEMES.iter().map(|(name, _)| *name).collect();
    let selection = Select::with_theme(&theme)
        .with_prompt("Theme")
        .items(&names)
        .default(0)
        .interact()?;

    let mut config = defaults;
    config.api.base_url = base_url.trim().to_string();
    config.session.restore_on_start = restore_on_start;
    config.ui.theme = THEMES[selection].1;
    let default_email = default_email.trim();
    if !default_email.is_empty() {
        config.ui.default_email = Some(default_email.to_string());
    }

    config.build_client()?;
    write_config(&config, &output)?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!("Configuration written to: {}", style(output.display()).cyan());
    Ok(())
}

/// Serialize `config` as YAML to `output`
pub fn write_config(config: &AppConfig, output: &Path) -> Result<()> {
    config.validate()?;
    let yaml = serde_yaml::to_string(config).context("failed to serialize config to YAML")?;
    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;
    Ok(())
}
