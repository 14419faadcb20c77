/*
[INPUT]:  CLI arguments, YAML configuration file, TASK_APP_* environment
[OUTPUT]: Running terminal client, validated config, or a generated config file
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use task_app::cli::init::run_init;
use task_app::cli::{Cli, Command};
use task_app::logging::{LOG_BUFFER_CAPACITY, LogBuffer, LogSink, init_tracing};
use task_app::theme::Palette;
use task_app::tui::run_tui;
use task_app::{App, AppConfig, AppState};
use task_app_adapter::FileSessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Init { output }) = &cli.command {
        init_tracing(&cli.log_level, LogSink::Stderr, None)?;
        return run_init(output.clone());
    }

    let mut config = AppConfig::load(cli.config_path.as_deref()).context("load config")?;
    cli.apply_overrides(&mut config);
    config.validate().context("validate config")?;
    let client = config.build_client()?;
    let session_dir = config.session_dir()?;

    if cli.dry_run {
        init_tracing(&cli.log_level, LogSink::Stderr, None)?;
        info!(
            base_url = %client.base_url(),
            session_dir = %session_dir.display(),
            theme = ?config.ui.theme,
            restore_on_start = config.session.restore_on_start,
            "dry-run requested; configuration validated"
        );
        return Ok(());
    }

    let log_buffer = LogBuffer::handle(LOG_BUFFER_CAPACITY);
    let _log_guard = init_tracing(
        &cli.log_level,
        LogSink::Buffer(log_buffer.clone()),
        config.log.dir.as_deref(),
    )?;
    info!(base_url = %client.base_url(), "starting task-app");

    let store = FileSessionStore::new(&session_dir);
    let state = AppState::new(config.ui.default_email.clone());
    let mut app = App::new(state, Arc::new(client), Arc::new(store));
    if config.session.restore_on_start && app.restore_session() {
        info!("restored saved session");
    }

    let palette = Palette::for_mode(config.ui.theme);
    run_tui(app, palette, log_buffer).await
}
