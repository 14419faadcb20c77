/*
[INPUT]:  App (state plus effect dispatcher), palette, log buffer
[OUTPUT]: Ratatui-based TUI for login, task list, profile and logs
[POS]:    TUI module for the task-app binary
[UPDATE]: When changing TUI layout, keybindings, or the run loop
*/

mod events;
mod terminal;
mod ui;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::logging::LogBufferHandle;
use crate::runtime::App;
use crate::theme::Palette;

use events::{KeyOutcome, handle_key_event};
use terminal::TerminalGuard;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(120);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Drive the interactive client until the user quits
pub async fn run_tui(mut app: App, palette: Palette, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if !crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                continue;
            }
            if let Ok(event) = crossterm::event::read() {
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        }
    });

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut spinner: usize = 0;
    let mut should_quit = false;
    info!("tui started");

    while !should_quit {
        terminal.draw(|frame| ui::draw(frame, app.state(), &palette, &log_buffer, spinner))?;

        tokio::select! {
            _ = tick.tick() => {
                if app.in_flight() > 0 {
                    spinner = spinner.wrapping_add(1);
                }
            }
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(CrosstermEvent::Key(key)) => match handle_key_event(app.state_mut(), key) {
                        KeyOutcome::Quit => should_quit = true,
                        KeyOutcome::Continue(effect) => app.perform(effect),
                    },
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
            maybe_completion = app.next_completion() => {
                if let Some(completion) = maybe_completion {
                    app.handle_completion(completion);
                }
            }
        }
    }

    input_shutdown.cancel();
    debug!(in_flight = app.in_flight(), "tui stopped");
    Ok(())
}
