/*
[INPUT]:  AppState, palette, log buffer, spinner frame
[OUTPUT]: Full-frame render for the current screen and tab
[POS]:    TUI UI module root
[UPDATE]: 2026-10-12 Split into login, task list, profile, logs and notice views
*/

mod layout;
mod login;
mod logs;
mod notice;
mod profile;
mod tasks;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Block;

use crate::logging::LogBufferHandle;
use crate::state::{AppState, Screen, Tab};
use crate::theme::Palette;

pub(in crate::tui) fn draw(
    frame: &mut Frame,
    app: &AppState,
    palette: &Palette,
    logs: &LogBufferHandle,
    spinner: usize,
) {
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    match app.screen() {
        Screen::Login => login::draw_login(frame, area, app, palette, spinner),
        Screen::Tasks => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(6),
                    Constraint::Length(4),
                ])
                .split(area);

            layout::draw_header(frame, rows[0], app, palette);
            layout::draw_tabs(frame, rows[1], app.tab, palette);
            match app.tab {
                Tab::Tasks => tasks::draw_tasks(frame, rows[2], app, palette, spinner),
                Tab::Profile => profile::draw_profile(frame, rows[2], app, palette),
                Tab::Logs => logs::draw_logs(frame, rows[2], logs, palette),
            }
            layout::draw_footer(frame, rows[3], app, palette);
        }
    }

    if let Some(notice) = app.notice() {
        notice::draw_notice(frame, area, notice, palette);
    }
}
