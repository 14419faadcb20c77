/*
[INPUT]:  AppState login fields and focus
[OUTPUT]: Centered login card with email/password inputs
[POS]:    TUI UI login screen
[UPDATE]: 2026-10-12 Add login screen
*/

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_input::Input;

use super::layout::{card_block, centered_rect, spinner_frame};
use crate::state::{AppState, Focus};
use crate::theme::Palette;

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 15;

pub(super) fn draw_login(
    frame: &mut Frame,
    area: Rect,
    app: &AppState,
    palette: &Palette,
    spinner: usize,
) {
    let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
    frame.render_widget(card_block("Sign in", true, palette), card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(card);

    frame.render_widget(
        Paragraph::new(Span::styled("Welcome Back 👋", palette.title())).alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled("Please log in to continue", palette.subtext()))
            .alignment(Alignment::Center),
        rows[1],
    );

    draw_field(frame, rows[3], "Email", &app.email, false, app.focus == Focus::Email, palette);
    draw_field(
        frame,
        rows[4],
        "Password",
        &app.password,
        true,
        app.focus == Focus::Password,
        palette,
    );

    let button = if app.login_pending() {
        Line::from(vec![
            Span::styled(format!(" {} ", spinner_frame(spinner)), palette.button()),
            Span::styled("Signing in...", palette.subtext()),
        ])
    } else {
        Line::from(Span::styled("  Login [Enter]  ", palette.button()))
    };
    frame.render_widget(Paragraph::new(button).alignment(Alignment::Center), rows[5]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Tab]", palette.button()),
            Span::styled(" Switch field  ", palette.subtext()),
            Span::styled("[Esc]", palette.button()),
            Span::styled(" Quit", palette.subtext()),
        ]))
        .alignment(Alignment::Center),
        rows[6],
    );
}

fn draw_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &Input,
    masked: bool,
    focused: bool,
    palette: &Palette,
) {
    let inner_width = area.width.saturating_sub(3) as usize;
    let (text, cursor) = if masked {
        let len = input.value().chars().count();
        ("•".repeat(len), input.cursor())
    } else {
        (input.value().to_string(), input.visual_cursor())
    };
    let scroll = cursor.saturating_sub(inner_width);

    let widget = Paragraph::new(text)
        .style(palette.card())
        .scroll((0, scroll as u16))
        .block(card_block(title, focused, palette));
    frame.render_widget(widget, area);

    if focused {
        let x = area.x + 1 + (cursor - scroll) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}
