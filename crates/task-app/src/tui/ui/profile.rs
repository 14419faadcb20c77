/*
[INPUT]:  Session email from AppState and theme palette
[OUTPUT]: Profile tab with the logout hint
[POS]:    TUI UI profile panel
[UPDATE]: When adding account details or session actions
*/

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::layout::card_block;
use crate::state::AppState;
use crate::theme::Palette;

pub(super) fn draw_profile(frame: &mut Frame, area: Rect, app: &AppState, palette: &Palette) {
    let email = app
        .session()
        .map(|session| session.email.clone())
        .unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled("Username", palette.subtext())),
        Line::from(Span::styled(email, palette.title())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[o]", palette.button()),
            Span::styled(" Logout", palette.danger()),
        ]),
    ];
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(card_block("Profile 👤", false, palette));
    frame.render_widget(widget, area);
}
