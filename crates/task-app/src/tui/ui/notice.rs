/*
[INPUT]:  Active notice and theme palette
[OUTPUT]: Blocking error dialog drawn over the current screen
[POS]:    TUI UI notice overlay
[UPDATE]: When changing how errors are acknowledged
*/

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::layout::centered_rect;
use crate::state::Notice;
use crate::theme::Palette;

/// Modal error dialog; everything behind it is inert until dismissed
pub(super) fn draw_notice(frame: &mut Frame, area: Rect, notice: &Notice, palette: &Palette) {
    let popup = centered_rect(44, 7, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.danger())
        .style(palette.card())
        .title(Span::styled("Error", palette.danger()));
    let body = vec![
        Line::from(""),
        Line::from(Span::styled(notice.message.clone(), palette.title())),
        Line::from(""),
        Line::from(Span::styled(" OK [Enter] ", palette.button())),
    ];
    let widget = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, popup);
}
