/*
[INPUT]:  LogBufferHandle snapshots for UI
[OUTPUT]: Log panel rendered into Ratatui frame
[POS]:    TUI UI logs panel rendering
[UPDATE]: 2026-10-12 Read only the visible tail of the buffer
*/

use std::sync::PoisonError;

use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::layout::card_block;
use crate::logging::LogBufferHandle;
use crate::theme::Palette;

pub(super) fn draw_logs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    buffer: &LogBufferHandle,
    palette: &Palette,
) {
    let available = area.height.saturating_sub(2) as usize;
    let lines = buffer
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .tail(available);

    let text = lines
        .into_iter()
        .map(|line| Line::from(Span::raw(line)))
        .collect::<Vec<_>>();
    let log_widget = Paragraph::new(text).block(card_block("Logs", false, palette));
    frame.render_widget(log_widget, area);
}
