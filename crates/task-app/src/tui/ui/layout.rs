/*
[INPUT]:  Frame regions, AppState, palette
[OUTPUT]: Header, tab bar, hotkey footer and shared layout helpers
[POS]:    TUI UI layout module
[UPDATE]: 2026-10-12 Theme tab bar and footer from the palette
*/

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use unicode_width::UnicodeWidthChar;

use crate::state::{AppState, Focus, Tab};
use crate::theme::Palette;

pub(super) const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub(super) fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

pub(super) fn card_block<'a>(title: &'a str, focused: bool, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(focused))
        .style(palette.card())
        .title(Span::styled(title, palette.title()))
}

/// Rect of `width` x `height` centered in `area`, clipped to it
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cut `text` to at most `max` display columns, marking the cut with '…'
pub(super) fn truncate_to_width(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|ch| ch.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width + 1 > max {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

pub(super) fn draw_header(frame: &mut ratatui::Frame, area: Rect, app: &AppState, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(40)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled("My Tasks ✅", palette.title())))
        .block(card_block("task-app", false, palette));
    frame.render_widget(title, columns[0]);

    let email = app
        .session()
        .map(|session| session.email.as_str())
        .unwrap_or("-");
    let info = Paragraph::new(Line::from(Span::styled(email.to_string(), palette.title())))
        .alignment(Alignment::Right)
        .block(card_block("Session", false, palette));
    frame.render_widget(info, columns[1]);
}

pub(super) fn draw_tabs(frame: &mut ratatui::Frame, area: Rect, current_tab: Tab, palette: &Palette) {
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(idx, tab)| Line::from(format!("{} {}", idx + 1, tab.title())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .block(card_block("Tabs", false, palette))
        .style(palette.subtext())
        .highlight_style(palette.highlight())
        .select(current_tab.index());

    frame.render_widget(tabs, area);
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState, palette: &Palette) {
    let key_style = palette.button();
    let synced = app
        .last_synced()
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());
    let hints: &[(&str, &str)] = match (app.tab, app.focus) {
        (Tab::Tasks, Focus::NewTask) => &[("[Enter]", "Add"), ("[Esc]", "List")],
        (Tab::Tasks, _) => &[
            ("[j/k]", "Select"),
            ("[Space]", "Toggle"),
            ("[d]", "Delete"),
            ("[a]", "New"),
            ("[r]", "Refresh"),
        ],
        _ => &[("[l]", "Next tab")],
    };

    let mut line1 = Vec::new();
    for (key, label) in hints {
        line1.push(Span::styled(*key, key_style));
        line1.push(Span::raw(format!(" {label}  ")));
    }
    let line2 = Line::from(vec![
        Span::styled("[1/2/3]", key_style),
        Span::raw(" Tabs  "),
        Span::styled("[o]", key_style),
        Span::raw(" Logout  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit  "),
        Span::styled(format!("Status: {}", app.status_message), palette.subtext()),
        Span::styled(format!("  Synced: {synced}"), palette.subtext()),
    ]);

    let text = Text::from(vec![Line::from(line1), line2]);
    let widget = Paragraph::new(text)
        .block(card_block("Hotkeys", false, palette))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
