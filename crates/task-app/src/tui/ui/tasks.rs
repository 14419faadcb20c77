/*
[INPUT]:  AppState task list, selection, busy set, new-task input
[OUTPUT]: New-task input row and the task list
[POS]:    TUI UI task list view
[UPDATE]: 2026-10-12 Add task list view with busy markers
*/

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::layout::{card_block, spinner_frame, truncate_to_width};
use crate::state::{AppState, Focus};
use crate::theme::Palette;

pub(super) fn draw_tasks(
    frame: &mut Frame,
    area: Rect,
    app: &AppState,
    palette: &Palette,
    spinner: usize,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    draw_new_task(frame, rows[0], app, palette);
    draw_task_list(frame, rows[1], app, palette, spinner);
}

fn draw_new_task(frame: &mut Frame, area: Rect, app: &AppState, palette: &Palette) {
    let focused = app.focus == Focus::NewTask;
    let input = &app.new_task;
    let inner_width = area.width.saturating_sub(3) as usize;
    let scroll = input.visual_scroll(inner_width);

    let content = if input.value().is_empty() && !focused {
        Line::from(Span::styled("Add a new task... [a]", palette.subtext()))
    } else {
        Line::from(input.value().to_string())
    };
    let widget = Paragraph::new(content)
        .scroll((0, scroll as u16))
        .block(card_block("New task", focused, palette));
    frame.render_widget(widget, area);

    if focused {
        let x = area.x + 1 + (input.visual_cursor().max(scroll) - scroll) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_task_list(frame: &mut Frame, area: Rect, app: &AppState, palette: &Palette, spinner: usize) {
    let tasks = app.tasks();
    let title = format!("Tasks ({}/{} done)", tasks.done_count(), tasks.len());
    let block = card_block(&title, app.focus == Focus::List, palette);

    // The list is replaced by the indicator while a load/create is pending
    if app.loading() {
        let widget = Paragraph::new(Line::from(vec![
            Span::styled(spinner_frame(spinner), palette.button()),
            Span::styled(" Loading...", palette.subtext()),
        ]))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(widget, area);
        return;
    }

    if tasks.is_empty() {
        let widget = Paragraph::new(Span::styled(
            "No tasks yet. Press [a] to add one.",
            palette.subtext(),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let title_width = area.width.saturating_sub(12) as usize;
    let items = tasks
        .iter()
        .map(|task| {
            let done = task.status.is_done();
            let marker = if done { "✅ " } else { "⬜ " };
            let title_style = if done {
                palette.subtext().add_modifier(Modifier::CROSSED_OUT)
            } else {
                palette.card()
            };
            let mut spans = vec![
                Span::raw(marker),
                Span::styled(truncate_to_width(&task.title, title_width), title_style),
            ];
            if app.is_busy(task.id) {
                spans.push(Span::styled(format!(" {}", spinner_frame(spinner)), palette.subtext()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(block)
        .highlight_style(palette.highlight())
        .highlight_symbol("› ");
    let mut state = ListState::default();
    if app.focus == Focus::List {
        state.select(Some(app.selected_index()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
