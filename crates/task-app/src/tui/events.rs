/*
[INPUT]:  Crossterm key events
[OUTPUT]: AppState intents and the effects they request
[POS]:    TUI key routing
[UPDATE]: 2026-10-12 Route keys by screen, focus and active notice
*/

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_input::InputRequest;

use crate::state::{AppState, Effect, Focus, Screen, Tab};

pub(super) enum KeyOutcome {
    Continue(Option<Effect>),
    Quit,
}

use KeyOutcome::{Continue, Quit};

pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return Continue(None);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Quit;
    }
    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return Continue(None);
    }

    match app.screen() {
        Screen::Login => handle_login_key(app, key),
        Screen::Tasks => handle_tasks_key(app, key),
    }
}

fn handle_login_key(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Esc => Quit,
        KeyCode::Enter => Continue(app.submit_login()),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.focus_next();
            Continue(None)
        }
        _ => {
            if let Some(request) = input_request(key) {
                app.edit_focused(request);
            }
            Continue(None)
        }
    }
}

fn handle_tasks_key(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    if app.tab == Tab::Tasks && app.focus == Focus::NewTask {
        return match key.code {
            KeyCode::Enter => Continue(app.add_task()),
            KeyCode::Esc | KeyCode::Tab => {
                app.focus = Focus::List;
                Continue(None)
            }
            _ => {
                if let Some(request) = input_request(key) {
                    app.edit_focused(request);
                }
                Continue(None)
            }
        };
    }

    match key.code {
        KeyCode::Char('q') => Quit,
        KeyCode::Char('1') => {
            app.set_tab(Tab::Tasks);
            Continue(None)
        }
        KeyCode::Char('2') => {
            app.set_tab(Tab::Profile);
            Continue(None)
        }
        KeyCode::Char('3') => {
            app.set_tab(Tab::Logs);
            Continue(None)
        }
        KeyCode::Char('l') => {
            let next = app.tab.next();
            app.set_tab(next);
            Continue(None)
        }
        KeyCode::Char('r') | KeyCode::F(5) => Continue(app.refresh()),
        KeyCode::Char('o') => Continue(app.logout()),
        _ if app.tab != Tab::Tasks => Continue(None),
        KeyCode::Tab | KeyCode::Char('a') => {
            app.focus = Focus::NewTask;
            Continue(None)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection(-1);
            Continue(None)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection(1);
            Continue(None)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Continue(app.toggle_selected()),
        KeyCode::Char('d') | KeyCode::Delete => Continue(app.delete_selected()),
        _ => Continue(None),
    }
}

fn input_request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char(ch) if !ctrl => Some(InputRequest::InsertChar(ch)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}
