mod form;
mod infra;
mod planner;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode, Screen};

use form::handle_form;
use infra::handle_infra;
use planner::handle_planner;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts everything until dismissed
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.mode {
        Mode::Form => handle_form(app, key),
        Mode::Navigate => {
            if handle_global(app, key) {
                return;
            }
            match app.screen {
                Screen::Planner => handle_planner(app, key),
                Screen::Infra => handle_infra(app, key),
            }
        }
    }
}

/// Keys that behave the same on every screen. Returns true if handled.
fn handle_global(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.status = None,
        _ => return false,
    }
    true
}

#[cfg(test)]
pub(crate) fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}
