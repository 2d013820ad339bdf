use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, FormField};

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_form();
            app.status = None;
            return;
        }
        KeyCode::Enter => {
            app.submit_form();
            return;
        }
        _ => {}
    }

    let Some(form) = app.form.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left | KeyCode::Right if !form.focused().is_text() => {
            let forward = key.code == KeyCode::Right;
            match form.focused() {
                FormField::Category => {
                    form.category = if forward { form.category.next() } else { form.category.prev() };
                }
                FormField::Quadrant => {
                    form.quadrant = if forward { form.quadrant.next() } else { form.quadrant.prev() };
                }
                _ => {}
            }
        }
        KeyCode::Backspace => {
            if let Some(buf) = form.focused_buffer() {
                buf.pop();
            }
        }
        KeyCode::Char(c) => {
            let field = form.focused();
            if let Some(buf) = form.focused_buffer()
                && accepts(field, c)
            {
                buf.push(c);
            }
        }
        _ => {}
    }
}

/// Character filter per field: times take digits and ':', durations digits only
fn accepts(field: FormField, c: char) -> bool {
    match field {
        FormField::Time => c.is_ascii_digit() || c == ':',
        FormField::Duration => c.is_ascii_digit(),
        _ => !c.is_control(),
    }
}
