use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::InfraTab;
use crate::tui::app::App;

pub(super) fn handle_infra(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            app.infra.set_tab(InfraTab::ALL[idx]);
        }
        KeyCode::Tab => app.infra.set_tab(app.infra.active_tab().next()),
        KeyCode::BackTab => app.infra.set_tab(app.infra.active_tab().prev()),
        KeyCode::Char('r') => {
            if app.infra.refresh(Instant::now()) {
                app.set_info("Refreshing...");
            }
        }
        _ => {}
    }
}
