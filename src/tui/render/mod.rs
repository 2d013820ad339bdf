pub mod form_popup;
pub mod goals_view;
pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod infra_view;
pub mod priority_view;
pub mod schedule_view;
pub mod status_row;
pub mod tab_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::model::PlannerTab;

use super::app::{App, Screen};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + subtitle
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    tab_bar::render_tab_bar(frame, app, chunks[1]);

    match app.screen {
        Screen::Planner => match app.board.active_tab() {
            PlannerTab::Schedule => schedule_view::render_schedule_view(frame, app, chunks[2]),
            PlannerTab::Priority => priority_view::render_priority_view(frame, app, chunks[2]),
            PlannerTab::Goals => goals_view::render_goals_view(frame, app, chunks[2]),
        },
        Screen::Infra => infra_view::render_infra_view(frame, app, chunks[2]),
    }

    if app.form.is_some() {
        form_popup::render_form_popup(frame, app, chunks[2]);
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[3]);
}
