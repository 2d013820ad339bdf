use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::PlannerTab;
use crate::tui::app::{App, Mode, Screen};

use super::helpers::{display_width, truncate};

/// Short key reminder for the current context
fn key_hints(app: &App) -> &'static str {
    match (app.mode, app.screen) {
        (Mode::Form, _) => "",
        (Mode::Navigate, Screen::Infra) => "1-5 panel  r refresh  ? help  q quit",
        (Mode::Navigate, Screen::Planner) => match app.board.active_tab() {
            PlannerTab::Schedule | PlannerTab::Priority => {
                "a add  x toggle  d delete  ? help  q quit"
            }
            PlannerTab::Goals => "a add  b/n/p/c move  d delete  ? help  q quit",
        },
    }
}

/// Render the status row (bottom of screen): last message left, key hints right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let mut spans: Vec<Span> = Vec::new();

    if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(Color::Rgb(0x8D, 0x0B, 0x0B))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.green).bg(bg)
        };
        spans.push(Span::styled(
            format!(" {} ", truncate(&status.text, width.saturating_sub(2))),
            style,
        ));
    }

    let hint = if app.show_key_hints { key_hints(app) } else { "" };
    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint) + 1;
    if !hint.is_empty() && content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let line = Line::from(spans);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::board::BoardError;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_status_row(frame, app, area))
    }

    #[test]
    fn hints_are_right_aligned() {
        let app = sample_app();
        let output = render(&app);
        assert!(output.ends_with("a add  x toggle  d delete  ? help  q quit"));
        assert!(output.starts_with(' '));
    }

    #[test]
    fn errors_show_on_the_left() {
        let mut app = sample_app();
        app.set_error(&BoardError::EmptyText);
        let output = render(&app);
        assert!(output.starts_with(" text is required"));
        assert!(output.contains("q quit"));
    }

    #[test]
    fn hints_can_be_disabled() {
        let mut app = infra_app();
        app.show_key_hints = false;
        assert_eq!(render(&app), "");
        app.set_info("Refreshed");
        assert_eq!(render(&app), " Refreshed");
    }
}
