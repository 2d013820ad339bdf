use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::stats::completion_rate;
use crate::tui::app::{App, Screen};

use super::helpers::spans_width;

/// Render the two-row header: title with right-aligned summary, then subtitle
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let (title, subtitle, right) = match app.screen {
        Screen::Planner => {
            let rate = completion_rate(app.board.schedule());
            let right = vec![
                Span::styled(
                    format!(" {}% Complete ", rate),
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(app.theme.selection_bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {} ", app.board.date().format("%Y-%m-%d")),
                    Style::default().fg(app.theme.text).bg(bg),
                ),
            ];
            (
                "Day Planning Dashboard",
                "Plan, prioritize, and achieve your daily goals",
                right,
            )
        }
        Screen::Infra => {
            let mut right = vec![
                Span::styled("Last updated ", Style::default().fg(app.theme.dim).bg(bg)),
                Span::styled(
                    format!("{} ", app.infra.last_updated().format("%H:%M:%S")),
                    Style::default().fg(app.theme.text).bg(bg),
                ),
            ];
            if app.infra.is_refreshing() {
                right.push(Span::styled(
                    " \u{27F3} Refreshing\u{2026} ",
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            } else {
                right.push(Span::styled(
                    " \u{27F3} Refresh ",
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(app.theme.selection_bg),
                ));
            }
            (
                "Auto Infrastructure Dashboard",
                "Real-time monitoring & CI/CD insights",
                right,
            )
        }
    };

    let mut top: Vec<Span> = vec![Span::styled(format!(" {}", title), title_style)];
    let used = spans_width(&top) + spans_width(&right);
    let width = area.width as usize;
    if used < width {
        top.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        top.extend(right);
    }

    let lines = vec![
        Line::from(top),
        Line::from(Span::styled(
            format!(" {}", subtitle),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
