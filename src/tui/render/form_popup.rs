use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::{centered_rect, truncate};

const LABEL_WIDTH: usize = 10;

/// Render the open add form as a centered popup over `area`
pub fn render_form_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.form.as_ref() else {
        return;
    };
    let fields = form.kind.fields();
    // Border + one row per field + spacer + hint
    let height = fields.len() as u16 + 4;
    let popup = centered_rect(52, height, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let value_width = (popup.width as usize).saturating_sub(LABEL_WIDTH + 6);
    let mut lines: Vec<Line> = Vec::new();

    for (i, field) in fields.iter().enumerate() {
        let focused = i == form.focus;
        let label_style = if focused {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        let value_style = if focused {
            Style::default().fg(app.theme.text_bright).bg(app.theme.selection_bg)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };

        let mut spans = vec![Span::styled(
            format!(" {:<width$}", field.label(), width = LABEL_WIDTH),
            label_style,
        )];
        let value = form.value(*field);
        if field.is_text() {
            // Keep the end of long input visible, it is where typing happens
            let shown = if value.chars().count() > value_width {
                let skip = value.chars().count() - value_width;
                value.chars().skip(skip).collect()
            } else {
                value
            };
            spans.push(Span::styled(shown, value_style));
            if focused {
                spans.push(Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ));
            }
        } else {
            spans.push(Span::styled(
                format!("\u{2039} {} \u{203A}", truncate(&value, value_width.saturating_sub(4))),
                value_style,
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter save  Esc cancel  Tab next  \u{2190}\u{2192} choose",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", form.kind.title()),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlannerTab;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, 12, |frame, area| render_form_popup(frame, app, area))
    }

    #[test]
    fn schedule_form_lists_its_fields() {
        let mut app = sample_app();
        app.open_form();
        if let Some(form) = app.form.as_mut() {
            form.time = "08:30".into();
        }
        let output = render(&app);
        assert!(output.contains("Add schedule item"));
        assert!(output.contains("Time"));
        assert!(output.contains("08:30\u{258C}"));
        assert!(output.contains("Minutes"));
        assert!(output.contains("60"));
        assert!(output.contains("\u{2039} Work \u{203A}"));
    }

    #[test]
    fn task_form_shows_quadrant_selector() {
        let mut app = sample_app();
        app.board.set_tab(PlannerTab::Priority);
        app.open_form();
        let output = render(&app);
        assert!(output.contains("Add task"));
        assert!(output.contains("\u{2039} Urgent & Important \u{203A}"));
        assert!(!output.contains("Minutes"));
    }

    #[test]
    fn nothing_drawn_without_a_form() {
        let app = sample_app();
        assert_eq!(render(&app), "");
    }
}
