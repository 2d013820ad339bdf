use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::QuadrantKey;
use crate::tui::app::App;

use super::helpers::{display_width, truncate};

/// Render the priority matrix as a 2x2 grid, quadrants in table order
pub fn render_priority_view(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    for (r, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(*row);
        for (c, cell) in cells.iter().enumerate() {
            render_quadrant(frame, app, QuadrantKey::ALL[r * 2 + c], *cell);
        }
    }
}

fn render_quadrant(frame: &mut Frame, app: &App, quadrant: QuadrantKey, area: Rect) {
    let bg = app.theme.background;
    let color = app.theme.tint(quadrant.info().color);
    let focused = app.priority_focus == quadrant;
    let tasks = app.board.tasks(quadrant);

    let border_style = if focused {
        Style::default().fg(app.theme.selection_border).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ({}) ", quadrant.title(), tasks.len()),
            Style::default()
                .fg(color)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if tasks.is_empty() {
        let empty = Paragraph::new(" No tasks")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, inner);
        return;
    }

    let width = inner.width as usize;
    let visible = (inner.height as usize).max(1);
    let cursor = if focused { Some(app.priority_cursor) } else { None };
    let offset = cursor.map_or(0, |c| c.saturating_sub(visible - 1));

    let lines: Vec<Line> = tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, task)| {
            let row_bg = if cursor == Some(i) {
                app.theme.selection_bg
            } else {
                bg
            };
            let base = Style::default().bg(row_bg);
            let (check, check_color) = if task.completed {
                ("[x]", app.theme.green)
            } else {
                ("[ ]", app.theme.text)
            };
            let text_style = if task.completed {
                base.fg(app.theme.dim).add_modifier(Modifier::CROSSED_OUT)
            } else {
                base.fg(app.theme.text_bright)
            };
            let text = truncate(&task.text, width.saturating_sub(6));
            let pad = width.saturating_sub(6 + display_width(&text));
            Line::from(vec![
                Span::styled(" ", base),
                Span::styled(check, base.fg(check_color)),
                Span::styled(" ", base),
                Span::styled(text, text_style),
                Span::styled(" ".repeat(pad + 1), base),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlannerTab;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, 12, |frame, area| render_priority_view(frame, app, area))
    }

    #[test]
    fn quadrants_are_laid_out_in_a_grid() {
        let mut app = sample_app();
        app.board.set_tab(PlannerTab::Priority);
        let output = render(&app);
        let lines: Vec<&str> = output.lines().collect();
        // Top row holds the two important quadrants
        assert!(lines[0].contains("Urgent & Important (2)"));
        assert!(lines[0].contains("Important, Not Urgent (2)"));
        assert!(lines[6].contains("Urgent, Not Important (2)"));
        assert!(lines[6].contains("Neither Urgent nor Important (1)"));
        assert!(output.contains("[ ] Complete project proposal"));
        assert!(output.contains("[ ] Organize desktop"));
    }

    #[test]
    fn completed_tasks_are_checked() {
        let mut app = sample_app();
        app.board.toggle_task(QuadrantKey::UrgentNotImportant, 5).unwrap();
        let output = render(&app);
        assert!(output.contains("[x] Reply to emails"));
    }

    #[test]
    fn empty_quadrant_says_so() {
        let app = empty_app();
        let output = render(&app);
        assert_eq!(output.matches("No tasks").count(), 4);
    }
}
