use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{ScheduleItem, display_order};
use crate::tui::app::App;

use super::helpers::{display_width, spans_width, truncate};

/// Checkbox symbol for a schedule item
fn check_symbol(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Render the daily schedule: heading with the long date, then one row per
/// item in start-time order
pub fn render_schedule_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    // Heading: title left, long date right
    let title = " Daily Schedule";
    let date = format!("{} ", app.board.date().format("%A, %B %-d, %Y"));
    let pad = width.saturating_sub(display_width(title) + display_width(&date));
    lines.push(Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(date, Style::default().fg(app.theme.dim).bg(bg)),
    ]));
    lines.push(Line::from(""));

    let items = display_order(app.board.schedule());
    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            " Nothing scheduled. Press a to add an item.",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
        return;
    }

    // Keep the cursor row visible
    let visible = (area.height as usize).saturating_sub(lines.len()).max(1);
    let offset = app.schedule_cursor.saturating_sub(visible - 1);

    for (i, item) in items.iter().enumerate().skip(offset).take(visible) {
        lines.push(schedule_row(app, item, i == app.schedule_cursor, width));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn schedule_row<'a>(app: &App, item: &ScheduleItem, is_cursor: bool, width: usize) -> Line<'a> {
    let row_bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let base = Style::default().bg(row_bg);
    let text_style = if item.completed {
        base.fg(app.theme.dim).add_modifier(Modifier::CROSSED_OUT)
    } else {
        base.fg(app.theme.text_bright)
    };

    let mut left = vec![
        Span::styled(" ", base),
        Span::styled(
            "\u{258C}",
            base.fg(app.theme.category_color(item.category)),
        ),
        Span::styled(" ", base),
        Span::styled(
            check_symbol(item.completed),
            base.fg(if item.completed {
                app.theme.green
            } else {
                app.theme.text
            }),
        ),
        Span::styled(format!(" {}  ", item.time), base.fg(app.theme.text)),
    ];
    let right = vec![
        Span::styled(format!("{} min", item.duration), base.fg(app.theme.dim)),
        Span::styled(" \u{2022} ", base.fg(app.theme.dim)),
        Span::styled(
            format!("{} ", item.category.label()),
            base.fg(app.theme.category_color(item.category)),
        ),
    ];

    // Task text gets whatever is left between the fixed parts
    let fixed = spans_width(&left) + spans_width(&right) + 1;
    let task = truncate(&item.task, width.saturating_sub(fixed));
    let pad = width.saturating_sub(fixed + display_width(&task));
    left.push(Span::styled(task, text_style));
    left.push(Span::styled(" ".repeat(pad + 1), base));
    left.extend(right);
    Line::from(left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryKey, ScheduleDraft};
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn render(app: &App, w: u16, h: u16) -> String {
        render_to_string(w, h, |frame, area| render_schedule_view(frame, app, area))
    }

    #[test]
    fn rows_show_time_task_and_category() {
        let app = sample_app();
        let output = render(&app, 60, 5);
        let lines: Vec<&str> = output.lines().collect();
        let expected = vec![
            format!(" Daily Schedule{}Monday, June 2, 2025", " ".repeat(24)),
            String::new(),
            format!(" \u{258C} [ ] 09:00  Morning Planning{}60 min \u{2022} Work", " ".repeat(16)),
            format!(" \u{258C} [ ] 10:00  Project Development{}90 min \u{2022} Work", " ".repeat(13)),
            format!(" \u{258C} [ ] 14:00  Lunch Break{}30 min \u{2022} Personal", " ".repeat(17)),
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn rows_follow_start_time_not_insertion_order() {
        let mut app = sample_app();
        app.board
            .add_schedule_item(ScheduleDraft::new("08:00", "Gym", CategoryKey::Health))
            .unwrap();
        let output = render(&app, 60, 8);
        let gym = output.find("Gym").unwrap();
        let planning = output.find("Morning Planning").unwrap();
        assert!(gym < planning);
    }

    #[test]
    fn completed_rows_are_checked() {
        let mut app = sample_app();
        app.board.toggle_schedule_complete(2).unwrap();
        let output = render(&app, 60, 5);
        assert!(output.contains("[x] 10:00"));
        assert!(output.contains("[ ] 09:00"));
    }

    #[test]
    fn long_task_text_is_truncated() {
        let mut app = empty_app();
        app.board
            .add_schedule_item(ScheduleDraft::new(
                "11:00",
                "An extremely long schedule entry that cannot fit",
                CategoryKey::Learning,
            ))
            .unwrap();
        let output = render(&app, 50, 3);
        let row = output.lines().nth(2).unwrap();
        assert!(row.contains('\u{2026}'));
        assert!(row.ends_with("Learning"));
    }

    #[test]
    fn empty_schedule_shows_hint() {
        let app = empty_app();
        assert!(render(&app, 60, 4).contains("Nothing scheduled"));
    }
}
