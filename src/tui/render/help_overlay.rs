use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::PlannerTab;
use crate::tui::app::{App, Screen};

use super::helpers::centered_rect_pct;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect_pct(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    // Context-sensitive help
    match app.screen {
        Screen::Planner => {
            lines.push(Line::from(Span::styled(" Panels", header_style)));
            add_binding(&mut lines, " 1/2/3", "Schedule / Priority / Goals", key_style, desc_style);
            add_binding(&mut lines, " Tab/S-Tab", "Next / previous panel", key_style, desc_style);
            add_binding(&mut lines, " [ / ]", "Previous / next day", key_style, desc_style);
            add_binding(&mut lines, " T", "Jump to today", key_style, desc_style);
            add_binding(&mut lines, " a", "Add to this panel", key_style, desc_style);
            lines.push(Line::from(""));

            match app.board.active_tab() {
                PlannerTab::Schedule => {
                    lines.push(Line::from(Span::styled(" Schedule", header_style)));
                    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
                    add_binding(&mut lines, " Space/x", "Toggle complete", key_style, desc_style);
                    add_binding(&mut lines, " d", "Delete item", key_style, desc_style);
                }
                PlannerTab::Priority => {
                    lines.push(Line::from(Span::styled(" Priority Matrix", header_style)));
                    add_binding(&mut lines, " h/l", "Left / right quadrant", key_style, desc_style);
                    add_binding(&mut lines, " j/k", "Move cursor, crossing quadrants", key_style, desc_style);
                    add_binding(&mut lines, " Space/x", "Toggle complete", key_style, desc_style);
                    add_binding(&mut lines, " d", "Delete task", key_style, desc_style);
                }
                PlannerTab::Goals => {
                    lines.push(Line::from(Span::styled(" Goal Board", header_style)));
                    add_binding(&mut lines, " h/l", "Previous / next column", key_style, desc_style);
                    add_binding(&mut lines, " j/k", "Move cursor", key_style, desc_style);
                    add_binding(&mut lines, " b/n/p/c", "Move to Backlog/Today/Doing/Done", key_style, desc_style);
                    add_binding(&mut lines, " d", "Delete goal", key_style, desc_style);
                }
            }
        }
        Screen::Infra => {
            lines.push(Line::from(Span::styled(" Infrastructure", header_style)));
            add_binding(&mut lines, " 1-5", "Select panel", key_style, desc_style);
            add_binding(&mut lines, " Tab/S-Tab", "Next / previous panel", key_style, desc_style);
            add_binding(&mut lines, " r", "Refresh", key_style, desc_style);
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" General", header_style)));
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Close / clear message", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 12;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
