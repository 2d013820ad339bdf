use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Goal, GoalColumn};
use crate::ops::stats::BoardStats;
use crate::tui::app::App;

use super::helpers::truncate;

/// Render the goal board: four columns in workflow order, each goal a two-line card
pub fn render_goals_view(frame: &mut Frame, app: &App, area: Rect) {
    let stats = BoardStats::compute(&app.board);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (column, rect) in GoalColumn::ALL.into_iter().zip(columns.iter()) {
        let count = stats.columns[column.index()].count;
        render_column(frame, app, column, count, *rect);
    }
}

fn render_column(frame: &mut Frame, app: &App, column: GoalColumn, count: usize, area: Rect) {
    let bg = app.theme.background;
    let focused = app.goal_focus == column;
    let border_style = if focused {
        Style::default().fg(app.theme.selection_border).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ({}) ", column.title(), count),
            Style::default()
                .fg(app.theme.tint(column.color()))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let goals = app.board.goals(column);
    if goals.is_empty() {
        let empty = Paragraph::new(" Empty").style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, inner);
        return;
    }

    // Each card takes two text rows plus a spacer
    let per_card = 3;
    let visible = (inner.height as usize / per_card).max(1);
    let cursor = if focused { Some(app.goal_cursor) } else { None };
    let offset = cursor.map_or(0, |c| c.saturating_sub(visible - 1));

    let mut lines: Vec<Line> = Vec::new();
    for (i, goal) in goals.iter().enumerate().skip(offset).take(visible) {
        lines.extend(goal_card(app, goal, cursor == Some(i), inner.width as usize));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

fn goal_card<'a>(app: &App, goal: &Goal, is_cursor: bool, width: usize) -> [Line<'a>; 2] {
    let card_bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let base = Style::default().bg(card_bg);
    let text = truncate(&goal.text, width.saturating_sub(2));
    let label = goal.category.label();
    [
        Line::from(vec![
            Span::styled(" ", base),
            Span::styled(text, base.fg(app.theme.text_bright)),
        ])
        .style(base),
        Line::from(vec![
            Span::styled(" \u{25CF} ", base.fg(app.theme.category_color(goal.category))),
            Span::styled(label, base.fg(app.theme.dim)),
        ])
        .style(base),
    ]
}
