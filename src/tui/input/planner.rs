use chrono::{Days, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{GoalColumn, PlannerTab, QuadrantKey};
use crate::tui::app::App;

pub(super) fn handle_planner(app: &mut App, key: KeyEvent) {
    match key.code {
        // Tab navigator
        KeyCode::Char('1') => select_tab(app, PlannerTab::Schedule),
        KeyCode::Char('2') => select_tab(app, PlannerTab::Priority),
        KeyCode::Char('3') => select_tab(app, PlannerTab::Goals),
        KeyCode::Tab => select_tab(app, app.board.active_tab().next()),
        KeyCode::BackTab => select_tab(app, app.board.active_tab().prev()),

        // Date picker
        KeyCode::Char('[') => shift_date(app, -1),
        KeyCode::Char(']') => shift_date(app, 1),
        KeyCode::Char('T') => app.board.set_date(Local::now().date_naive()),

        KeyCode::Char('a') => app.open_form(),

        _ => match app.board.active_tab() {
            PlannerTab::Schedule => handle_schedule(app, key),
            PlannerTab::Priority => handle_priority(app, key),
            PlannerTab::Goals => handle_goals(app, key),
        },
    }
}

fn select_tab(app: &mut App, tab: PlannerTab) {
    app.board.set_tab(tab);
    app.status = None;
}

fn shift_date(app: &mut App, days: i64) {
    let date = app.board.date();
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    if let Some(d) = shifted {
        app.board.set_date(d);
    }
}

fn move_cursor(cursor: &mut usize, len: usize, down: bool) {
    if len == 0 {
        *cursor = 0;
    } else if down {
        *cursor = (*cursor + 1).min(len - 1);
    } else {
        *cursor = cursor.saturating_sub(1);
    }
}

fn handle_schedule(app: &mut App, key: KeyEvent) {
    let len = app.board.schedule().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => move_cursor(&mut app.schedule_cursor, len, true),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(&mut app.schedule_cursor, len, false),
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
            if let Some(id) = app.selected_schedule_id()
                && let Err(e) = app.board.toggle_schedule_complete(id)
            {
                app.set_error(&e);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_schedule_id() {
                match app.board.delete_schedule_item(id) {
                    Ok(item) => app.set_info(format!("Deleted \"{}\"", item.task)),
                    Err(e) => app.set_error(&e),
                }
                app.clamp_cursors();
            }
        }
        _ => {}
    }
}

/// Grid position of a quadrant: (row, col) in the 2x2 matrix
fn quadrant_cell(q: QuadrantKey) -> (usize, usize) {
    (q.index() / 2, q.index() % 2)
}

fn quadrant_at(row: usize, col: usize) -> QuadrantKey {
    QuadrantKey::ALL[row * 2 + col]
}

fn handle_priority(app: &mut App, key: KeyEvent) {
    let len = app.board.tasks(app.priority_focus).len();
    let (row, col) = quadrant_cell(app.priority_focus);
    let focus = |app: &mut App, q: QuadrantKey| {
        app.priority_focus = q;
        app.priority_cursor = 0;
    };
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.priority_cursor + 1 >= len && row == 0 {
                focus(app, quadrant_at(1, col));
            } else {
                move_cursor(&mut app.priority_cursor, len, true);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.priority_cursor == 0 && row == 1 {
                focus(app, quadrant_at(0, col));
                app.priority_cursor = app.board.tasks(app.priority_focus).len().saturating_sub(1);
            } else {
                move_cursor(&mut app.priority_cursor, len, false);
            }
        }
        KeyCode::Char('h') | KeyCode::Left => focus(app, quadrant_at(row, 0)),
        KeyCode::Char('l') | KeyCode::Right => focus(app, quadrant_at(row, 1)),
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
            if let Some(id) = app.selected_task_id()
                && let Err(e) = app.board.toggle_task(app.priority_focus, id)
            {
                app.set_error(&e);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_task_id() {
                match app.board.delete_task(app.priority_focus, id) {
                    Ok(task) => app.set_info(format!("Deleted \"{}\"", task.text)),
                    Err(e) => app.set_error(&e),
                }
                app.clamp_cursors();
            }
        }
        _ => {}
    }
}

fn handle_goals(app: &mut App, key: KeyEvent) {
    let len = app.board.goals(app.goal_focus).len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => move_cursor(&mut app.goal_cursor, len, true),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(&mut app.goal_cursor, len, false),
        KeyCode::Char('h') | KeyCode::Left => focus_column(app, false),
        KeyCode::Char('l') | KeyCode::Right => focus_column(app, true),
        KeyCode::Char('b') => move_selected_goal(app, GoalColumn::Backlog),
        KeyCode::Char('n') => move_selected_goal(app, GoalColumn::Today),
        KeyCode::Char('p') => move_selected_goal(app, GoalColumn::InProgress),
        KeyCode::Char('c') => move_selected_goal(app, GoalColumn::Completed),
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_goal_id() {
                match app.board.delete_goal(app.goal_focus, id) {
                    Ok(goal) => app.set_info(format!("Deleted \"{}\"", goal.text)),
                    Err(e) => app.set_error(&e),
                }
                app.clamp_cursors();
            }
        }
        _ => {}
    }
}

fn focus_column(app: &mut App, right: bool) {
    let idx = app.goal_focus.index();
    let next = if right {
        (idx + 1).min(GoalColumn::ALL.len() - 1)
    } else {
        idx.saturating_sub(1)
    };
    app.goal_focus = GoalColumn::ALL[next];
    app.goal_cursor = 0;
}

/// Quick-move the goal under the cursor. Only the board's move targets for
/// the current column are offered.
fn move_selected_goal(app: &mut App, to: GoalColumn) {
    let Some(id) = app.selected_goal_id() else {
        return;
    };
    let from = app.goal_focus;
    if !from.move_targets().contains(&to) {
        app.set_error_text(&format!("cannot move from {} to {}", from.title(), to.title()));
        return;
    }
    match app.board.move_goal(id, from, to) {
        Ok(()) => {
            app.set_info(format!("Moved to {}", to.title()));
            app.clamp_cursors();
        }
        Err(e) => app.set_error(&e),
    }
}
