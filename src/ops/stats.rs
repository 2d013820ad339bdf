use serde::Serialize;

use crate::model::{GoalColumn, QuadrantKey, ScheduleItem};
use crate::ops::board::Board;

/// Percentage of schedule items marked completed, rounded half up. 0 when there are none.
pub fn completion_rate(items: &[ScheduleItem]) -> u8 {
    let total = items.len();
    if total == 0 {
        return 0;
    }
    let completed = items.iter().filter(|i| i.completed).count();
    // round(100 * completed / total) in integer arithmetic
    ((200 * completed + total) / (2 * total)) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuadrantStats {
    pub quadrant: QuadrantKey,
    pub open: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnStats {
    pub column: GoalColumn,
    pub count: usize,
}

/// Summary counts for a board, recomputed on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub schedule_total: usize,
    pub schedule_completed: usize,
    pub completion_rate: u8,
    pub quadrants: Vec<QuadrantStats>,
    pub columns: Vec<ColumnStats>,
}

impl BoardStats {
    pub fn compute(board: &Board) -> Self {
        let schedule = board.schedule();
        let quadrants = QuadrantKey::ALL
            .into_iter()
            .map(|quadrant| {
                let tasks = board.tasks(quadrant);
                QuadrantStats {
                    quadrant,
                    open: tasks.iter().filter(|t| !t.completed).count(),
                    total: tasks.len(),
                }
            })
            .collect();
        let columns = GoalColumn::ALL
            .into_iter()
            .map(|column| ColumnStats {
                column,
                count: board.goals(column).len(),
            })
            .collect();

        BoardStats {
            schedule_total: schedule.len(),
            schedule_completed: schedule.iter().filter(|i| i.completed).count(),
            completion_rate: completion_rate(schedule),
            quadrants,
            columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryKey;
    use chrono::NaiveDate;

    fn items(done: &[bool]) -> Vec<ScheduleItem> {
        done.iter()
            .enumerate()
            .map(|(i, &completed)| ScheduleItem {
                id: i as u64 + 1,
                time: "09:00".into(),
                duration: 30,
                task: format!("item {}", i),
                category: CategoryKey::Work,
                completed,
            })
            .collect()
    }

    #[test]
    fn completion_rate_examples() {
        assert_eq!(completion_rate(&[]), 0);
        assert_eq!(completion_rate(&items(&[true, false])), 50);
        assert_eq!(completion_rate(&items(&[true, true, true])), 100);
        assert_eq!(completion_rate(&items(&[false, false, false])), 0);
    }

    #[test]
    fn completion_rate_rounds_to_nearest() {
        // 1/3 = 33.3 -> 33, 2/3 = 66.7 -> 67
        assert_eq!(completion_rate(&items(&[true, false, false])), 33);
        assert_eq!(completion_rate(&items(&[true, true, false])), 67);
        // 1/8 = 12.5 -> 13
        let mut v = vec![false; 8];
        v[0] = true;
        assert_eq!(completion_rate(&items(&v)), 13);
    }

    #[test]
    fn board_stats_for_sample_board() {
        let mut board = Board::with_sample_data(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        board.toggle_schedule_complete(1).unwrap();
        board.toggle_task(QuadrantKey::UrgentImportant, 2).unwrap();

        let stats = BoardStats::compute(&board);
        assert_eq!(stats.schedule_total, 3);
        assert_eq!(stats.schedule_completed, 1);
        assert_eq!(stats.completion_rate, 33);
        assert_eq!(
            stats.quadrants[0],
            QuadrantStats {
                quadrant: QuadrantKey::UrgentImportant,
                open: 1,
                total: 2
            }
        );
        let counts: Vec<usize> = stats.columns.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![2, 2, 1, 1]);
    }
}
