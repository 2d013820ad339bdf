use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::model::{
    BoardConfig, CategoryKey, Goal, GoalColumn, PlannerTab, QuadrantKey, RecordId, ScheduleDraft,
    ScheduleItem, Task,
};

/// Error type for board operations. A failed operation never changes the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("a start time is required")]
    EmptyTime,
    #[error("invalid start time '{0}' (expected HH:MM)")]
    InvalidTime(String),
    #[error("duration must be at least one minute")]
    InvalidDuration,
    #[error("duration '{0}' is too large")]
    DurationTooLarge(String),
    #[error("text is required")]
    EmptyText,
    #[error("schedule item {0} not found")]
    ScheduleItemNotFound(RecordId),
    #[error("task {id} not found in {quadrant}")]
    TaskNotFound { quadrant: QuadrantKey, id: RecordId },
    #[error("goal {id} not found in {column}")]
    GoalNotFound { column: GoalColumn, id: RecordId },
}

/// Clock-derived id source.
///
/// Ids are milliseconds since the Unix epoch, bumped past the last issued id
/// so that two adds within the same millisecond still get distinct ids.
#[derive(Debug, Clone, Default)]
pub struct IdClock {
    last: RecordId,
}

impl IdClock {
    /// Make sure future ids are greater than `id`
    pub fn observe(&mut self, id: RecordId) {
        self.last = self.last.max(id);
    }

    pub fn next_id(&mut self) -> RecordId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last.saturating_add(1));
        self.last
    }
}

/// In-memory state of one planning session
#[derive(Debug, Clone)]
pub struct Board {
    schedule: Vec<ScheduleItem>,
    /// Indexed by `QuadrantKey::index`
    tasks: [Vec<Task>; 4],
    /// Indexed by `GoalColumn::index`
    goals: [Vec<Goal>; 4],
    active_tab: PlannerTab,
    date: NaiveDate,
    ids: IdClock,
}

impl Board {
    /// An empty board for the given date
    pub fn new(date: NaiveDate) -> Self {
        Board {
            schedule: Vec::new(),
            tasks: Default::default(),
            goals: Default::default(),
            active_tab: PlannerTab::default(),
            date,
            ids: IdClock::default(),
        }
    }

    /// A board pre-filled with the sample schedule, tasks and goals
    pub fn with_sample_data(date: NaiveDate) -> Self {
        let mut board = Board::new(date);

        let item = |id, time: &str, duration, task: &str, category| ScheduleItem {
            id,
            time: time.to_string(),
            duration,
            task: task.to_string(),
            category,
            completed: false,
        };
        board.schedule = vec![
            item(1, "09:00", 60, "Morning Planning", CategoryKey::Work),
            item(2, "10:00", 90, "Project Development", CategoryKey::Work),
            item(3, "14:00", 30, "Lunch Break", CategoryKey::Personal),
        ];

        board.tasks = [
            vec![
                Task::new(1, "Complete project proposal"),
                Task::new(2, "Review client feedback"),
            ],
            vec![Task::new(3, "Learn new technology"), Task::new(4, "Plan next week")],
            vec![Task::new(5, "Reply to emails"), Task::new(6, "Schedule meetings")],
            vec![Task::new(7, "Organize desktop")],
        ];

        board.goals = [
            vec![
                Goal::new(1, "Build personal website", CategoryKey::Personal),
                Goal::new(2, "Learn TypeScript advanced concepts", CategoryKey::Learning),
            ],
            vec![
                Goal::new(3, "Complete dashboard mockup", CategoryKey::Work),
                Goal::new(4, "Exercise for 30 minutes", CategoryKey::Health),
            ],
            vec![Goal::new(5, "Reading \"Clean Code\" book", CategoryKey::Learning)],
            vec![Goal::new(6, "Set up development environment", CategoryKey::Work)],
        ];

        board.observe_existing_ids();
        board
    }

    pub fn from_config(config: &BoardConfig, date: NaiveDate) -> Self {
        if config.seed_sample_data {
            Board::with_sample_data(date)
        } else {
            Board::new(date)
        }
    }

    fn observe_existing_ids(&mut self) {
        let ids = self
            .schedule
            .iter()
            .map(|i| i.id)
            .chain(self.tasks.iter().flatten().map(|t| t.id))
            .chain(self.goals.iter().flatten().map(|g| g.id));
        for id in ids {
            self.ids.observe(id);
        }
    }

    // --- Selectors ---

    pub fn schedule(&self) -> &[ScheduleItem] {
        &self.schedule
    }

    pub fn tasks(&self, quadrant: QuadrantKey) -> &[Task] {
        &self.tasks[quadrant.index()]
    }

    pub fn goals(&self, column: GoalColumn) -> &[Goal] {
        &self.goals[column.index()]
    }

    pub fn total_goals(&self) -> usize {
        self.goals.iter().map(Vec::len).sum()
    }

    /// Locate a goal by id across all columns
    pub fn find_goal(&self, id: RecordId) -> Option<(GoalColumn, &Goal)> {
        GoalColumn::ALL.into_iter().find_map(|column| {
            self.goals(column)
                .iter()
                .find(|g| g.id == id)
                .map(|g| (column, g))
        })
    }

    pub fn active_tab(&self) -> PlannerTab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: PlannerTab) {
        debug!(tab = ?tab, "select planner tab");
        self.active_tab = tab;
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        debug!(%date, "change date");
        self.date = date;
    }

    // --- Schedule ---

    /// Append a schedule item built from `draft`. Returns the new id.
    pub fn add_schedule_item(&mut self, draft: ScheduleDraft) -> Result<RecordId, BoardError> {
        let time = draft.time.trim();
        if time.is_empty() {
            return Err(BoardError::EmptyTime);
        }
        let time = normalize_time(time)?;
        let task = draft.task.trim();
        if task.is_empty() {
            return Err(BoardError::EmptyText);
        }
        if draft.duration == 0 {
            return Err(BoardError::InvalidDuration);
        }

        let id = self.ids.next_id();
        self.schedule.push(ScheduleItem {
            id,
            time,
            duration: draft.duration,
            task: task.to_string(),
            category: draft.category,
            completed: false,
        });
        debug!(id, "add schedule item");
        Ok(id)
    }

    /// Flip completion on a schedule item. Returns the new completion value.
    pub fn toggle_schedule_complete(&mut self, id: RecordId) -> Result<bool, BoardError> {
        let item = self
            .schedule
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(BoardError::ScheduleItemNotFound(id))?;
        item.completed = !item.completed;
        debug!(id, completed = item.completed, "toggle schedule item");
        Ok(item.completed)
    }

    pub fn delete_schedule_item(&mut self, id: RecordId) -> Result<ScheduleItem, BoardError> {
        let pos = self
            .schedule
            .iter()
            .position(|i| i.id == id)
            .ok_or(BoardError::ScheduleItemNotFound(id))?;
        debug!(id, "delete schedule item");
        Ok(self.schedule.remove(pos))
    }

    // --- Priority matrix ---

    pub fn add_task(&mut self, quadrant: QuadrantKey, text: &str) -> Result<RecordId, BoardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::EmptyText);
        }
        let id = self.ids.next_id();
        self.tasks[quadrant.index()].push(Task::new(id, text));
        debug!(id, %quadrant, "add task");
        Ok(id)
    }

    pub fn toggle_task(&mut self, quadrant: QuadrantKey, id: RecordId) -> Result<bool, BoardError> {
        let task = self.tasks[quadrant.index()]
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BoardError::TaskNotFound { quadrant, id })?;
        task.completed = !task.completed;
        debug!(id, %quadrant, completed = task.completed, "toggle task");
        Ok(task.completed)
    }

    pub fn delete_task(&mut self, quadrant: QuadrantKey, id: RecordId) -> Result<Task, BoardError> {
        let tasks = &mut self.tasks[quadrant.index()];
        let pos = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(BoardError::TaskNotFound { quadrant, id })?;
        debug!(id, %quadrant, "delete task");
        Ok(tasks.remove(pos))
    }

    // --- Goal board ---

    /// Add a goal. New goals always start in the backlog.
    pub fn add_goal(&mut self, text: &str, category: CategoryKey) -> Result<RecordId, BoardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::EmptyText);
        }
        let id = self.ids.next_id();
        self.goals[GoalColumn::Backlog.index()].push(Goal::new(id, text, category));
        debug!(id, %category, "add goal");
        Ok(id)
    }

    /// Move a goal from one column to the end of another.
    ///
    /// Moving within the same column re-appends the goal at the end.
    pub fn move_goal(
        &mut self,
        id: RecordId,
        from: GoalColumn,
        to: GoalColumn,
    ) -> Result<(), BoardError> {
        let pos = self.goals[from.index()]
            .iter()
            .position(|g| g.id == id)
            .ok_or(BoardError::GoalNotFound { column: from, id })?;
        let goal = self.goals[from.index()].remove(pos);
        self.goals[to.index()].push(goal);
        debug!(id, %from, %to, "move goal");
        Ok(())
    }

    pub fn delete_goal(&mut self, column: GoalColumn, id: RecordId) -> Result<Goal, BoardError> {
        let goals = &mut self.goals[column.index()];
        let pos = goals
            .iter()
            .position(|g| g.id == id)
            .ok_or(BoardError::GoalNotFound { column, id })?;
        debug!(id, %column, "delete goal");
        Ok(goals.remove(pos))
    }
}

/// Parse an `HH:MM` time and re-format it zero-padded so string order matches time order
fn normalize_time(time: &str) -> Result<String, BoardError> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| BoardError::InvalidTime(time.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::display_order;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn sample() -> Board {
        Board::with_sample_data(date())
    }

    /// Every quadrant's tasks, in quadrant order
    fn all_tasks(board: &Board) -> Vec<Vec<Task>> {
        QuadrantKey::ALL.into_iter().map(|q| board.tasks(q).to_vec()).collect()
    }

    /// Every column's goals, in column order
    fn all_goals(board: &Board) -> Vec<Vec<Goal>> {
        GoalColumn::ALL.into_iter().map(|c| board.goals(c).to_vec()).collect()
    }

    // --- ids ---

    #[test]
    fn id_clock_is_strictly_increasing() {
        let mut clock = IdClock::default();
        let a = clock.next_id();
        let b = clock.next_id();
        let c = clock.next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn id_clock_respects_observed_ids() {
        let mut clock = IdClock::default();
        clock.observe(u64::MAX - 10);
        assert_eq!(clock.next_id(), u64::MAX - 9);
    }

    #[test]
    fn new_ids_are_unique_across_rapid_adds() {
        let mut board = sample();
        let before: Vec<RecordId> = board.schedule().iter().map(|i| i.id).collect();
        let mut added = Vec::new();
        for n in 0..50 {
            let id = board
                .add_schedule_item(ScheduleDraft::new("12:00", format!("item {}", n), CategoryKey::Work))
                .unwrap();
            assert!(!before.contains(&id));
            assert!(!added.contains(&id));
            added.push(id);
        }
        assert_eq!(board.schedule().len(), 53);
    }

    #[test]
    fn task_and_goal_ids_do_not_collide_with_seed() {
        let mut board = sample();
        let id = board.add_task(QuadrantKey::UrgentImportant, "Call bank").unwrap();
        assert!(QuadrantKey::ALL
            .iter()
            .flat_map(|q| board.tasks(*q))
            .filter(|t| t.id == id)
            .count()
            == 1);
        let gid = board.add_goal("Run 5k", CategoryKey::Health).unwrap();
        assert!(gid > 6);
    }

    // --- schedule ---

    #[test]
    fn add_schedule_item_appends_uncompleted() {
        let mut board = Board::new(date());
        let id = board
            .add_schedule_item(ScheduleDraft::new("08:00", "Stand-up", CategoryKey::Work).with_duration(15))
            .unwrap();
        let item = &board.schedule()[0];
        assert_eq!(item.id, id);
        assert_eq!(item.time, "08:00");
        assert_eq!(item.duration, 15);
        assert_eq!(item.task, "Stand-up");
        assert!(!item.completed);
    }

    #[test]
    fn add_schedule_item_rejects_missing_fields() {
        let mut board = sample();
        let before = board.schedule().to_vec();

        let err = board
            .add_schedule_item(ScheduleDraft::new("", "Stand-up", CategoryKey::Work))
            .unwrap_err();
        assert_eq!(err, BoardError::EmptyTime);

        let err = board
            .add_schedule_item(ScheduleDraft::new("08:00", "   ", CategoryKey::Work))
            .unwrap_err();
        assert_eq!(err, BoardError::EmptyText);

        let err = board
            .add_schedule_item(ScheduleDraft::new("8 o'clock", "Stand-up", CategoryKey::Work))
            .unwrap_err();
        assert_eq!(err, BoardError::InvalidTime("8 o'clock".into()));

        let err = board
            .add_schedule_item(ScheduleDraft::new("08:00", "Stand-up", CategoryKey::Work).with_duration(0))
            .unwrap_err();
        assert_eq!(err, BoardError::InvalidDuration);

        assert_eq!(board.schedule(), before.as_slice());
    }

    #[test]
    fn add_schedule_item_zero_pads_time() {
        let mut board = Board::new(date());
        board
            .add_schedule_item(ScheduleDraft::new("7:30", "Gym", CategoryKey::Health))
            .unwrap();
        assert_eq!(board.schedule()[0].time, "07:30");
    }

    #[test]
    fn display_order_sorts_by_time_but_storage_keeps_insertion_order() {
        let mut board = Board::new(date());
        board
            .add_schedule_item(ScheduleDraft::new("09:00", "Planning", CategoryKey::Work))
            .unwrap();
        board
            .add_schedule_item(ScheduleDraft::new("08:00", "Stand-up", CategoryKey::Work))
            .unwrap();

        let stored: Vec<&str> = board.schedule().iter().map(|i| i.time.as_str()).collect();
        assert_eq!(stored, vec!["09:00", "08:00"]);

        let shown: Vec<&str> = display_order(board.schedule())
            .iter()
            .map(|i| i.time.as_str())
            .collect();
        assert_eq!(shown, vec!["08:00", "09:00"]);
    }

    #[test]
    fn toggle_schedule_is_its_own_inverse() {
        let mut board = sample();
        assert_eq!(board.toggle_schedule_complete(2), Ok(true));
        assert!(board.schedule()[1].completed);
        assert_eq!(board.toggle_schedule_complete(2), Ok(false));
        assert!(!board.schedule()[1].completed);
    }

    #[test]
    fn toggle_unknown_schedule_item_changes_nothing() {
        let mut board = sample();
        let before = board.schedule().to_vec();
        assert_eq!(
            board.toggle_schedule_complete(99),
            Err(BoardError::ScheduleItemNotFound(99))
        );
        assert_eq!(board.schedule(), before.as_slice());
    }

    #[test]
    fn delete_schedule_item() {
        let mut board = sample();
        let removed = board.delete_schedule_item(1).unwrap();
        assert_eq!(removed.task, "Morning Planning");
        let ids: Vec<RecordId> = board.schedule().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn delete_unknown_schedule_item_changes_nothing() {
        let mut board = sample();
        let before = board.schedule().to_vec();
        assert!(board.delete_schedule_item(42).is_err());
        assert_eq!(board.schedule(), before.as_slice());
    }

    // --- tasks ---

    #[test]
    fn add_task_goes_to_named_quadrant() {
        let mut board = sample();
        let id = board
            .add_task(QuadrantKey::UrgentNotImportant, "  Book flights  ")
            .unwrap();
        let tasks = board.tasks(QuadrantKey::UrgentNotImportant);
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[2], Task::new(id, "Book flights"));
        assert_eq!(board.tasks(QuadrantKey::UrgentImportant).len(), 2);
    }

    #[test]
    fn add_task_rejects_blank_text() {
        let mut board = sample();
        assert_eq!(
            board.add_task(QuadrantKey::UrgentImportant, " \t "),
            Err(BoardError::EmptyText)
        );
        assert_eq!(board.tasks(QuadrantKey::UrgentImportant).len(), 2);
    }

    #[test]
    fn toggle_and_delete_are_scoped_to_quadrant() {
        let mut board = sample();
        // Task 3 lives in not_urgent_important, not urgent_important
        assert_eq!(
            board.toggle_task(QuadrantKey::UrgentImportant, 3),
            Err(BoardError::TaskNotFound {
                quadrant: QuadrantKey::UrgentImportant,
                id: 3
            })
        );
        assert_eq!(board.toggle_task(QuadrantKey::NotUrgentImportant, 3), Ok(true));
        assert!(board.tasks(QuadrantKey::NotUrgentImportant)[0].completed);

        assert!(board.delete_task(QuadrantKey::UrgentImportant, 7).is_err());
        assert_eq!(board.tasks(QuadrantKey::NotUrgentNotImportant).len(), 1);
        board.delete_task(QuadrantKey::NotUrgentNotImportant, 7).unwrap();
        assert!(board.tasks(QuadrantKey::NotUrgentNotImportant).is_empty());
    }

    // --- goals ---

    #[test]
    fn add_goal_always_lands_in_backlog() {
        let mut board = sample();
        board.set_tab(PlannerTab::Goals);
        let id = board.add_goal("Ship v1", CategoryKey::Work).unwrap();
        let backlog = board.goals(GoalColumn::Backlog);
        assert_eq!(backlog.last().map(|g| g.id), Some(id));
        assert_eq!(board.goals(GoalColumn::Today).len(), 2);
        assert_eq!(board.find_goal(id).map(|(c, _)| c), Some(GoalColumn::Backlog));
    }

    #[test]
    fn add_goal_rejects_blank_text() {
        let mut board = sample();
        assert_eq!(board.add_goal("", CategoryKey::Work), Err(BoardError::EmptyText));
        assert_eq!(board.total_goals(), 6);
    }

    #[test]
    fn move_goal_between_columns() {
        let mut board = sample();
        let total = board.total_goals();
        board.move_goal(1, GoalColumn::Backlog, GoalColumn::InProgress).unwrap();

        assert!(board.goals(GoalColumn::Backlog).iter().all(|g| g.id != 1));
        let in_progress: Vec<RecordId> =
            board.goals(GoalColumn::InProgress).iter().map(|g| g.id).collect();
        assert_eq!(in_progress, vec![5, 1]);
        assert_eq!(board.total_goals(), total);
    }

    #[test]
    fn move_goal_every_pair_preserves_count() {
        for from in GoalColumn::ALL {
            for to in GoalColumn::ALL {
                if from == to {
                    continue;
                }
                let mut board = sample();
                let id = board.goals(from)[0].id;
                board.move_goal(id, from, to).unwrap();
                assert_eq!(board.total_goals(), 6);
                assert!(board.goals(from).iter().all(|g| g.id != id));
                assert_eq!(board.goals(to).iter().filter(|g| g.id == id).count(), 1);
            }
        }
    }

    #[test]
    fn move_goal_not_in_source_is_rejected() {
        let mut board = sample();
        // Goal 3 is in Today, not Backlog
        assert_eq!(
            board.move_goal(3, GoalColumn::Backlog, GoalColumn::Completed),
            Err(BoardError::GoalNotFound {
                column: GoalColumn::Backlog,
                id: 3
            })
        );
        let today: Vec<RecordId> = board.goals(GoalColumn::Today).iter().map(|g| g.id).collect();
        assert_eq!(today, vec![3, 4]);
        assert!(board.goals(GoalColumn::Completed).iter().all(|g| g.id != 3));
    }

    #[test]
    fn move_goal_to_same_column_reappends() {
        let mut board = sample();
        board.move_goal(3, GoalColumn::Today, GoalColumn::Today).unwrap();
        let today: Vec<RecordId> = board.goals(GoalColumn::Today).iter().map(|g| g.id).collect();
        assert_eq!(today, vec![4, 3]);
    }

    #[test]
    fn delete_goal_from_column() {
        let mut board = sample();
        let removed = board.delete_goal(GoalColumn::Completed, 6).unwrap();
        assert_eq!(removed.text, "Set up development environment");
        assert!(board.goals(GoalColumn::Completed).is_empty());
        assert!(board.delete_goal(GoalColumn::Completed, 6).is_err());
    }

    #[test]
    fn unknown_task_ids_leave_every_quadrant_unchanged() {
        let mut board = sample();
        board.toggle_task(QuadrantKey::UrgentImportant, 1).unwrap();
        let before = all_tasks(&board);

        for quadrant in QuadrantKey::ALL {
            assert!(board.delete_task(quadrant, 999).is_err());
            assert!(board.toggle_task(quadrant, 999).is_err());
        }
        // Existing id, wrong quadrant
        assert!(board.delete_task(QuadrantKey::NotUrgentNotImportant, 1).is_err());

        assert_eq!(all_tasks(&board), before);
    }

    #[test]
    fn unknown_goal_ids_leave_every_column_unchanged() {
        let mut board = sample();
        let before = all_goals(&board);

        for column in GoalColumn::ALL {
            assert!(board.delete_goal(column, 999).is_err());
            for to in GoalColumn::ALL {
                assert!(board.move_goal(999, column, to).is_err());
            }
        }
        // Existing id, wrong source column
        assert!(board.delete_goal(GoalColumn::Backlog, 6).is_err());
        assert!(board.move_goal(6, GoalColumn::Today, GoalColumn::Backlog).is_err());

        assert_eq!(all_goals(&board), before);
    }

    // --- selectors ---

    #[test]
    fn tab_and_date_selection() {
        let mut board = sample();
        assert_eq!(board.active_tab(), PlannerTab::Schedule);
        board.set_tab(PlannerTab::Priority);
        assert_eq!(board.active_tab(), PlannerTab::Priority);
        let next = date().succ_opt().unwrap();
        board.set_date(next);
        assert_eq!(board.date(), next);
    }

    #[test]
    fn from_config_respects_seed_flag() {
        let mut config = BoardConfig::default();
        assert_eq!(Board::from_config(&config, date()).schedule().len(), 3);
        config.seed_sample_data = false;
        let board = Board::from_config(&config, date());
        assert!(board.schedule().is_empty());
        assert_eq!(board.total_goals(), 0);
    }
}
