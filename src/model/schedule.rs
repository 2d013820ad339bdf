use serde::{Deserialize, Serialize};

use super::category::CategoryKey;

/// Unique record identifier within a collection
pub type RecordId = u64;

/// A time-boxed entry on the daily schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: RecordId,
    /// Start time as `HH:MM` (24-hour)
    pub time: String,
    /// Duration in minutes
    pub duration: u32,
    pub task: String,
    pub category: CategoryKey,
    pub completed: bool,
}

/// User input for a new schedule item (everything except id and completion)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDraft {
    pub time: String,
    pub duration: u32,
    pub task: String,
    pub category: CategoryKey,
}

impl ScheduleDraft {
    pub fn new(time: impl Into<String>, task: impl Into<String>, category: CategoryKey) -> Self {
        ScheduleDraft {
            time: time.into(),
            duration: DEFAULT_DURATION,
            task: task.into(),
            category,
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }
}

impl Default for ScheduleDraft {
    fn default() -> Self {
        ScheduleDraft::new("", "", CategoryKey::Work)
    }
}

/// Default duration for new schedule items, in minutes
pub const DEFAULT_DURATION: u32 = 60;

/// Return the items in display order (by start time), leaving storage untouched.
///
/// The sort is stable, so items with the same start time keep insertion order.
pub fn display_order(items: &[ScheduleItem]) -> Vec<&ScheduleItem> {
    let mut sorted: Vec<&ScheduleItem> = items.iter().collect();
    sorted.sort_by(|a, b| a.time.cmp(&b.time));
    sorted
}
