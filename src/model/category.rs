use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a key name does not belong to a closed key set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{name}' (expected one of: {expected})")]
pub struct KeyParseError {
    pub kind: &'static str,
    pub name: String,
    pub expected: String,
}

impl KeyParseError {
    fn new(kind: &'static str, name: &str, names: &[&str]) -> Self {
        KeyParseError {
            kind,
            name: name.to_string(),
            expected: names.join(", "),
        }
    }
}

/// Display tint for a category, quadrant or column.
/// The theme maps each tint to a concrete terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Blue,
    Green,
    Red,
    Purple,
    Yellow,
    Orange,
    Gray,
}

/// Cross-cutting tag attached to schedule items and goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    Work,
    Personal,
    Health,
    Learning,
}

/// Display data for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub color: Tint,
    pub label: &'static str,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 4] = [
        CategoryKey::Work,
        CategoryKey::Personal,
        CategoryKey::Health,
        CategoryKey::Learning,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKey::Work => "work",
            CategoryKey::Personal => "personal",
            CategoryKey::Health => "health",
            CategoryKey::Learning => "learning",
        }
    }

    /// Lookup table entry for this key
    pub fn info(self) -> Category {
        match self {
            CategoryKey::Work => Category {
                color: Tint::Blue,
                label: "Work",
            },
            CategoryKey::Personal => Category {
                color: Tint::Green,
                label: "Personal",
            },
            CategoryKey::Health => Category {
                color: Tint::Red,
                label: "Health",
            },
            CategoryKey::Learning => Category {
                color: Tint::Purple,
                label: "Learning",
            },
        }
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// The next category in table order, wrapping around (used by selectors)
    pub fn next(self) -> CategoryKey {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> CategoryKey {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &Self::ALL, Self::as_str, "category")
    }
}

/// Urgency/importance bucket of the priority matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuadrantKey {
    UrgentImportant,
    NotUrgentImportant,
    UrgentNotImportant,
    NotUrgentNotImportant,
}

/// Display data for a quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadrant {
    pub title: &'static str,
    pub color: Tint,
}

impl QuadrantKey {
    pub const ALL: [QuadrantKey; 4] = [
        QuadrantKey::UrgentImportant,
        QuadrantKey::NotUrgentImportant,
        QuadrantKey::UrgentNotImportant,
        QuadrantKey::NotUrgentNotImportant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuadrantKey::UrgentImportant => "urgent_important",
            QuadrantKey::NotUrgentImportant => "not_urgent_important",
            QuadrantKey::UrgentNotImportant => "urgent_not_important",
            QuadrantKey::NotUrgentNotImportant => "not_urgent_not_important",
        }
    }

    pub fn info(self) -> Quadrant {
        match self {
            QuadrantKey::UrgentImportant => Quadrant {
                title: "Urgent & Important",
                color: Tint::Red,
            },
            QuadrantKey::NotUrgentImportant => Quadrant {
                title: "Important, Not Urgent",
                color: Tint::Yellow,
            },
            QuadrantKey::UrgentNotImportant => Quadrant {
                title: "Urgent, Not Important",
                color: Tint::Orange,
            },
            QuadrantKey::NotUrgentNotImportant => Quadrant {
                title: "Neither Urgent nor Important",
                color: Tint::Gray,
            },
        }
    }

    pub fn title(self) -> &'static str {
        self.info().title
    }

    /// Position in `ALL`, used to index partition storage
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> QuadrantKey {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> QuadrantKey {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for QuadrantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuadrantKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &Self::ALL, Self::as_str, "quadrant")
    }
}

/// Workflow stage of the goal board, in board order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalColumn {
    Backlog,
    Today,
    InProgress,
    Completed,
}

impl GoalColumn {
    pub const ALL: [GoalColumn; 4] = [
        GoalColumn::Backlog,
        GoalColumn::Today,
        GoalColumn::InProgress,
        GoalColumn::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GoalColumn::Backlog => "backlog",
            GoalColumn::Today => "today",
            GoalColumn::InProgress => "in_progress",
            GoalColumn::Completed => "completed",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GoalColumn::Backlog => "Backlog",
            GoalColumn::Today => "Today",
            GoalColumn::InProgress => "In Progress",
            GoalColumn::Completed => "Completed",
        }
    }

    pub fn color(self) -> Tint {
        match self {
            GoalColumn::Backlog => Tint::Gray,
            GoalColumn::Today => Tint::Blue,
            GoalColumn::InProgress => Tint::Yellow,
            GoalColumn::Completed => Tint::Green,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Columns a goal in this column can be moved to by the quick-move actions.
    ///
    /// Completed goals can only be sent back to the backlog; everything else
    /// can move to any column other than its own.
    pub fn move_targets(self) -> Vec<GoalColumn> {
        Self::ALL
            .into_iter()
            .filter(|&to| match to {
                GoalColumn::Backlog => self != GoalColumn::Backlog,
                GoalColumn::Today => self != GoalColumn::Today && self != GoalColumn::Completed,
                GoalColumn::InProgress => {
                    self != GoalColumn::InProgress && self != GoalColumn::Completed
                }
                GoalColumn::Completed => self != GoalColumn::Completed,
            })
            .collect()
    }
}

impl fmt::Display for GoalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalColumn {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &Self::ALL, Self::as_str, "column")
    }
}

fn parse_key<K: Copy>(
    s: &str,
    all: &[K],
    name: fn(K) -> &'static str,
    kind: &'static str,
) -> Result<K, KeyParseError> {
    let wanted = s.trim().to_ascii_lowercase();
    all.iter()
        .copied()
        .find(|k| name(*k) == wanted)
        .ok_or_else(|| {
            let names: Vec<&str> = all.iter().map(|k| name(*k)).collect();
            KeyParseError::new(kind, s, &names)
        })
}

pub(crate) fn cycle<K: Copy + PartialEq>(all: &[K], current: K, step: usize) -> K {
    let pos = all.iter().position(|k| *k == current).unwrap_or(0);
    all[(pos + step) % all.len()]
}
