use serde::{Deserialize, Serialize};

use super::schedule::RecordId;

/// An entry in one quadrant of the priority matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: RecordId, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
