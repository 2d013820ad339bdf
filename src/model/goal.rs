use serde::{Deserialize, Serialize};

use super::category::CategoryKey;
use super::schedule::RecordId;

/// A card on the goal board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: RecordId,
    pub text: String,
    pub category: CategoryKey,
}

impl Goal {
    pub fn new(id: RecordId, text: impl Into<String>, category: CategoryKey) -> Self {
        Goal {
            id,
            text: text.into(),
            category,
        }
    }
}
