//! Chore and chore-assignment records.

use super::roommate::RoommateId;
use serde::{Deserialize, Serialize};

pub type ChoreId = i64;
pub type RoommateChoreId = i64;

/// A household task with a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    /// Storage-assigned identifier.
    pub id: ChoreId,
    pub name: String,
}

/// Chore content before it has been persisted.
///
/// Names are not validated: empty and duplicate names are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChore {
    pub name: String,
}

impl NewChore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Combines this input with the id storage assigned to it.
    pub fn into_chore(self, id: ChoreId) -> Chore {
        Chore {
            id,
            name: self.name,
        }
    }
}

/// Assignment of one chore to one roommate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoommateChore {
    pub id: RoommateChoreId,
    pub roommate_id: RoommateId,
    pub chore_id: ChoreId,
}
