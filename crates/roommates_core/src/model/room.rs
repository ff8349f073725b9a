//! Room records.

use serde::{Deserialize, Serialize};

pub type RoomId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Number of roommates the room is meant to hold.
    pub max_occupancy: i64,
}

/// Room content before it has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    pub name: String,
    pub max_occupancy: i64,
}

impl NewRoom {
    pub fn new(name: impl Into<String>, max_occupancy: i64) -> Self {
        Self {
            name: name.into(),
            max_occupancy,
        }
    }

    pub fn into_room(self, id: RoomId) -> Room {
        Room {
            id,
            name: self.name,
            max_occupancy: self.max_occupancy,
        }
    }
}
