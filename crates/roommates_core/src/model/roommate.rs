//! Roommate records.
//!
//! # Invariants
//! - `move_in_date` is a calendar value without timezone; it round-trips
//!   through storage unchanged.
//! - `room_id` is `None` when the roommate has no room on record.

use super::room::RoomId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type RoommateId = i64;

/// A person sharing the household, with rent and move-in metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roommate {
    pub id: RoommateId,
    pub first_name: String,
    pub last_name: String,
    /// Share of the rent, in whole currency units.
    pub rent_portion: i64,
    pub move_in_date: NaiveDateTime,
    pub room_id: Option<RoomId>,
}
