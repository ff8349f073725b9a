//! Plain data records for the roommates domain.
//!
//! # Responsibility
//! - Define the records repositories decode rows into.
//! - Separate "not yet persisted" inputs from stored records.
//!
//! # Invariants
//! - Ids are assigned by storage; input types (`NewChore`, `NewRoom`) carry none.

pub mod chore;
pub mod room;
pub mod roommate;
