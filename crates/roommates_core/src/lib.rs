//! Data-access layer for the roommates chore tracker.
//! Repositories open one SQLite connection per call and return plain records.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{ConnectionFactory, DbError, DbResult};
pub use logging::{
    default_log_level, init_logging, logging_status, LogConfig, LogLevel, LoggingError,
};
pub use model::chore::{Chore, ChoreId, NewChore, RoommateChore, RoommateChoreId};
pub use model::room::{NewRoom, Room, RoomId};
pub use model::roommate::{Roommate, RoommateId};
pub use repo::chore_repo::{ChoreRepository, SqliteChoreRepository};
pub use repo::room_repo::{RoomRepository, SqliteRoomRepository};
pub use repo::roommate_repo::{RoommateRepository, SqliteRoommateRepository};
pub use repo::{RepoError, RepoResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
