//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define per-entity data access contracts.
//! - Keep SQL text and row decoding inside the persistence boundary.
//!
//! # Invariants
//! - Every operation opens its own connection and drops it before returning.
//! - One SQL statement per operation; no transactions span operations.
//! - Driver errors are carried unchanged as the error `source()`.

use crate::db::{ConnectionFactory, DbError};
use log::{debug, error};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub mod chore_repo;
pub mod room_repo;
pub mod roommate_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl RepoError {
    /// Returns the underlying driver error, if this failure came from SQLite.
    pub fn sqlite_error(&self) -> Option<&rusqlite::Error> {
        match self {
            Self::Db(DbError::Sqlite(err)) => Some(err),
            Self::Db(_) => None,
        }
    }
}

/// Opens a connection, runs `op` against it, and drops the connection.
///
/// Emits one `event=<event> module=repo` line with status and duration.
pub(crate) fn with_connection<T>(
    connections: &ConnectionFactory,
    event: &str,
    op: impl FnOnce(&Connection) -> RepoResult<T>,
) -> RepoResult<T> {
    let started_at = Instant::now();
    let result = connections
        .open()
        .map_err(RepoError::from)
        .and_then(|conn| op(&conn));

    match &result {
        Ok(_) => debug!(
            "event={} module=repo status=ok duration_ms={}",
            event,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event={} module=repo status=error duration_ms={} error={}",
            event,
            started_at.elapsed().as_millis(),
            err
        ),
    }

    result
}
