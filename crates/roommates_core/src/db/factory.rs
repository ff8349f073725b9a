//! Per-call connection provider.
//!
//! # Responsibility
//! - Hold the connection string shared by repositories.
//! - Hand out a fresh bootstrapped connection for every operation.
//!
//! # Invariants
//! - The connection string is never blank.
//! - No connection is cached; callers own and drop what `open` returns.

use super::{open_db, DbError, DbResult};
use rusqlite::Connection;
use std::sync::Arc;

/// Opens SQLite connections from a file path or `file:` URI.
///
/// Cloning is cheap; clones share the same connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionFactory {
    connection_string: Arc<str>,
}

impl ConnectionFactory {
    /// Creates a factory for `connection_string`.
    ///
    /// # Errors
    /// - `DbError::EmptyConnectionString` when the string is empty or blank.
    pub fn new(connection_string: &str) -> DbResult<Self> {
        let trimmed = connection_string.trim();
        if trimmed.is_empty() {
            return Err(DbError::EmptyConnectionString);
        }

        Ok(Self {
            connection_string: Arc::from(trimmed),
        })
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Opens a new connection with pragmas and migrations applied.
    pub fn open(&self) -> DbResult<Connection> {
        open_db(&*self.connection_string)
    }
}

#[cfg(test)]
mod tests {
    use super::ConnectionFactory;
    use crate::db::DbError;

    #[test]
    fn blank_connection_string_is_rejected() {
        let err = ConnectionFactory::new("   ").expect_err("blank string must be rejected");
        assert!(matches!(err, DbError::EmptyConnectionString));
    }

    #[test]
    fn connection_string_is_trimmed() {
        let factory = ConnectionFactory::new("  roommates.db ").unwrap();
        assert_eq!(factory.connection_string(), "roommates.db");
    }
}
