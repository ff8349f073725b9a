//! Chore repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - List, fetch, and insert `Chore` rows.
//! - Record chore assignments in the `RoommateChore` join table.
//!
//! # Invariants
//! - Chore and assignment ids come from storage (`RETURNING Id`), never
//!   from the caller.
//! - Inputs are never mutated; inserts return new records.
//! - Referential integrity of assignments is left to schema constraints.

use super::{with_connection, RepoResult};
use crate::db::ConnectionFactory;
use crate::model::chore::{Chore, ChoreId, NewChore, RoommateChore, RoommateChoreId};
use crate::model::roommate::RoommateId;
use log::debug;
use rusqlite::{named_params, Row};

const CHORE_SELECT_ALL_SQL: &str = "SELECT Id, Name FROM Chore";
const CHORE_SELECT_BY_ID_SQL: &str = "SELECT Name FROM Chore WHERE Id = @id";
const CHORE_INSERT_SQL: &str = "INSERT INTO Chore (Name) VALUES (@name) RETURNING Id";
const ROOMMATE_CHORE_INSERT_SQL: &str = "INSERT INTO RoommateChore (RoommateId, ChoreId)
    VALUES (@roommateId, @choreId)
    RETURNING Id";

/// Repository interface for chores and chore assignments.
pub trait ChoreRepository {
    /// Returns every chore in storage order.
    fn get_all(&self) -> RepoResult<Vec<Chore>>;
    /// Returns the chore with `id`, or `None` when no row matches.
    fn get_by_id(&self, id: ChoreId) -> RepoResult<Option<Chore>>;
    /// Persists `chore` and returns it with its storage-assigned id.
    fn insert(&self, chore: &NewChore) -> RepoResult<Chore>;
    /// Assigns a chore to a roommate and returns the new assignment.
    fn assign_chore(
        &self,
        roommate_id: RoommateId,
        chore_id: ChoreId,
    ) -> RepoResult<RoommateChore>;
}

/// SQLite-backed chore repository.
#[derive(Debug, Clone)]
pub struct SqliteChoreRepository {
    connections: ConnectionFactory,
}

impl SqliteChoreRepository {
    pub fn new(connections: ConnectionFactory) -> Self {
        Self { connections }
    }

    /// Builds a repository straight from a connection string.
    pub fn try_new(connection_string: &str) -> RepoResult<Self> {
        Ok(Self::new(ConnectionFactory::new(connection_string)?))
    }
}

impl ChoreRepository for SqliteChoreRepository {
    fn get_all(&self) -> RepoResult<Vec<Chore>> {
        with_connection(&self.connections, "chore_get_all", |conn| {
            let mut stmt = conn.prepare(CHORE_SELECT_ALL_SQL)?;
            let chores = stmt
                .query_map([], parse_chore_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            debug!("event=chore_get_all module=repo rows={}", chores.len());
            Ok(chores)
        })
    }

    fn get_by_id(&self, id: ChoreId) -> RepoResult<Option<Chore>> {
        with_connection(&self.connections, "chore_get_by_id", |conn| {
            let mut stmt = conn.prepare(CHORE_SELECT_BY_ID_SQL)?;
            let mut rows = stmt.query(named_params! { "@id": id })?;

            // Only the first row is consulted; `Id` is the primary key.
            if let Some(row) = rows.next()? {
                return Ok(Some(Chore {
                    id,
                    name: row.get(0)?,
                }));
            }

            Ok(None)
        })
    }

    fn insert(&self, chore: &NewChore) -> RepoResult<Chore> {
        with_connection(&self.connections, "chore_insert", |conn| {
            let id: ChoreId = conn.query_row(
                CHORE_INSERT_SQL,
                named_params! { "@name": chore.name },
                |row| row.get(0),
            )?;

            debug!("event=chore_insert module=repo chore_id={id}");
            Ok(chore.clone().into_chore(id))
        })
    }

    fn assign_chore(
        &self,
        roommate_id: RoommateId,
        chore_id: ChoreId,
    ) -> RepoResult<RoommateChore> {
        with_connection(&self.connections, "chore_assign", |conn| {
            let id: RoommateChoreId = conn.query_row(
                ROOMMATE_CHORE_INSERT_SQL,
                named_params! {
                    "@roommateId": roommate_id,
                    "@choreId": chore_id,
                },
                |row| row.get(0),
            )?;

            debug!(
                "event=chore_assign module=repo assignment_id={id} roommate_id={roommate_id} chore_id={chore_id}"
            );
            Ok(RoommateChore {
                id,
                roommate_id,
                chore_id,
            })
        })
    }
}

fn parse_chore_row(row: &Row<'_>) -> rusqlite::Result<Chore> {
    Ok(Chore {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
