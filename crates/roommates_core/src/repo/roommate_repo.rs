//! Roommate repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Read `Roommate` rows into typed records.
//!
//! # Invariants
//! - `MoveInDate` is decoded as a naive calendar value, no timezone shift.
//!   Date-only text (`YYYY-MM-DD`) decodes to midnight of that day.
//! - A NULL `RoomId` decodes to `None`.

use super::{with_connection, RepoResult};
use crate::db::ConnectionFactory;
use crate::model::roommate::Roommate;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use rusqlite::types::Type;
use rusqlite::Row;

const MOVE_IN_DATE_COLUMN: usize = 4;
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

const ROOMMATE_SELECT_ALL_SQL: &str =
    "SELECT Id, FirstName, LastName, RentPortion, MoveInDate, RoomId FROM Roommate";

/// Repository interface for roommate reads.
pub trait RoommateRepository {
    fn get_all(&self) -> RepoResult<Vec<Roommate>>;
}

/// SQLite-backed roommate repository.
#[derive(Debug, Clone)]
pub struct SqliteRoommateRepository {
    connections: ConnectionFactory,
}

impl SqliteRoommateRepository {
    pub fn new(connections: ConnectionFactory) -> Self {
        Self { connections }
    }

    pub fn try_new(connection_string: &str) -> RepoResult<Self> {
        Ok(Self::new(ConnectionFactory::new(connection_string)?))
    }
}

impl RoommateRepository for SqliteRoommateRepository {
    fn get_all(&self) -> RepoResult<Vec<Roommate>> {
        with_connection(&self.connections, "roommate_get_all", |conn| {
            let mut stmt = conn.prepare(ROOMMATE_SELECT_ALL_SQL)?;
            let roommates = stmt
                .query_map([], parse_roommate_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            debug!("event=roommate_get_all module=repo rows={}", roommates.len());
            Ok(roommates)
        })
    }
}

fn parse_roommate_row(row: &Row<'_>) -> rusqlite::Result<Roommate> {
    Ok(Roommate {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        rent_portion: row.get(3)?,
        move_in_date: parse_move_in_date(row.get(MOVE_IN_DATE_COLUMN)?)?,
        room_id: row.get(5)?,
    })
}

// Rows are written outside this layer, so both full timestamps and bare
// calendar dates appear in `MoveInDate`.
fn parse_move_in_date(text: String) -> rusqlite::Result<NaiveDateTime> {
    let trimmed = text.trim();
    for format in DATE_TIME_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(value);
        }
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(MOVE_IN_DATE_COLUMN, Type::Text, Box::new(err))
        })
}
