//! Room repository contracts and SQLite implementation.

use super::{with_connection, RepoResult};
use crate::db::ConnectionFactory;
use crate::model::room::{NewRoom, Room, RoomId};
use log::debug;
use rusqlite::{named_params, Row};

const ROOM_SELECT_ALL_SQL: &str = "SELECT Id, Name, MaxOccupancy FROM Room";
const ROOM_SELECT_BY_ID_SQL: &str = "SELECT Name, MaxOccupancy FROM Room WHERE Id = @id";
const ROOM_INSERT_SQL: &str = "INSERT INTO Room (Name, MaxOccupancy)
    VALUES (@name, @maxOccupancy)
    RETURNING Id";

/// Repository interface for rooms.
pub trait RoomRepository {
    fn get_all(&self) -> RepoResult<Vec<Room>>;
    fn get_by_id(&self, id: RoomId) -> RepoResult<Option<Room>>;
    fn insert(&self, room: &NewRoom) -> RepoResult<Room>;
}

/// SQLite-backed room repository.
#[derive(Debug, Clone)]
pub struct SqliteRoomRepository {
    connections: ConnectionFactory,
}

impl SqliteRoomRepository {
    pub fn new(connections: ConnectionFactory) -> Self {
        Self { connections }
    }

    pub fn try_new(connection_string: &str) -> RepoResult<Self> {
        Ok(Self::new(ConnectionFactory::new(connection_string)?))
    }
}

impl RoomRepository for SqliteRoomRepository {
    fn get_all(&self) -> RepoResult<Vec<Room>> {
        with_connection(&self.connections, "room_get_all", |conn| {
            let mut stmt = conn.prepare(ROOM_SELECT_ALL_SQL)?;
            let rooms = stmt
                .query_map([], parse_room_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            debug!("event=room_get_all module=repo rows={}", rooms.len());
            Ok(rooms)
        })
    }

    fn get_by_id(&self, id: RoomId) -> RepoResult<Option<Room>> {
        with_connection(&self.connections, "room_get_by_id", |conn| {
            let mut stmt = conn.prepare(ROOM_SELECT_BY_ID_SQL)?;
            let mut rows = stmt.query(named_params! { "@id": id })?;

            if let Some(row) = rows.next()? {
                return Ok(Some(Room {
                    id,
                    name: row.get(0)?,
                    max_occupancy: row.get(1)?,
                }));
            }

            Ok(None)
        })
    }

    fn insert(&self, room: &NewRoom) -> RepoResult<Room> {
        with_connection(&self.connections, "room_insert", |conn| {
            let id: RoomId = conn.query_row(
                ROOM_INSERT_SQL,
                named_params! {
                    "@name": room.name,
                    "@maxOccupancy": room.max_occupancy,
                },
                |row| row.get(0),
            )?;

            debug!("event=room_insert module=repo room_id={id}");
            Ok(room.clone().into_room(id))
        })
    }
}

fn parse_room_row(row: &Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        name: row.get(1)?,
        max_occupancy: row.get(2)?,
    })
}
