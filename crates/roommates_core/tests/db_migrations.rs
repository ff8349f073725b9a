use roommates_core::db::migrations::latest_version;
use roommates_core::db::{open_db, open_db_in_memory, ConnectionFactory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "Room");
    assert_table_exists(&conn, "Roommate");
    assert_table_exists(&conn, "Chore");
    assert_table_exists(&conn, "RoommateChore");
}

#[test]
fn opened_connections_enforce_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roommates.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute("INSERT INTO Chore (Name) VALUES ('Dishes');", [])
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let chores: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM Chore;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(chores, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn factory_opens_fresh_bootstrapped_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("factory.db");
    let factory = ConnectionFactory::new(path.to_str().unwrap()).unwrap();

    let conn = factory.open().unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    drop(conn);

    assert!(path.exists());
    let again = factory.open().unwrap();
    assert_table_exists(&again, "Chore");
}

#[test]
fn factory_rejects_empty_connection_string() {
    let err = ConnectionFactory::new("").unwrap_err();
    assert!(matches!(err, DbError::EmptyConnectionString));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
