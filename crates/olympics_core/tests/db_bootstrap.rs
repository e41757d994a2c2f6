use olympics_core::db::migrations::{latest_version, CATALOG_TABLES};
use olympics_core::db::{open_db, open_db_in_memory, DbError};
use olympics_core::{Catalog, Sport, SportRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_all_catalog_tables() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in CATALOG_TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn open_db_enables_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn catalog_wraps_bootstrapped_connection() {
    let catalog = Catalog::from_connection(open_db_in_memory().unwrap());
    let id = catalog.sports().insert(&Sport::new("Diving")).unwrap();

    assert_eq!(catalog.sports().get_by_name("Diving").unwrap(), Some(id));
    assert_eq!(schema_version(catalog.connection()), latest_version());
}

#[test]
fn reopening_same_file_keeps_rows_and_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("olympics.sqlite3");

    let catalog = Catalog::open(&path).unwrap();
    let id = catalog.sports().insert(&Sport::new("Fencing")).unwrap();
    drop(catalog);

    let reopened = Catalog::open(&path).unwrap();
    assert_eq!(schema_version(reopened.connection()), latest_version());
    let sport = reopened.sports().get_by_id(id).unwrap().unwrap();
    assert_eq!(sport.name, "Fencing");
}

#[test]
fn existing_tables_without_version_are_adopted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE sport (
            id_sport INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        INSERT INTO sport (name) VALUES ('Archery');",
    )
    .unwrap();
    drop(conn);

    let catalog = Catalog::open(&path).unwrap();
    assert_eq!(
        catalog.sports().list_names().unwrap(),
        vec!["Archery".to_string()]
    );
    assert_table_exists(catalog.connection(), "participation");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
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
