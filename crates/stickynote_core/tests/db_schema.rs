use rusqlite::Connection;
use stickynote_core::db::migrations::latest_version;
use stickynote_core::db::{open_db, open_db_in_memory, DbError};
use stickynote_core::{KeyValueStore, SqliteKeyValueStore};

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn kv_columns(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(kv_entries);").unwrap();
    let names = stmt
        .query_map([], |row| row.get::<_, String>("name"))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    names
}

#[test]
fn fresh_memory_database_gets_kv_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), latest_version());
    assert_eq!(kv_columns(&conn), vec!["key", "value", "updated_at"]);
}

#[test]
fn reopening_file_keeps_stored_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    {
        let mut kv = SqliteKeyValueStore::open(&path).unwrap();
        kv.put("notes", b"[]").unwrap();
    }

    let kv = SqliteKeyValueStore::open(&path).unwrap();
    assert_eq!(user_version(kv.connection()), latest_version());
    assert_eq!(kv.get("notes").unwrap().as_deref(), Some(&b"[]"[..]));
}

#[test]
fn database_from_newer_build_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 7;")
        .unwrap();

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 7);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn refused_database_is_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 7;")
        .unwrap();

    assert!(SqliteKeyValueStore::open(&path).is_err());

    let conn = Connection::open(&path).unwrap();
    assert_eq!(user_version(&conn), 7);
    assert!(kv_columns(&conn).is_empty());
}
