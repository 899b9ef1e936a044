//! Named key-value slots.
//!
//! Each slot holds one opaque blob. Writers always replace the whole value.

use super::DbResult;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OptionalExtension};

/// Reads the bytes stored under `key`, or `None` when the slot is empty.
///
/// Both BLOB and TEXT values are accepted; any other storage class is an
/// error.
pub fn read_slot(conn: &Connection, key: &str) -> DbResult<Option<Vec<u8>>> {
    let value = conn
        .query_row("SELECT value FROM kv_store WHERE key = ?1;", [key], |row| {
            match row.get_ref(0)? {
                ValueRef::Blob(bytes) | ValueRef::Text(bytes) => Ok(bytes.to_vec()),
                other => Err(rusqlite::Error::InvalidColumnType(
                    0,
                    "value".to_string(),
                    other.data_type(),
                )),
            }
        })
        .optional()?;
    Ok(value)
}

/// Overwrites the blob stored under `key`.
pub fn write_slot(conn: &Connection, key: &str, value: &[u8]) -> DbResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
        params![key, value],
    )?;
    Ok(())
}
