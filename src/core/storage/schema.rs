//! SQLite DDL for the dictionary store.
//!
//! The service never writes to the dictionary. The schema and the
//! single-entry insert below exist so tests, benchmarks and local
//! setups can provision a store with the layout the queries expect.

use crate::core::types::Field;
use rusqlite::{params, Connection};

/// Complete DDL for the dictionary database.
///
/// Uses `IF NOT EXISTS` throughout so `apply_schema` is idempotent.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY
);

CREATE TABLE IF NOT EXISTS kanji (
    entry_id INTEGER NOT NULL REFERENCES entries(id),
    kanji    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS readings (
    entry_id INTEGER NOT NULL REFERENCES entries(id),
    reading  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS meanings (
    entry_id INTEGER NOT NULL REFERENCES entries(id),
    meaning  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_kanji_entry    ON kanji(entry_id);
CREATE INDEX IF NOT EXISTS idx_readings_entry ON readings(entry_id);
CREATE INDEX IF NOT EXISTS idx_meanings_entry ON meanings(entry_id);

-- Full-text indexes, used only by the prefix fallback pass.
CREATE VIRTUAL TABLE IF NOT EXISTS kanji_fts    USING fts5(kanji,   entry_id UNINDEXED);
CREATE VIRTUAL TABLE IF NOT EXISTS readings_fts USING fts5(reading, entry_id UNINDEXED);
CREATE VIRTUAL TABLE IF NOT EXISTS meanings_fts USING fts5(meaning, entry_id UNINDEXED);
"#;

/// Table holding the rows of `field`
pub(crate) fn table(field: Field) -> &'static str {
    match field {
        Field::Kanji => "kanji",
        Field::Reading => "readings",
        Field::Meaning => "meanings",
    }
}

/// Value column of the field table and its FTS table
pub(crate) fn column(field: Field) -> &'static str {
    match field {
        Field::Kanji => "kanji",
        Field::Reading => "reading",
        Field::Meaning => "meaning",
    }
}

/// FTS5 table mirroring the field table
pub(crate) fn fts_table(field: Field) -> &'static str {
    match field {
        Field::Kanji => "kanji_fts",
        Field::Reading => "readings_fts",
        Field::Meaning => "meanings_fts",
    }
}

/// Apply the full schema to an open connection.
pub fn apply_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

/// Insert one entry with its field rows into both the plain and the
/// full-text tables.
pub fn insert_entry(
    conn: &Connection,
    id: i64,
    kanji: &[&str],
    readings: &[&str],
    meanings: &[&str],
) -> rusqlite::Result<()> {
    conn.execute("INSERT INTO entries (id) VALUES (?1)", params![id])?;

    for (field, values) in [
        (Field::Kanji, kanji),
        (Field::Reading, readings),
        (Field::Meaning, meanings),
    ] {
        let insert = format!(
            "INSERT INTO {} (entry_id, {}) VALUES (?1, ?2)",
            table(field),
            column(field)
        );
        let insert_fts = format!(
            "INSERT INTO {} ({}, entry_id) VALUES (?1, ?2)",
            fts_table(field),
            column(field)
        );
        for value in values {
            conn.execute(&insert, params![id, value])?;
            conn.execute(&insert_fts, params![value, id])?;
        }
    }

    Ok(())
}
