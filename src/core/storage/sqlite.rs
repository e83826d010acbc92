//! SQLite-backed dictionary store.

use crate::core::error::{KotobaError, Result};
use crate::core::storage::schema::{column, fts_table, table};
use crate::core::storage::DictionaryStore;
use crate::core::types::{Field, FieldHit, SearchResult};
use rusqlite::{params, params_from_iter, Connection, OpenFlags};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Read-only dictionary store over a single SQLite connection
///
/// The connection is opened once and shared behind a `Mutex`; the
/// dataset is never written, so serializing statements is the only
/// coordination needed.
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open an existing dictionary database read-only
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KotobaError::StoreError(format!(
                "Dictionary database not found: {}",
                path.display()
            )));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        tracing::info!("Opened dictionary database at {:?}", path);

        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Mutex::new(conn),
        })
    }

    /// Wrap an already provisioned connection (tests, in-memory stores)
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            path: None,
            conn: Mutex::new(conn),
        }
    }

    /// Path of the database file, if opened from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| KotobaError::StoreError("Dictionary connection poisoned".to_string()))
    }

    fn collect_hits(conn: &Connection, sql: &str, param: &str) -> Result<Vec<FieldHit>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params![param], |row| {
            Ok(FieldHit {
                entry_id: row.get(0)?,
                value: row.get(1)?,
            })
        })?;

        let mut hits = Vec::new();
        for row in rows {
            hits.push(row?);
        }
        Ok(hits)
    }
}

impl DictionaryStore for SqliteStore {
    fn find_containing(&self, field: Field, query: &str) -> Result<Vec<FieldHit>> {
        // instr() is case-sensitive, unlike LIKE
        let sql = format!(
            "SELECT entry_id, {col} FROM {table} WHERE instr({col}, ?1) > 0 \
             ORDER BY entry_id, rowid",
            col = column(field),
            table = table(field),
        );

        let conn = self.lock()?;
        let hits = Self::collect_hits(&conn, &sql, query)?;
        tracing::debug!(field = %field, hits = hits.len(), "Substring lookup");
        Ok(hits)
    }

    fn find_prefix(&self, field: Field, query: &str) -> Result<Vec<FieldHit>> {
        let sql = format!(
            "SELECT entry_id, {col} FROM {fts} WHERE {fts} MATCH ?1 ORDER BY entry_id, rowid",
            col = column(field),
            fts = fts_table(field),
        );
        let pattern = format!("{query}*");

        let conn = self.lock()?;
        let hits = Self::collect_hits(&conn, &sql, &pattern)?;
        tracing::debug!(field = %field, pattern = %pattern, hits = hits.len(), "Prefix lookup");
        Ok(hits)
    }

    fn load_entries(&self, ids: &[i64]) -> Result<Vec<SearchResult>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut results: Vec<SearchResult> = ids.iter().map(|&id| SearchResult::new(id)).collect();
        let positions: HashMap<i64, usize> =
            ids.iter().enumerate().map(|(pos, &id)| (id, pos)).collect();
        let placeholders = vec!["?"; ids.len()].join(", ");

        let conn = self.lock()?;
        for field in Field::ALL {
            let sql = format!(
                "SELECT entry_id, {col} FROM {table} WHERE entry_id IN ({placeholders}) \
                 ORDER BY entry_id, rowid",
                col = column(field),
                table = table(field),
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(ids.iter()), |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?;

            for row in rows {
                let (entry_id, value) = row?;
                if let Some(&pos) = positions.get(&entry_id) {
                    results[pos].push_distinct(field, value);
                }
            }
        }

        Ok(results)
    }

    fn entry_count(&self) -> Result<u64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
