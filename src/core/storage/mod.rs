//! Storage layer for the dictionary dataset.
//!
//! The search planner only talks to the `DictionaryStore` trait. The
//! shipped implementation, `SqliteStore`, reads a prebuilt SQLite
//! database with FTS5 tables.
//!
//! # Database Layout
//!
//! ```text
//! entries(id)
//! ├── kanji(entry_id, kanji)        kanji_fts(kanji, entry_id)
//! ├── readings(entry_id, reading)   readings_fts(reading, entry_id)
//! └── meanings(entry_id, meaning)   meanings_fts(meaning, entry_id)
//! ```

pub mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::core::error::Result;
use crate::core::types::{Field, FieldHit, SearchResult};

/// Query interface of the dictionary data store
///
/// Implementations must allow concurrent read-only use from many
/// request handlers at once.
pub trait DictionaryStore: Send + Sync {
    /// Rows of `field` whose value contains `query` (case-sensitive)
    fn find_containing(&self, field: Field, query: &str) -> Result<Vec<FieldHit>>;

    /// Rows of `field` whose full-text tokens match `query` as a prefix
    ///
    /// The query is handed to the full-text engine verbatim with a
    /// trailing wildcard, so engine syntax errors surface as
    /// `StoreError`.
    fn find_prefix(&self, field: Field, query: &str) -> Result<Vec<FieldHit>>;

    /// Aggregate the distinct kanji, readings and meanings of each id
    ///
    /// Results come back in the order of `ids`.
    fn load_entries(&self, ids: &[i64]) -> Result<Vec<SearchResult>>;

    /// Number of entries in the dataset
    fn entry_count(&self) -> Result<u64>;
}
