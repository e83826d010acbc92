//! Core data types for the Kotoba dictionary service.
//!
//! This module defines the data structures shared between the
//! store, the search planner and the adapters: dictionary fields,
//! store hits, search results and responses.

use crate::core::script::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three per-entry field tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Kanji,
    Reading,
    Meaning,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Kanji, Field::Reading, Field::Meaning];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Kanji => "kanji",
            Field::Reading => "reading",
            Field::Meaning => "meaning",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field row that satisfied a store lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHit {
    /// Owning entry
    pub entry_id: i64,

    /// Raw value of the matched row
    pub value: String,
}

impl FieldHit {
    pub fn new(entry_id: i64, value: impl Into<String>) -> Self {
        Self {
            entry_id,
            value: value.into(),
        }
    }
}

/// Aggregated view over one dictionary entry
///
/// Each string list holds distinct values in the order the store
/// first returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Entry identifier
    pub id: i64,

    /// Written forms
    pub kanji: Vec<String>,

    /// Kana readings
    pub readings: Vec<String>,

    /// English glosses
    pub meanings: Vec<String>,
}

impl SearchResult {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            kanji: Vec::new(),
            readings: Vec::new(),
            meanings: Vec::new(),
        }
    }

    /// Append a value to the list for `field`, skipping duplicates
    pub fn push_distinct(&mut self, field: Field, value: String) {
        let values = match field {
            Field::Kanji => &mut self.kanji,
            Field::Reading => &mut self.readings,
            Field::Meaning => &mut self.meanings,
        };
        if !values.contains(&value) {
            values.push(value);
        }
    }
}

/// Which search pass produced a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPass {
    /// Substring containment over the target fields
    Primary,
    /// Full-text prefix search, run only when the primary pass is empty
    Fallback,
}

impl fmt::Display for SearchPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchPass::Primary => f.write_str("primary"),
            SearchPass::Fallback => f.write_str("fallback"),
        }
    }
}

/// Response from a dictionary search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Raw query as received
    pub query: String,

    /// Script category the query was classified as
    pub category: Category,

    /// Pass whose hits were returned
    pub pass: SearchPass,

    /// Ranked results, best first
    pub results: Vec<SearchResult>,

    /// Number of results
    pub count: usize,

    /// Search duration in milliseconds
    pub duration_ms: u64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub entries: u64,
}
