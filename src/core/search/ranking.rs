//! Candidate collection and match-quality ranking.

use crate::core::search::strategy::SearchStrategy;
use crate::core::types::{Field, FieldHit};
use std::collections::BTreeMap;

/// Ranked field equals the query
pub const RANK_EXACT: u8 = 1;

/// Ranked field contains the query
pub const RANK_SUBSTRING: u8 = 2;

/// Entry matched through some other field or token
pub const RANK_INCIDENTAL: u8 = 3;

/// Hit values of one candidate entry, grouped by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateHits {
    kanji: Vec<String>,
    readings: Vec<String>,
    meanings: Vec<String>,
}

impl CandidateHits {
    pub fn values(&self, field: Field) -> &[String] {
        match field {
            Field::Kanji => &self.kanji,
            Field::Reading => &self.readings,
            Field::Meaning => &self.meanings,
        }
    }

    fn push(&mut self, field: Field, value: String) {
        match field {
            Field::Kanji => self.kanji.push(value),
            Field::Reading => self.readings.push(value),
            Field::Meaning => self.meanings.push(value),
        }
    }
}

/// Candidate entries of one search pass, keyed by entry id
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    entries: BTreeMap<i64, CandidateHits>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, hit: FieldHit) {
        self.entries
            .entry(hit.entry_id)
            .or_default()
            .push(field, hit.value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, entry_id: i64) -> Option<&CandidateHits> {
        self.entries.get(&entry_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &CandidateHits)> {
        self.entries.iter().map(|(&id, hits)| (id, hits))
    }
}

/// Sort key of a candidate: lower is better on both components
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchScore {
    pub rank: u8,

    /// Char length of the shortest hit in the tie-break field
    pub length: usize,
}

/// Candidate entry with its computed score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry {
    pub id: i64,
    pub score: MatchScore,
}

/// Rank a list of field values against the raw query
pub fn rank_values(query: &str, values: &[String]) -> u8 {
    if values.iter().any(|v| v == query) {
        RANK_EXACT
    } else if values.iter().any(|v| v.contains(query)) {
        RANK_SUBSTRING
    } else {
        RANK_INCIDENTAL
    }
}

/// Score every candidate and order them best first.
///
/// Ordering is by rank, then tie-break length, then entry id so the
/// output is deterministic.
pub fn rank_candidates(
    strategy: SearchStrategy,
    query: &str,
    candidates: &CandidateSet,
) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = candidates
        .iter()
        .map(|(id, hits)| RankedEntry {
            id,
            score: strategy.score(query, hits),
        })
        .collect();

    ranked.sort_by_key(|entry| (entry.score, entry.id));
    ranked
}
