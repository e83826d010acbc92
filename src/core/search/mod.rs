//! Search module for script-aware dictionary lookup.
//!
//! This module picks a search strategy from the query's script
//! category, runs the substring pass and the full-text fallback
//! against a `DictionaryStore`, and ranks the merged candidates.

mod planner;
mod ranking;
mod strategy;

pub use planner::SearchService;
pub use ranking::{
    rank_candidates, rank_values, CandidateHits, CandidateSet, MatchScore, RankedEntry,
    RANK_EXACT, RANK_INCIDENTAL, RANK_SUBSTRING,
};
pub use strategy::SearchStrategy;

/// Hard cap on the number of results a search can return
pub const MAX_RESULTS: usize = 50;
