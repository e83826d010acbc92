//! Two-pass dictionary search.
//!
//! A query is classified, searched by substring over the fields its
//! strategy targets, and only if that finds nothing, searched again
//! with a full-text prefix query. Candidates are ranked, truncated
//! and hydrated from the store.

use crate::core::error::{KotobaError, Result};
use crate::core::script::classify;
use crate::core::search::ranking::{rank_candidates, CandidateSet};
use crate::core::search::strategy::SearchStrategy;
use crate::core::search::MAX_RESULTS;
use crate::core::storage::DictionaryStore;
use crate::core::types::{SearchPass, SearchResponse};
use std::sync::Arc;
use std::time::Instant;

/// Dictionary search service
pub struct SearchService {
    store: Arc<dyn DictionaryStore>,
    max_results: usize,
    max_query_length: usize,
}

impl SearchService {
    /// Create a new search service. `max_results` is capped at
    /// `MAX_RESULTS`.
    pub fn new(store: Arc<dyn DictionaryStore>, max_results: usize, max_query_length: usize) -> Self {
        Self {
            store,
            max_results: max_results.min(MAX_RESULTS),
            max_query_length,
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Execute a search query
    pub fn search(&self, query: &str) -> Result<SearchResponse> {
        self.search_with_limit(query, None)
    }

    /// Execute a search with an optional tighter result limit
    pub fn search_with_limit(&self, query: &str, limit: Option<usize>) -> Result<SearchResponse> {
        let start = Instant::now();

        if query.trim().is_empty() {
            return Err(KotobaError::MissingQuery);
        }

        let query_length = query.chars().count();
        if query_length > self.max_query_length {
            return Err(KotobaError::InvalidQuery(format!(
                "Query is {query_length} characters, maximum is {}",
                self.max_query_length
            )));
        }

        let category = classify(query);
        let strategy = SearchStrategy::for_category(category);
        tracing::debug!(query = %query, category = %category, "Classified query");

        let mut pass = SearchPass::Primary;
        let mut candidates = self.run_primary(strategy, query)?;
        if candidates.is_empty() {
            tracing::info!(query = %query, category = %category, "No substring hits, running prefix fallback");
            pass = SearchPass::Fallback;
            candidates = self.run_fallback(strategy, query)?;
        }

        let limit = limit.map_or(self.max_results, |l| l.min(self.max_results));
        let mut ranked = rank_candidates(strategy, query, &candidates);
        ranked.truncate(limit);

        let ids: Vec<i64> = ranked.iter().map(|entry| entry.id).collect();
        let results = self
            .store
            .load_entries(&ids)
            .inspect_err(|e| tracing::error!(query = %query, error = %e, "Failed to load entries"))?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();

        tracing::debug!(
            query = %query,
            pass = %pass,
            candidates = candidates.len(),
            returned = count,
            duration_ms = duration_ms,
            "Search completed"
        );

        Ok(SearchResponse {
            query: query.to_string(),
            category,
            pass,
            results,
            count,
            duration_ms,
        })
    }

    /// Substring containment over the strategy's fields
    fn run_primary(&self, strategy: SearchStrategy, query: &str) -> Result<CandidateSet> {
        strategy
            .collect(|field| self.store.find_containing(field, query))
            .inspect_err(|e| tracing::error!(query = %query, error = %e, "Substring search failed"))
    }

    /// Full-text prefix search over the strategy's fields
    fn run_fallback(&self, strategy: SearchStrategy, query: &str) -> Result<CandidateSet> {
        strategy
            .collect(|field| self.store.find_prefix(field, query))
            .inspect_err(|e| tracing::error!(query = %query, error = %e, "Prefix search failed"))
    }
}
