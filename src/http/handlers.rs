//! HTTP request handlers for the Kotoba API
//!
//! Implements the liveness message, the health check and the
//! dictionary search endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::core::error::KotobaError;
use crate::core::services::Services;
use crate::core::types::{HealthResponse, SearchResult};

/// Separator used when flattening a field's values into one string
pub const FIELD_SEPARATOR: &str = ",";

/// Query string of `GET /search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// One search result as exposed over HTTP
///
/// Each field is the entry's distinct values joined by
/// `FIELD_SEPARATOR`, omitted when the entry has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultBody {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kanji: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readings: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meanings: Option<String>,
}

fn join_values(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(FIELD_SEPARATOR))
    }
}

impl From<SearchResult> for SearchResultBody {
    fn from(result: SearchResult) -> Self {
        Self {
            id: result.id,
            kanji: join_values(&result.kanji),
            readings: join_values(&result.readings),
            meanings: join_values(&result.meanings),
        }
    }
}

/// Liveness handler
pub async fn root_handler() -> &'static str {
    "Kotoba dictionary service is running"
}

/// Health check handler
///
/// Returns server status, version and the number of dictionary
/// entries. The count runs on the blocking pool since it shares the
/// store's connection lock with in-flight searches. A store failure
/// is reported as a 500.
pub async fn health_handler(
    State(services): State<Arc<Services>>,
) -> Result<impl IntoResponse, KotobaError> {
    let store = Arc::clone(&services.store);
    let entries = tokio::task::spawn_blocking(move || store.entry_count())
        .await
        .map_err(|join_error| {
            tracing::error!(error = %join_error, "Entry count task failed");
            KotobaError::StoreError(format!("Entry count task failed: {join_error}"))
        })??;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        entries,
    }))
}

/// Search handler
///
/// Classifies `q`, runs the two-pass search on the blocking pool
/// under the configured request timeout and returns the ranked
/// entries.
///
/// # Errors
///
/// - `MissingQuery`: `q` absent or blank
/// - `InvalidQuery`: `q` longer than the configured limit
/// - `StoreError`: store failure, task failure or timeout
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResultBody>>, KotobaError> {
    let query = match params.q {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Err(KotobaError::MissingQuery),
    };

    let timeout_sec = services.config.limits.request_timeout_sec;
    let search = Arc::clone(&services.search);
    let task = tokio::task::spawn_blocking(move || search.search(&query));

    let response = match tokio::time::timeout(Duration::from_secs(timeout_sec), task).await {
        Ok(Ok(result)) => result?,
        Ok(Err(join_error)) => {
            tracing::error!(error = %join_error, "Search task failed");
            return Err(KotobaError::StoreError(format!(
                "Search task failed: {join_error}"
            )));
        }
        Err(_) => {
            tracing::error!(timeout_sec = timeout_sec, "Search timed out");
            return Err(KotobaError::StoreError(format!(
                "Search timed out after {timeout_sec}s"
            )));
        }
    };

    Ok(Json(
        response
            .results
            .into_iter()
            .map(SearchResultBody::from)
            .collect(),
    ))
}
