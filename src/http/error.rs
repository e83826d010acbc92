//! Error to HTTP response mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::KotobaError;

impl KotobaError {
    /// Map error to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        if self.is_bad_request() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for KotobaError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = if self.is_store_failure() {
            Json(json!({
                "error": "Database search error",
                "details": self.message(),
            }))
        } else {
            Json(json!({ "error": self.message() }))
        };

        (status, body).into_response()
    }
}
