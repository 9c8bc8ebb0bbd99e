//! Error types for the impact service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for impact operations
pub type Result<T> = std::result::Result<T, Error>;

/// Impact service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed request field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Catalog source or catalog file missing/corrupt
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Narrative collaborator unreachable, misconfigured or malformed
    #[error("Analysis unavailable: {0}")]
    AnalysisUnavailable(String),

    /// A single raw catalog record could not be used
    #[error("Record '{id}' skipped: {reason}")]
    RecordSkipped { id: String, reason: String },

    /// Lookup miss
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a data unavailable error
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable(message.into())
    }

    /// Create an analysis unavailable error
    pub fn analysis_unavailable(message: impl Into<String>) -> Self {
        Self::AnalysisUnavailable(message.into())
    }

    /// Create a skipped record error
    pub fn record_skipped(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RecordSkipped {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "invalid_input", msg.clone()),
            Error::DataUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "data_unavailable", msg.clone())
            }
            Error::AnalysisUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "analysis_unavailable",
                msg.clone(),
            ),
            Error::RecordSkipped { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "record_skipped",
                self.to_string(),
            ),
            Error::NotFound(what) => (StatusCode::NOT_FOUND, "not_found", format!("Not found: {}", what)),
            Error::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error", msg.clone()),
            Error::Io(err) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error", err.to_string()),
            Error::Json(err) => (StatusCode::BAD_REQUEST, "json_error", err.to_string()),
            Error::Http(err) => (StatusCode::BAD_GATEWAY, "http_error", err.to_string()),
            Error::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        if status.is_server_error() {
            tracing::warn!("{} ({}): {}", status, error_type, message);
        }

        let body = Json(json!({
            "error": message,
            "error_type": error_type,
        }));

        (status, body).into_response()
    }
}
