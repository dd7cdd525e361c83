//! Error types for the HTTP populator.

use thiserror::Error;

/// Errors that can occur while uploading a single record.
#[derive(Error, Debug)]
pub enum HttpPopulatorError {
    /// Transport error from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request could not be sent for another reason.
    #[error("Request error: {0}")]
    Request(String),
}
