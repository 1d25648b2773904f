//! Error types for Outlay

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Category reports require both a start and an end date")]
    MissingDateRange,

    #[error("Unknown report type: {0}")]
    InvalidReportKind(String),

    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
