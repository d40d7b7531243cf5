//! Foundation Helpers Error Types
//!
//! Centralized error handling for the fallible helpers. The fuzzy matcher
//! never fails; it reports "no match" as `None`.

use thiserror::Error;

/// Central error type for foundation helpers
#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for helper operations
pub type HelperResult<T> = Result<T, HelperError>;
