// errors.rs
use thiserror::Error;

/// Failures while fetching or decoding the listing catalog.
/// None of these are retried; the page simply stays empty.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Catalog request returned HTTP {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(String),

    #[error("JSON parse error: {0}")]
    Parse(String),
}

/// Failures of the OTA feed normalization. Every variant is fatal for the invocation.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Failed to read feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hotel #{index}: missing {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("Hotel #{index}: invalid {field}: {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}
