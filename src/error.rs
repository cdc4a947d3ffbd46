//! Error types for the bobuild client
//!
//! Every public operation returns `Result<T, Error>` where Error is defined here.
//! Nothing in the library retries or recovers locally; errors go straight back
//! to the caller.

use thiserror::Error;

/// The main error type for the bobuild client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Request Construction Errors
    // ============================================================================
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("API call failed with status: {status} {reason}{}", display_body(.body))]
    HttpStatus {
        status: u16,
        reason: String,
        body: Option<String>,
    },

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Pagination stalled on page {page}: {fetched} of {total} items received")]
    Pagination { page: u32, fetched: usize, total: usize },

    #[error("Request rejected by the API (success: {success}, error: {error})")]
    Rejected { success: bool, error: bool },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, reason: impl Into<String>, body: Option<String>) -> Self {
        Self::HttpStatus {
            status,
            reason: reason.into(),
            body,
        }
    }

    /// HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the server answered 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn display_body(body: &Option<String>) -> String {
    body.as_deref().map(|b| format!(" {b}")).unwrap_or_default()
}

/// Result type alias for the bobuild client
pub type Result<T> = std::result::Result<T, Error>;
