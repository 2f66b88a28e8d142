//! Domain errors. Used by ports and adapters.
//!
//! Adapters map infrastructure errors into these. Use cases never return them
//! to their callers; they are turned into error outcomes instead.

use thiserror::Error;

/// Failure classified by the Kudoly API (non-2xx status or `success: false`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status; 200 when the backend flagged failure in a 2xx body.
    pub status: u16,
    /// Machine-readable code, `API_ERROR` when the backend gave none.
    pub code: String,
    pub message: String,
    /// Valid project names the backend suggests instead.
    pub available_projects: Option<Vec<String>>,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED" || self.status == 401
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Failed to decode API response: {0}")]
    Decode(String),

    /// Tool server I/O (stdin/stdout) failed.
    #[error("Protocol error: {0}")]
    Protocol(String),
}
