//! Core error types for `SteamTop`.

use thiserror::Error;

/// Core error type for `SteamTop` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Query parameters out of their accepted range.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Identifier that is not a positive integer.
    #[error("Invalid app id: {0}")]
    InvalidAppId(String),
}
