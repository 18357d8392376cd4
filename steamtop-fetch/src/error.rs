//! Fetch error types.

use steamtop_core::AppId;
use thiserror::Error;

// ============================================================================
// Fetch Error
// ============================================================================

/// Failure while fetching one storefront page.
///
/// Always carries the app id whose page failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure.
    #[error("App {app_id}: request failed: {source}")]
    Request {
        /// App whose page failed.
        app_id: AppId,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The per-request deadline passed.
    #[error("App {app_id}: request timed out")]
    Timeout {
        /// App whose page failed.
        app_id: AppId,
    },

    /// The storefront answered with a non-success status.
    #[error("App {app_id}: HTTP {status}")]
    Status {
        /// App whose page failed.
        app_id: AppId,
        /// HTTP status code.
        status: u16,
    },

    /// The task fetching the page did not finish normally.
    #[error("App {app_id}: fetch task aborted: {reason}")]
    Aborted {
        /// App whose page failed.
        app_id: AppId,
        /// Why the task stopped.
        reason: String,
    },
}

impl FetchError {
    /// Classifies a client error for an app, separating timeouts.
    pub fn from_reqwest(app_id: AppId, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { app_id }
        } else {
            Self::Request { app_id, source }
        }
    }

    /// Creates an aborted-task error.
    pub fn aborted(app_id: AppId, reason: impl Into<String>) -> Self {
        Self::Aborted {
            app_id,
            reason: reason.into(),
        }
    }

    /// The app whose page failed.
    pub fn app_id(&self) -> AppId {
        match self {
            Self::Request { app_id, .. }
            | Self::Timeout { app_id }
            | Self::Status { app_id, .. }
            | Self::Aborted { app_id, .. } => *app_id,
        }
    }
}

// ============================================================================
// Upstream Error
// ============================================================================

/// Failure while reading the ranked top list.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport-level failure.
    #[error("Top list request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The per-request deadline passed.
    #[error("Top list request timed out")]
    Timeout,

    /// Non-success status from the aggregation endpoint.
    #[error("Top list returned HTTP {0}")]
    Status(u16),

    /// Body was JSON but not the expected shape.
    #[error("Invalid top list response: {0}")]
    InvalidResponse(String),

    /// Body was not JSON.
    #[error("Top list JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

// ============================================================================
// Pipeline Error
// ============================================================================

/// Failure of a whole games query.
///
/// Displays as the underlying cause so it can be surfaced verbatim.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The top list could not be read.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// A detail page could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

// ============================================================================
// HTTP Error
// ============================================================================

/// Errors building the HTTP client or its settings.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    /// A static header value is not valid.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// A configured URL does not parse.
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl {
        /// The configured value.
        url: String,
        /// Parser message.
        reason: String,
    },
}
