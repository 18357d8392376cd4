//! Page dump errors.

use std::path::PathBuf;

use steamtop_core::AppId;
use steamtop_fetch::HttpError;
use thiserror::Error;

/// Failure while saving a storefront page to disk.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The dump client could not be built.
    #[error(transparent)]
    Client(#[from] HttpError),

    /// The request failed.
    #[error("App {app_id}: request failed: {source}")]
    Request {
        /// App being dumped.
        app_id: AppId,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The storefront answered with a non-success status.
    #[error("App {app_id}: HTTP {status}")]
    Status {
        /// App being dumped.
        app_id: AppId,
        /// HTTP status code.
        status: u16,
    },

    /// The output directory or file could not be written.
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
