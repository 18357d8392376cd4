//! Application state for the API server.

use std::sync::Arc;

use steamtop_fetch::ScrapePipeline;

/// Shared state handed to every route handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pipeline answering games queries.
    pub pipeline: Arc<ScrapePipeline>,

    /// Concurrency used when a request does not pass one.
    pub default_concurrency: u32,
}

impl AppState {
    /// Creates the state.
    pub fn new(pipeline: Arc<ScrapePipeline>, default_concurrency: u32) -> Self {
        Self {
            pipeline,
            default_concurrency,
        }
    }
}
