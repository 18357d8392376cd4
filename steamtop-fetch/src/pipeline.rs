//! The games query: top list, then detail pages.

use std::sync::Arc;

use steamtop_core::{Elapsed, GameRecord, GamesQuery, GamesResponse};
use tracing::{info, instrument, warn};

use crate::coordinator::{Coordinator, FetchMode};
use crate::error::PipelineError;
use crate::source::{DetailSource, TopListSource};

/// Runs a games query end to end.
///
/// Reads `rows` ids from the top-list source, then fetches every detail
/// page through a [`Coordinator`] configured from the query.
#[derive(Clone)]
pub struct ScrapePipeline {
    top_list: Arc<dyn TopListSource>,
    details: Arc<dyn DetailSource>,
}

impl ScrapePipeline {
    /// Creates a pipeline from its two sources.
    pub fn new(top_list: Arc<dyn TopListSource>, details: Arc<dyn DetailSource>) -> Self {
        Self { top_list, details }
    }

    /// Fetches the records for a query.
    ///
    /// Out-of-range rows and concurrency are clamped.
    #[instrument(
        skip(self),
        fields(rows = query.rows, parallel = query.parallel, concurrency = query.concurrency)
    )]
    pub async fn run(&self, query: &GamesQuery) -> Result<Vec<GameRecord>, PipelineError> {
        let query = query.clamped();

        let ids = self.top_list.top_ids(query.rows as usize).await.map_err(|e| {
            warn!(source = self.top_list.id(), error = %e, "Top list fetch failed");
            e
        })?;
        info!(source = self.top_list.id(), count = ids.len(), "Fetched top list");

        let coordinator = Coordinator::new(FetchMode::from_flags(query.parallel, query.concurrency));
        let records = coordinator.fetch_all(Arc::clone(&self.details), &ids).await?;

        Ok(records)
    }

    /// Runs a query and wraps the records with the echoed parameters and
    /// elapsed time.
    pub async fn run_timed(&self, query: &GamesQuery) -> Result<GamesResponse, PipelineError> {
        let timer = Elapsed::start();
        let records = self.run(query).await;
        timer.stop();

        let records = records?;
        info!(rows = records.len(), elapsed = timer.seconds(), "Games query finished");
        Ok(GamesResponse::new(query, timer.seconds(), records))
    }
}

impl std::fmt::Debug for ScrapePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrapePipeline")
            .field("top_list", &self.top_list.id())
            .field("details", &self.details.id())
            .finish()
    }
}
