//! SteamSpy top-list client.

use std::sync::Arc;

use async_trait::async_trait;
use steamtop_core::AppId;
use steamtop_fetch::{FetchContext, TopListSource, UpstreamError};
use tracing::{debug, instrument};

use super::parser::parse_top_ids;

/// Reads the "top 100 in two weeks" ranking from SteamSpy.
#[derive(Debug, Clone)]
pub struct SteamSpyTopList {
    ctx: Arc<FetchContext>,
}

impl SteamSpyTopList {
    /// Creates the source; the URL comes from the context settings.
    pub fn new(ctx: Arc<FetchContext>) -> Self {
        Self { ctx }
    }

    /// The endpoint queried.
    pub fn url(&self) -> &str {
        &self.ctx.settings.top_list_url
    }
}

#[async_trait]
impl TopListSource for SteamSpyTopList {
    fn id(&self) -> &str {
        "steamspy"
    }

    #[instrument(skip(self))]
    async fn top_ids(&self, count: usize) -> Result<Vec<AppId>, UpstreamError> {
        let response = self.ctx.http.get(self.url()).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(url = self.url(), bytes = body.len(), "Fetched top list");
        parse_top_ids(&body, count)
    }
}
