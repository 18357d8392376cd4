//! Storefront detail fetcher.

use std::sync::Arc;

use async_trait::async_trait;
use steamtop_core::{AppId, GameRecord};
use steamtop_fetch::{DetailSource, FetchContext, FetchError};
use tracing::{debug, instrument};

use super::parser::StorefrontParser;

/// Fetches `<store>/app/<id>?l=<language>` and parses it into a record.
#[derive(Debug, Clone)]
pub struct StorefrontFetcher {
    ctx: Arc<FetchContext>,
    parser: Arc<StorefrontParser>,
}

impl StorefrontFetcher {
    /// Creates a fetcher with the default parser.
    pub fn new(ctx: Arc<FetchContext>) -> Self {
        Self {
            ctx,
            parser: Arc::new(StorefrontParser::default()),
        }
    }

    /// Downloads the raw page body.
    pub async fn fetch_page(&self, app_id: AppId) -> Result<String, FetchError> {
        let url = self.ctx.settings.app_url(app_id);
        let language = self.ctx.settings.language.as_str();

        let response = self
            .ctx
            .http
            .get_with_query(&url, &[("l", language)])
            .await
            .map_err(|e| FetchError::from_reqwest(app_id, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                app_id,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(app_id, e))
    }
}

#[async_trait]
impl DetailSource for StorefrontFetcher {
    fn id(&self) -> &str {
        "storefront"
    }

    #[instrument(skip(self))]
    async fn fetch_record(&self, app_id: AppId) -> Result<GameRecord, FetchError> {
        let body = self.fetch_page(app_id).await?;
        debug!(bytes = body.len(), "Fetched storefront page");
        Ok(self.parser.parse(&body, app_id))
    }
}
