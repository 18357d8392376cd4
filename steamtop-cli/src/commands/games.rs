//! Games command - run one query and print the result.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use steamtop_core::GamesQuery;
use steamtop_fetch::FetchContext;
use steamtop_providers::steam_pipeline;
use tracing::info;

use crate::config::Config;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the games command.
#[derive(Args)]
pub struct GamesArgs {
    /// How many top titles to fetch (1-100).
    #[arg(long, short)]
    pub rows: u32,

    /// Fetch detail pages one at a time.
    #[arg(long)]
    pub serial: bool,

    /// Maximum detail pages in flight (1-50).
    #[arg(long, short)]
    pub concurrency: Option<u32>,
}

impl GamesArgs {
    /// Builds the query, falling back to the configured concurrency.
    pub fn to_query(&self, default_concurrency: u32) -> GamesQuery {
        let query = GamesQuery::new(self.rows)
            .with_concurrency(self.concurrency.unwrap_or(default_concurrency));
        if self.serial { query.serial() } else { query }
    }
}

/// Runs the games command.
pub async fn run(args: &GamesArgs, cli: &Cli, config: &Config) -> Result<()> {
    let query = args.to_query(config.query.default_concurrency);
    query.validate()?;

    info!(rows = query.rows, parallel = query.parallel, "Running games query");
    let ctx = FetchContext::with_settings(config.fetch_settings())?;
    let response = steam_pipeline(Arc::new(ctx)).run_timed(&query).await?;

    let out = match cli.format {
        OutputFormat::Json => JsonFormatter::new(cli.pretty).format(&response)?,
        OutputFormat::Text => TextFormatter::new(!cli.no_color).format_games(&response),
    };
    println!("{out}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query() {
        let args = GamesArgs {
            rows: 10,
            serial: false,
            concurrency: None,
        };
        let query = args.to_query(8);
        assert_eq!(query.rows, 10);
        assert!(query.parallel);
        assert_eq!(query.concurrency, 8);

        let args = GamesArgs {
            rows: 10,
            serial: true,
            concurrency: Some(3),
        };
        let query = args.to_query(8);
        assert!(!query.parallel);
        assert_eq!(query.concurrency, 3);
    }
}
