//! Serve command - run the HTTP API.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use steamtop_fetch::FetchContext;
use steamtop_providers::steam_pipeline;
use tracing::info;

use crate::api::{AppState, start_api_server};
use crate::config::Config;

/// Arguments for the serve command.
#[derive(Args, Default)]
pub struct ServeArgs {
    /// Address to listen on (overrides `server.bind_address`).
    #[arg(long, short)]
    pub bind: Option<SocketAddr>,
}

/// Runs the serve command.
pub async fn run(args: &ServeArgs, config: &Config) -> Result<()> {
    let ctx = FetchContext::with_settings(config.fetch_settings())?;
    let pipeline = steam_pipeline(Arc::new(ctx));
    let state = AppState::new(Arc::new(pipeline), config.query.default_concurrency);

    let bind_address = args.bind.unwrap_or(config.server.bind_address);
    info!(address = %bind_address, "Starting API server");
    start_api_server(state, bind_address).await
}
