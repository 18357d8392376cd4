// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `SteamTop` Providers
//!
//! Concrete sources for the `SteamTop` pipeline.
//!
//! | Source | Trait | Upstream |
//! |--------|-------|----------|
//! | [`SteamSpyTopList`] | `TopListSource` | `steamspy.com/api.php?request=top100in2weeks` |
//! | [`StorefrontFetcher`] | `DetailSource` | `store.steampowered.com/app/<id>` |
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use steamtop_core::GamesQuery;
//! use steamtop_fetch::FetchContext;
//! use steamtop_providers::steam_pipeline;
//!
//! let ctx = Arc::new(FetchContext::new()?);
//! let response = steam_pipeline(ctx).run_timed(&GamesQuery::new(10)).await?;
//! ```

pub mod steamspy;
pub mod storefront;

#[cfg(test)]
mod parser_edge_tests;

use std::sync::Arc;

use steamtop_fetch::{FetchContext, ScrapePipeline};

pub use steamspy::{SteamSpyTopList, parse_top_ids};
pub use storefront::{
    DumpError, PageDumper, PriceExtractor, PriceTier, StorefrontFetcher, StorefrontParser,
    parse_record,
};

/// Builds the SteamSpy + storefront pipeline over one shared context.
pub fn steam_pipeline(ctx: Arc<FetchContext>) -> ScrapePipeline {
    ScrapePipeline::new(
        Arc::new(SteamSpyTopList::new(Arc::clone(&ctx))),
        Arc::new(StorefrontFetcher::new(ctx)),
    )
}
