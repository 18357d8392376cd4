// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `SteamTop` Fetch
//!
//! HTTP plumbing and the bounded-concurrency fetch pipeline.
//!
//! ## HTTP
//!
//! - [`http::HttpClient`] - Client carrying the user agent and age-gate cookies
//! - [`context::FetchContext`] - Shared client plus endpoint settings
//!
//! ## Pipeline
//!
//! - [`source::TopListSource`] / [`source::DetailSource`] - Traits for the two upstreams
//! - [`coordinator::Coordinator`] - Runs detail fetches under a concurrency limit
//! - [`pipeline::ScrapePipeline`] - Top list, then detail pages
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use steamtop_core::GamesQuery;
//! use steamtop_fetch::{FetchContext, ScrapePipeline};
//!
//! let ctx = Arc::new(FetchContext::new()?);
//! let pipeline = ScrapePipeline::new(
//!     Arc::new(SteamSpyTopList::new(ctx.clone())),
//!     Arc::new(StorefrontFetcher::new(ctx)),
//! );
//! let response = pipeline.run_timed(&GamesQuery::new(10)).await?;
//! ```

pub mod context;
pub mod coordinator;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod source;

// Errors
pub use error::{FetchError, HttpError, PipelineError, UpstreamError};

// HTTP
pub use context::{FetchContext, FetchContextBuilder, FetchSettings};
pub use http::{AgeGate, HttpClient, HttpClientBuilder};

// Pipeline
pub use coordinator::{Coordinator, FetchMode};
pub use pipeline::ScrapePipeline;
pub use source::{DetailSource, TopListSource};
