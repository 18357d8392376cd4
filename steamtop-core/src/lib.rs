// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `SteamTop` Core
//!
//! Core types shared by every `SteamTop` crate:
//!
//! - [`AppId`] - Positive catalog identifier
//! - [`GameRecord`] - One scraped storefront entry, immutable once built
//! - [`Price`] - Price label (`"24.50 EUR"`, `"Free To Play"`)
//! - [`GamesQuery`] / [`GamesResponse`] - The games operation's input and output
//! - [`Elapsed`] - Wall-clock timing of a scoped operation
//! - [`CoreError`] - Validation errors

pub mod error;
pub mod models;
pub mod timing;

pub use error::CoreError;

pub use models::{
    // Records
    AppId,
    GameFields,
    GameRecord,
    STORE_APP_URL,
    // Prices
    DEFAULT_CURRENCY,
    FREE_TO_PLAY,
    Price,
    // Query
    CONCURRENCY_RANGE,
    DEFAULT_CONCURRENCY,
    GamesQuery,
    GamesResponse,
    ROWS_RANGE,
};

pub use timing::Elapsed;
