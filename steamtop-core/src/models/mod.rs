//! Domain models for `SteamTop`.
//!
//! ## Submodules
//!
//! - [`record`] - App ids and game records
//! - [`price`] - Price labels
//! - [`query`] - Query parameters and the response envelope

mod price;
mod query;
mod record;

pub use price::{DEFAULT_CURRENCY, FREE_TO_PLAY, Price};
pub use query::{CONCURRENCY_RANGE, DEFAULT_CONCURRENCY, GamesQuery, GamesResponse, ROWS_RANGE};
pub use record::{AppId, GameFields, GameRecord, STORE_APP_URL};

#[cfg(test)]
mod serde_tests;
