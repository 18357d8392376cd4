//! Query parameters and response envelope for the games operation.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::record::GameRecord;
use crate::error::CoreError;

/// Accepted number of rows per query.
pub const ROWS_RANGE: RangeInclusive<u32> = 1..=100;

/// Accepted concurrency limits.
pub const CONCURRENCY_RANGE: RangeInclusive<u32> = 1..=50;

/// Concurrency used when the caller does not pass one.
pub const DEFAULT_CONCURRENCY: u32 = 20;

fn default_parallel() -> bool {
    true
}

fn default_concurrency() -> u32 {
    DEFAULT_CONCURRENCY
}

// ============================================================================
// Games Query
// ============================================================================

/// Parameters of one games query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesQuery {
    /// How many top titles to fetch (1-100).
    pub rows: u32,
    /// Fetch detail pages concurrently.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Maximum detail pages in flight (1-50). Ignored in serial mode.
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,
}

impl GamesQuery {
    /// Creates a parallel query with the default concurrency.
    pub fn new(rows: u32) -> Self {
        Self {
            rows,
            parallel: true,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Switches to serial mode.
    pub fn serial(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Sets the concurrency limit.
    pub fn with_concurrency(mut self, concurrency: u32) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Checks that rows and concurrency are within their accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidQuery` naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !ROWS_RANGE.contains(&self.rows) {
            return Err(CoreError::InvalidQuery(format!(
                "rows must be between {} and {}, got {}",
                ROWS_RANGE.start(),
                ROWS_RANGE.end(),
                self.rows
            )));
        }
        if !CONCURRENCY_RANGE.contains(&self.concurrency) {
            return Err(CoreError::InvalidQuery(format!(
                "concurrency must be between {} and {}, got {}",
                CONCURRENCY_RANGE.start(),
                CONCURRENCY_RANGE.end(),
                self.concurrency
            )));
        }
        Ok(())
    }

    /// Returns a copy with rows and concurrency clamped into range.
    pub fn clamped(&self) -> Self {
        Self {
            rows: self.rows.clamp(*ROWS_RANGE.start(), *ROWS_RANGE.end()),
            parallel: self.parallel,
            concurrency: self
                .concurrency
                .clamp(*CONCURRENCY_RANGE.start(), *CONCURRENCY_RANGE.end()),
        }
    }
}

// ============================================================================
// Games Response
// ============================================================================

/// Result of a games query, with the echoed parameters and timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesResponse {
    /// Number of records returned.
    pub rows: usize,
    /// Echo of the parallel flag.
    pub parallel: bool,
    /// Echo of the concurrency limit.
    pub concurrency: u32,
    /// Wall-clock seconds, rounded to three decimals.
    pub elapsed: f64,
    /// Records in ranking order.
    pub data: Vec<GameRecord>,
}

impl GamesResponse {
    /// Builds the response for a completed query.
    pub fn new(query: &GamesQuery, elapsed: f64, data: Vec<GameRecord>) -> Self {
        Self {
            rows: data.len(),
            parallel: query.parallel,
            concurrency: query.concurrency,
            elapsed,
            data,
        }
    }
}
