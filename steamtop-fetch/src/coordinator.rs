//! Bounded-concurrency fan-out over detail fetches.
//!
//! The coordinator runs one [`DetailSource`] call per app id and returns the
//! records in input order. In parallel mode every call is spawned at once
//! and a semaphore admits at most `limit` of them; in serial mode calls run
//! one after another.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use steamtop_core::{AppId, CONCURRENCY_RANGE, GameRecord};
use tokio::sync::Semaphore;
use tracing::{Instrument, debug, info, instrument, warn};

use crate::error::FetchError;
use crate::source::DetailSource;

// ============================================================================
// Fetch Mode
// ============================================================================

/// How detail pages are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// One page at a time, in input order.
    Serial,
    /// All pages launched together, at most `limit` in flight.
    Parallel {
        /// Maximum concurrent fetches.
        limit: usize,
    },
}

impl FetchMode {
    /// Builds the mode from query flags; the limit is clamped to 1-50 and
    /// ignored in serial mode.
    pub fn from_flags(parallel: bool, concurrency: u32) -> Self {
        if parallel {
            let limit = concurrency.clamp(*CONCURRENCY_RANGE.start(), *CONCURRENCY_RANGE.end());
            Self::Parallel {
                limit: limit as usize,
            }
        } else {
            Self::Serial
        }
    }

    /// Maximum fetches in flight.
    pub fn limit(&self) -> usize {
        match self {
            Self::Serial => 1,
            Self::Parallel { limit } => *limit,
        }
    }
}

// ============================================================================
// Coordinator
// ============================================================================

/// Runs detail fetches for a list of app ids.
///
/// All-or-nothing: the first failure observed fails the whole batch with
/// that app's error. Tasks already running are left to finish in the
/// background; their results are dropped.
#[derive(Debug, Clone, Copy)]
pub struct Coordinator {
    mode: FetchMode,
}

impl Coordinator {
    /// Creates a coordinator.
    pub fn new(mode: FetchMode) -> Self {
        Self { mode }
    }

    /// Fetches one record per id, in input order.
    #[instrument(skip(self, source, ids), fields(count = ids.len(), mode = ?self.mode))]
    pub async fn fetch_all(
        &self,
        source: Arc<dyn DetailSource>,
        ids: &[AppId],
    ) -> Result<Vec<GameRecord>, FetchError> {
        info!(source = source.id(), "Fetching detail pages");

        let result = match self.mode {
            FetchMode::Serial => fetch_serial(source.as_ref(), ids).await,
            FetchMode::Parallel { limit } => fetch_parallel(source, ids, limit).await,
        };

        match &result {
            Ok(records) => debug!(records = records.len(), "Detail pages fetched"),
            Err(e) => warn!(app_id = %e.app_id(), error = %e, "Detail fetch failed"),
        }
        result
    }
}

async fn fetch_serial(
    source: &dyn DetailSource,
    ids: &[AppId],
) -> Result<Vec<GameRecord>, FetchError> {
    let mut records = Vec::with_capacity(ids.len());
    for &app_id in ids {
        records.push(source.fetch_record(app_id).await?);
    }
    Ok(records)
}

async fn fetch_parallel(
    source: Arc<dyn DetailSource>,
    ids: &[AppId],
    limit: usize,
) -> Result<Vec<GameRecord>, FetchError> {
    let gate = Arc::new(Semaphore::new(limit.max(1)));
    let mut tasks = FuturesUnordered::new();

    for (slot, &app_id) in ids.iter().enumerate() {
        let gate = Arc::clone(&gate);
        let source = Arc::clone(&source);
        let handle = tokio::spawn(
            async move {
                // Held until the fetch returns, on success and error alike.
                let _permit = gate
                    .acquire_owned()
                    .await
                    .map_err(|e| FetchError::aborted(app_id, e.to_string()))?;
                source.fetch_record(app_id).await
            }
            .in_current_span(),
        );
        tasks.push(async move { (slot, app_id, handle.await) });
    }

    let mut slots: Vec<Option<GameRecord>> = ids.iter().map(|_| None).collect();
    while let Some((slot, app_id, joined)) = tasks.next().await {
        let result = joined.map_err(|e| FetchError::aborted(app_id, e.to_string()))?;
        slots[slot] = Some(result?);
    }

    slots
        .into_iter()
        .zip(ids)
        .map(|(record, &app_id)| {
            record.ok_or_else(|| FetchError::aborted(app_id, "no result recorded"))
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingSource {
        calls: Mutex<Vec<AppId>>,
    }

    #[async_trait]
    impl DetailSource for RecordingSource {
        fn id(&self) -> &str {
            "recording"
        }

        async fn fetch_record(&self, app_id: AppId) -> Result<GameRecord, FetchError> {
            self.calls.lock().unwrap().push(app_id);
            tokio::task::yield_now().await;
            Ok(GameRecord::empty(app_id))
        }
    }

    /// Records the name of the span each call runs in.
    #[derive(Default)]
    struct SpanSource {
        spans: Mutex<Vec<Option<&'static str>>>,
    }

    #[async_trait]
    impl DetailSource for SpanSource {
        fn id(&self) -> &str {
            "span"
        }

        async fn fetch_record(&self, app_id: AppId) -> Result<GameRecord, FetchError> {
            let name = tracing::Span::current().metadata().map(|meta| meta.name());
            self.spans.lock().unwrap().push(name);
            Ok(GameRecord::empty(app_id))
        }
    }

    fn ids(range: std::ops::RangeInclusive<u32>) -> Vec<AppId> {
        range.map(|raw| AppId::new(raw).unwrap()).collect()
    }

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(FetchMode::from_flags(true, 20), FetchMode::Parallel { limit: 20 });
        assert_eq!(FetchMode::from_flags(true, 0), FetchMode::Parallel { limit: 1 });
        assert_eq!(FetchMode::from_flags(true, 80), FetchMode::Parallel { limit: 50 });
        assert_eq!(FetchMode::from_flags(false, 20), FetchMode::Serial);
        assert_eq!(FetchMode::Serial.limit(), 1);
    }

    #[tokio::test]
    async fn test_serial_calls_in_input_order() {
        let source = Arc::new(RecordingSource {
            calls: Mutex::new(Vec::new()),
        });
        let input = ids(1..=8);

        let records = Coordinator::new(FetchMode::Serial)
            .fetch_all(source.clone(), &input)
            .await
            .unwrap();

        assert_eq!(*source.calls.lock().unwrap(), input);
        let out: Vec<AppId> = records.iter().map(GameRecord::id).collect();
        assert_eq!(out, input);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let source = Arc::new(RecordingSource {
            calls: Mutex::new(Vec::new()),
        });
        let records = Coordinator::new(FetchMode::Parallel { limit: 4 })
            .fetch_all(source, &[])
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_parallel_tasks_run_inside_batch_span() {
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry());
        let source = Arc::new(SpanSource::default());

        Coordinator::new(FetchMode::Parallel { limit: 3 })
            .fetch_all(source.clone(), &ids(1..=6))
            .await
            .unwrap();

        let spans = source.spans.lock().unwrap();
        assert_eq!(spans.len(), 6);
        assert!(spans.iter().all(|name| *name == Some("fetch_all")), "{spans:?}");
    }
}
