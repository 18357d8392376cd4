//! Wall-clock measurement of a scoped operation.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Measures elapsed wall-clock time.
///
/// `seconds()` reports the live value while running and the frozen value
/// once [`Elapsed::stop`] has been called.
#[derive(Debug)]
pub struct Elapsed {
    start: Instant,
    stopped: OnceLock<Duration>,
}

impl Elapsed {
    /// Starts measuring now.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
            stopped: OnceLock::new(),
        }
    }

    /// Freezes the measurement. Later calls keep the first value.
    pub fn stop(&self) -> Duration {
        *self.stopped.get_or_init(|| self.start.elapsed())
    }

    /// Returns true once stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped.get().is_some()
    }

    /// Elapsed duration so far, or the frozen duration.
    pub fn duration(&self) -> Duration {
        self.stopped
            .get()
            .copied()
            .unwrap_or_else(|| self.start.elapsed())
    }

    /// Elapsed seconds rounded to three decimals.
    pub fn seconds(&self) -> f64 {
        round_millis(self.duration())
    }
}

/// Rounds a duration to seconds with three decimals.
pub fn round_millis(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1000.0).round() / 1000.0
}
