//! Interval timing for pointer streams.
//!
//! Turn events carry the time since the previous pointer position, not the
//! time since the stream started. An [`IntervalTimer`] measures exactly that:
//! every `restart()` returns the interval since the last restart and begins
//! a new one.
//!
//! - [`MonotonicTimer`] measures live streams with `Instant`.
//! - [`ScriptedTimer`] replays known intervals (recorded traces, tests).

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A restartable interval measurement.
pub trait IntervalTimer {
    /// Return the time elapsed since the previous restart (or since the
    /// timer was created) and start a new interval.
    fn restart(&mut self) -> Duration;

    /// Wall-clock start time (RFC 3339), if the timer records one.
    fn started_at(&self) -> Option<&str> {
        None
    }
}

/// Wall-clock backed timer for live pointer streams.
#[derive(Debug, Clone)]
pub struct MonotonicTimer {
    /// Start of the current interval.
    last: Instant,

    /// Wall-clock time the timer was started (RFC 3339).
    started_wall: String,
}

impl MonotonicTimer {
    /// Create a timer whose first interval starts now.
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
            started_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Time elapsed in the current interval without restarting it.
    pub fn peek(&self) -> Duration {
        self.last.elapsed()
    }
}

impl Default for MonotonicTimer {
    fn default() -> Self {
        Self::start()
    }
}

impl IntervalTimer for MonotonicTimer {
    fn restart(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed
    }

    fn started_at(&self) -> Option<&str> {
        Some(&self.started_wall)
    }
}

/// Timer that yields a preset sequence of intervals.
///
/// Once the sequence is exhausted every restart yields zero.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTimer {
    intervals: VecDeque<Duration>,
}

impl ScriptedTimer {
    /// Create a timer from an ordered sequence of intervals.
    pub fn new(intervals: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            intervals: intervals.into_iter().collect(),
        }
    }

    /// Build intervals from monotonic nanosecond timestamps.
    ///
    /// The first interval is measured from `origin_ns`. Timestamps that go
    /// backwards produce a zero interval.
    pub fn from_timestamps_ns(origin_ns: u64, timestamps_ns: &[u64]) -> Self {
        let mut prev = origin_ns;
        let intervals = timestamps_ns.iter().map(|&t| {
            let interval = Duration::from_nanos(t.saturating_sub(prev));
            prev = t;
            interval
        });
        Self::new(intervals.collect::<Vec<_>>())
    }

    /// Number of scripted intervals not yet consumed.
    pub fn remaining(&self) -> usize {
        self.intervals.len()
    }
}

impl IntervalTimer for ScriptedTimer {
    fn restart(&mut self) -> Duration {
        self.intervals.pop_front().unwrap_or(Duration::ZERO)
    }
}

/// Convert a nanosecond value to seconds.
pub fn ns_to_secs(ns: u64) -> f64 {
    ns as f64 / 1_000_000_000.0
}
