//! Elapsed time between successive pointer positions.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Time since the previous pointer position, in whole milliseconds.
///
/// Never cumulative: each measurement covers one interval only. Serializes
/// as a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ElapsedTime(u64);

impl ElapsedTime {
    /// Zero elapsed time, used for synthetic (flushed) turns.
    pub const ZERO: ElapsedTime = ElapsedTime(0);

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<Duration> for ElapsedTime {
    /// Truncates to millisecond resolution.
    fn from(duration: Duration) -> Self {
        Self(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
