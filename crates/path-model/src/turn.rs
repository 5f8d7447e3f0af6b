//! Turn events: the only payload sent to the line-drawing consumer.

use serde::{Deserialize, Serialize};

use crate::elapsed::ElapsedTime;
use crate::position::Position;

/// A detected turn and the time since the previous pointer position.
///
/// JSON shape: `{"x":..,"y":..,"elapsed_ms":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnEvent<T> {
    /// Where the path changed direction.
    #[serde(flatten)]
    pub position: Position<T>,

    /// Interval measured when the turn was detected; zero for flushed turns.
    #[serde(rename = "elapsed_ms")]
    pub elapsed: ElapsedTime,
}

impl<T> TurnEvent<T> {
    pub fn new(position: Position<T>, elapsed: ElapsedTime) -> Self {
        Self { position, elapsed }
    }

    /// A synthetic turn emitted when the stream closes.
    pub fn flushed(position: Position<T>) -> Self {
        Self {
            position,
            elapsed: ElapsedTime::ZERO,
        }
    }
}
