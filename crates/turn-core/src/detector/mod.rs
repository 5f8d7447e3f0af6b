//! Turn detection strategies.
//!
//! A detector looks at each new position relative to the last turn (the
//! generator's `history.start`) and decides whether the path has left the
//! axis it was travelling on. Both strategies place the turn at the same
//! corner:
//!
//! | tracked axis        | corner                     |
//! |---------------------|----------------------------|
//! | vertical            | `(reference.x, new.y)`     |
//! | horizontal          | `(new.x, reference.y)`     |
//! | none established    | as horizontal              |
//!
//! The corner extends the tracked line through the reference until it
//! meets the new position on the perpendicular. After a turn the tracked
//! axis is the perpendicular one.
//!
//! A position that jumps from the tracked line onto the other line through
//! the reference is also a turn, placed at the last position seen on the
//! tracked line.

mod reversal;
mod simple;

use std::fmt;
use std::str::FromStr;

use freehand_common::error::FreehandError;
use freehand_path_model::position::{Axis, Coordinate, Position};
use serde::{Deserialize, Serialize};

pub use reversal::ReversalDetector;
pub use simple::SimpleTurnDetector;

/// Strategy deciding whether, and where, the path turned.
pub trait TurnDetector<T: Coordinate> {
    /// Return the turn position if `new_position` left the axis through
    /// `reference`, or `None` if the path is still on it.
    ///
    /// `new_position == reference` is never a turn.
    fn detect(&mut self, new_position: Position<T>, reference: Position<T>) -> Option<Position<T>>;

    /// Strategy name for logging.
    fn name(&self) -> &'static str;
}

/// Available detection strategies, chosen once per generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    /// Turn when the path leaves the tracked line through the reference.
    #[default]
    Simple,
    /// Also turn when the path reverses direction along its axis.
    Reversal,
}

impl DetectorKind {
    /// Build a detector seeded with the stream's initial position.
    pub fn build<T: Coordinate>(self, initial: Position<T>) -> Box<dyn TurnDetector<T>> {
        match self {
            DetectorKind::Simple => Box::new(SimpleTurnDetector::new(initial)),
            DetectorKind::Reversal => Box::new(ReversalDetector::new(initial)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorKind::Simple => "simple",
            DetectorKind::Reversal => "reversal",
        }
    }
}

impl FromStr for DetectorKind {
    type Err = FreehandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(DetectorKind::Simple),
            "reversal" => Ok(DetectorKind::Reversal),
            other => Err(FreehandError::config(format!(
                "Unknown turn detector '{other}' (expected simple|reversal)"
            ))),
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Corner where a path tracking `axis` through `reference` turns toward
/// `new_position`.
pub(crate) fn corner<T: Coordinate>(
    reference: &Position<T>,
    new_position: &Position<T>,
    axis: Option<Axis>,
) -> Position<T> {
    match axis.unwrap_or(Axis::Horizontal) {
        Axis::Vertical => Position::new(reference.x, new_position.y),
        Axis::Horizontal => Position::new(new_position.x, reference.y),
    }
}
