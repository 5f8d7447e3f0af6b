//! Displacement since the last emitted turn.

use freehand_path_model::position::{Coordinate, Position};

/// The last turn position (`start`) and the most recent position (`end`).
///
/// `start` moves only when a turn is emitted; `end` always holds the latest
/// position fed to the generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct History<T> {
    start: Position<T>,
    end: Position<T>,
}

impl<T: Coordinate> History<T> {
    /// Start a history at the stream's initial position.
    pub fn new(initial: Position<T>) -> Self {
        Self {
            start: initial,
            end: initial,
        }
    }

    /// Record a position that did not turn.
    pub fn update_end(&mut self, position: Position<T>) {
        self.end = position;
    }

    /// Reset both ends onto `position` after a turn was emitted.
    pub fn collapse(&mut self, position: Position<T>) {
        self.start = position;
        self.end = position;
    }

    /// No displacement since the last turn.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn start(&self) -> Position<T> {
        self.start
    }

    pub fn end(&self) -> Position<T> {
        self.end
    }
}
