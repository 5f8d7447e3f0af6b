use freehand_path_model::position::{Alignment, Axis, Coordinate, Position};

use super::{corner, TurnDetector};

/// Turns as soon as the path leaves the tracked line through the reference.
///
/// Leaving both lines turns at the corner. Jumping from the tracked line onto
/// the other line through the reference turns at the last position on the
/// tracked line. Doubling back along the tracked line is not a turn.
#[derive(Debug, Clone)]
pub struct SimpleTurnDetector<T> {
    /// Reference the tracked axis belongs to.
    anchor: Position<T>,
    /// Most recent position seen.
    last: Position<T>,
    axis: Option<Axis>,
}

impl<T: Coordinate> SimpleTurnDetector<T> {
    pub fn new(initial: Position<T>) -> Self {
        Self {
            anchor: initial,
            last: initial,
            axis: None,
        }
    }

    /// Axis currently tracked, if the path has moved since the last turn.
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }
}

impl<T: Coordinate> TurnDetector<T> for SimpleTurnDetector<T> {
    fn detect(&mut self, new_position: Position<T>, reference: Position<T>) -> Option<Position<T>> {
        // The caller moved the reference without us reporting a turn.
        if reference != self.anchor {
            self.anchor = reference;
            self.last = reference;
            self.axis = None;
        }

        let turn = match new_position.alignment_with(&reference) {
            Alignment::Coincident => None,
            Alignment::Along(axis) => match self.axis {
                Some(tracked) if tracked != axis && self.last != reference => {
                    // Crossed onto the other line through the reference.
                    self.axis = None;
                    self.anchor = new_position;
                    Some(self.last)
                }
                _ => {
                    self.axis = Some(axis);
                    None
                }
            },
            Alignment::Off => {
                let turn = corner(&reference, &new_position, self.axis);
                self.axis = Some(self.axis.unwrap_or(Axis::Horizontal).perpendicular());
                self.anchor = new_position;
                Some(turn)
            }
        };

        self.last = new_position;
        turn
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
