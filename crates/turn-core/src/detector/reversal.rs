use freehand_path_model::position::{Alignment, Axis, Coordinate, Heading, Position};

use super::{corner, TurnDetector};

/// Like the simple detector, but also turns where the path doubles back
/// along the axis it is travelling.
///
/// A reversal turn is placed at the last position before the direction
/// changed, i.e. the extreme of the stroke.
#[derive(Debug, Clone)]
pub struct ReversalDetector<T> {
    /// Reference the heading belongs to.
    anchor: Position<T>,
    /// Most recent position seen.
    last: Position<T>,
    heading: Option<Heading>,
}

impl<T: Coordinate> ReversalDetector<T> {
    pub fn new(initial: Position<T>) -> Self {
        Self {
            anchor: initial,
            last: initial,
            heading: None,
        }
    }

    /// Direction of travel since the last turn, if any.
    pub fn heading(&self) -> Option<Heading> {
        self.heading
    }
}

impl<T: Coordinate> TurnDetector<T> for ReversalDetector<T> {
    fn detect(&mut self, new_position: Position<T>, reference: Position<T>) -> Option<Position<T>> {
        if reference != self.anchor {
            self.anchor = reference;
            self.last = reference;
            self.heading = None;
        }

        let turn = match new_position.alignment_with(&reference) {
            // Back on the reference: never a turn. The extreme and heading
            // are kept so that continuing past the reference still reverses.
            Alignment::Coincident => return None,
            Alignment::Along(axis) => {
                let tracked = self.heading.map(|heading| heading.axis);
                if tracked.is_some_and(|tracked| tracked != axis) && self.last != reference {
                    // Crossed onto the other line through the reference.
                    self.heading = None;
                    self.anchor = new_position;
                    Some(self.last)
                } else {
                    let step = axis.step(&self.last, &new_position);
                    let reversed = matches!(
                        (self.heading, step),
                        (Some(heading), Some(step)) if heading.reversed() == step
                    );
                    if step.is_some() {
                        self.heading = step;
                    }
                    if reversed {
                        self.anchor = new_position;
                        Some(self.last)
                    } else {
                        None
                    }
                }
            }
            Alignment::Off => {
                let tracked = self.heading.map(|heading| heading.axis);
                let turn = corner(&reference, &new_position, tracked);
                let axis = tracked.unwrap_or(Axis::Horizontal).perpendicular();
                self.heading = axis.step(&turn, &new_position);
                self.anchor = new_position;
                Some(turn)
            }
        };

        self.last = new_position;
        turn
    }

    fn name(&self) -> &'static str {
        "reversal"
    }
}
