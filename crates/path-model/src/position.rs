//! Pointer positions and axis alignment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric kind usable as a position component.
///
/// Any copyable, ordered number qualifies: `i32`, `i64`, `f64`, ... A
/// stream uses a single kind, which the type parameter of [`Position`]
/// enforces. Comparisons are exact; there is no tolerance.
pub trait Coordinate: Copy + PartialOrd + fmt::Debug + 'static {}

impl<T> Coordinate for T where T: Copy + PartialOrd + fmt::Debug + 'static {}

/// An immutable 2D pointer position in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position<T> {
    pub x: T,
    pub y: T,
}

/// Integer device coordinates (the common case for pointer events).
pub type PixelPosition = Position<i64>;

/// Real-valued coordinates (subpixel devices, scaled views).
pub type RealPosition = Position<f64>;

/// Axis-aligned direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Travel along x; positions share the y coordinate.
    Horizontal,
    /// Travel along y; positions share the x coordinate.
    Vertical,
}

/// How a position lines up with a reference position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Same position.
    Coincident,
    /// On the horizontal or vertical line through the reference.
    Along(Axis),
    /// Shares neither coordinate with the reference.
    Off,
}

impl<T: Coordinate> Position<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Classify this position against `reference`.
    pub fn alignment_with(&self, reference: &Position<T>) -> Alignment {
        match (self.x == reference.x, self.y == reference.y) {
            (true, true) => Alignment::Coincident,
            (true, false) => Alignment::Along(Axis::Vertical),
            (false, true) => Alignment::Along(Axis::Horizontal),
            (false, false) => Alignment::Off,
        }
    }

    /// Whether this position lies on the `axis` line through `reference`.
    pub fn is_on_line(&self, reference: &Position<T>, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.y == reference.y,
            Axis::Vertical => self.x == reference.x,
        }
    }
}

impl Axis {
    /// The other axis.
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// The component of `position` that changes while travelling on this axis.
    pub fn component<T: Coordinate>(self, position: &Position<T>) -> T {
        match self {
            Axis::Horizontal => position.x,
            Axis::Vertical => position.y,
        }
    }

    /// Direction of the step `from -> to` along this axis.
    ///
    /// `None` when the step does not move along the axis (or the
    /// components are unordered, e.g. NaN).
    pub fn step<T: Coordinate>(self, from: &Position<T>, to: &Position<T>) -> Option<Heading> {
        let a = self.component(from);
        let b = self.component(to);
        if b > a {
            Some(Heading {
                axis: self,
                increasing: true,
            })
        } else if b < a {
            Some(Heading {
                axis: self,
                increasing: false,
            })
        } else {
            None
        }
    }
}

/// An axis plus a direction of travel along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Heading {
    pub axis: Axis,
    /// Whether the travelled component grows.
    pub increasing: bool,
}

impl Heading {
    /// Same axis, opposite direction.
    pub fn reversed(self) -> Heading {
        Heading {
            axis: self.axis,
            increasing: !self.increasing,
        }
    }
}

impl<T> From<(T, T)> for Position<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_alignment() {
        let reference = Position::new(0, 0);
        assert_eq!(
            Position::new(0, 0).alignment_with(&reference),
            Alignment::Coincident
        );
        assert_eq!(
            Position::new(0, 5).alignment_with(&reference),
            Alignment::Along(Axis::Vertical)
        );
        assert_eq!(
            Position::new(-3, 0).alignment_with(&reference),
            Alignment::Along(Axis::Horizontal)
        );
        assert_eq!(Position::new(5, 5).alignment_with(&reference), Alignment::Off);
    }

    #[test]
    fn test_nan_is_never_aligned() {
        let reference = Position::new(0.0, 0.0);
        assert_eq!(
            Position::new(f64::NAN, f64::NAN).alignment_with(&reference),
            Alignment::Off
        );
        assert_eq!(Axis::Horizontal.step(&reference, &Position::new(f64::NAN, 0.0)), None);
    }

    #[test]
    fn test_axis_step() {
        let a = Position::new(2, 2);
        assert_eq!(
            Axis::Vertical.step(&a, &Position::new(2, 7)),
            Some(Heading {
                axis: Axis::Vertical,
                increasing: true
            })
        );
        assert_eq!(
            Axis::Horizontal.step(&a, &Position::new(-1, 2)),
            Some(Heading {
                axis: Axis::Horizontal,
                increasing: false
            })
        );
        assert_eq!(Axis::Horizontal.step(&a, &Position::new(2, 9)), None);
    }

    #[test]
    fn test_perpendicular_and_reversed() {
        assert_eq!(Axis::Horizontal.perpendicular(), Axis::Vertical);
        assert_eq!(Axis::Vertical.perpendicular(), Axis::Horizontal);
        let heading = Heading {
            axis: Axis::Vertical,
            increasing: true,
        };
        assert!(!heading.reversed().increasing);
        assert_eq!(heading.reversed().axis, Axis::Vertical);
    }

    #[test]
    fn test_position_json_shape() {
        let json = serde_json::to_string(&Position::new(3, -4)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":-4}"#);
        let parsed: RealPosition = serde_json::from_str(r#"{"x":1.5,"y":2}"#).unwrap();
        assert_eq!(parsed, Position::new(1.5, 2.0));
    }

    #[test]
    fn test_display_and_from_tuple() {
        let p: PixelPosition = (7, 9).into();
        assert_eq!(p.to_string(), "(7, 9)");
    }

    proptest! {
        #[test]
        fn alignment_is_symmetric(ax in -3i32..3, ay in -3i32..3, bx in -3i32..3, by in -3i32..3) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            prop_assert_eq!(a.alignment_with(&b), b.alignment_with(&a));
            prop_assert_eq!(a.alignment_with(&b) == Alignment::Coincident, a == b);
        }

        #[test]
        fn along_axis_means_on_that_line(ax in -3i32..3, ay in -3i32..3, bx in -3i32..3, by in -3i32..3) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            if let Alignment::Along(axis) = a.alignment_with(&b) {
                prop_assert!(a.is_on_line(&b, axis));
                prop_assert!(!a.is_on_line(&b, axis.perpendicular()));
                prop_assert!(axis.step(&b, &a).is_some());
            }
        }
    }
}
