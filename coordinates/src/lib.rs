//! Integer lattice coordinates and clamped grid directions.
#![deny(clippy::all)]

pub mod coord2d;
pub mod coord3d;
pub mod direction;
pub mod errors;
pub mod parse;
pub mod vector;

pub use coord2d::Coordinates2d;
pub use coord3d::Coordinates3d;
pub use direction::{Direction2d, Direction3d};
pub use errors::ParseCoordinatesError;
pub use vector::{Vector2, Vector3};

/// Data type used for coordinates
pub type Position = i32;

/// Clamp a position into `min..=max`.
///
/// The lower bound is checked first, so inverted bounds never panic:
/// anything below `min` becomes `min`, anything else above `max`
/// becomes `max`.
pub fn clamp(value: Position, min: Position, max: Position) -> Position {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp a position onto a single grid step, `-1..=1`.
pub(crate) fn unit(value: Position) -> Position {
    clamp(value, -1, 1)
}

/// Floor toward negative infinity. Out of range values saturate and NaN becomes zero.
pub(crate) fn floor(value: f32) -> Position {
    value.floor() as Position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_within_bounds() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(15, 0, 10), 10);
        assert_eq!(clamp(0, 0, 0), 0);
    }

    #[test]
    fn clamp_inverted_bounds() {
        assert_eq!(clamp(3, 5, 1), 5);
        assert_eq!(clamp(7, 5, 1), 1);
    }

    #[test]
    fn unit_saturates() {
        assert_eq!(unit(Position::MAX), 1);
        assert_eq!(unit(Position::MIN), -1);
        assert_eq!(unit(0), 0);
    }

    #[test]
    fn floor_toward_negative_infinity() {
        assert_eq!(floor(1.9), 1);
        assert_eq!(floor(-0.1), -1);
        assert_eq!(floor(-2.0), -2);
        assert_eq!(floor(f32::NAN), 0);
    }
}
