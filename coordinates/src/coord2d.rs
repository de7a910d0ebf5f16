//! Coordinate work in two dimensions.

use std::fmt;
use std::ops;
use std::str::FromStr;

use crate::errors::ParseCoordinatesError;
use crate::{clamp, floor, parse};
use crate::{Coordinates3d, Direction2d, Position, Vector2};

/// A location on the 2D integer grid.
///
/// Every operation returns a new value. Arithmetic is unchecked in the
/// sense that nothing is validated up front: overflow and division by
/// zero panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinates2d {
    pub x: Position,
    pub y: Position,
}

impl Coordinates2d {
    pub const ZERO: Self = Self { x: 0, y: 0 };
    pub const ONE: Self = Self { x: 1, y: 1 };
    pub const UP: Self = Self { x: 0, y: 1 };
    pub const DOWN: Self = Self { x: 0, y: -1 };
    pub const LEFT: Self = Self { x: -1, y: 0 };
    pub const RIGHT: Self = Self { x: 1, y: 0 };
    pub const MAX: Self = Self {
        x: Position::MAX,
        y: Position::MAX,
    };
    pub const MIN: Self = Self {
        x: Position::MIN,
        y: Position::MIN,
    };

    /// Build new coordinates from their components.
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// Floor each axis of a float vector onto the grid.
    pub fn from_vector(vector: Vector2) -> Self {
        Self {
            x: floor(vector.x),
            y: floor(vector.y),
        }
    }

    pub fn to_vector(self) -> Vector2 {
        Vector2::new(self.x as f32, self.y as f32)
    }

    pub fn to_tuple(self) -> (Position, Position) {
        (self.x, self.y)
    }

    /// Clamp each axis into its own inclusive range.
    pub fn clamp(
        self,
        min_x: Position,
        max_x: Position,
        min_y: Position,
        max_y: Position,
    ) -> Self {
        Self {
            x: clamp(self.x, min_x, max_x),
            y: clamp(self.y, min_y, max_y),
        }
    }

    /// Check if both axes fall inside their inclusive ranges.
    pub fn is_inside(
        self,
        min_x: Position,
        max_x: Position,
        min_y: Position,
        max_y: Position,
    ) -> bool {
        self.x >= min_x && self.x <= max_x && self.y >= min_y && self.y <= max_y
    }

    /// Euclidean distance between two points.
    pub fn distance_to(self, other: Self) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx.powi(2) + dy.powi(2)).sqrt()
    }

    /// Angle in degrees of the line from here to `other`, in (-180, 180].
    pub fn angle_to(self, other: Self) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        dy.atan2(dx).to_degrees()
    }

    /// Unit vector pointing at `other`. NaN when both points coincide.
    pub fn direction_to(self, other: Self) -> Vector2 {
        (other - self).to_vector().normalized()
    }

    /// Lay this point flat: `y` becomes the depth axis.
    pub fn to_coordinates3d_horizontal(self) -> Coordinates3d {
        Coordinates3d::new(self.x, 0, self.y)
    }

    /// Stand this point up in the `z = 0` plane.
    pub fn to_coordinates3d_vertical(self) -> Coordinates3d {
        Coordinates3d::new(self.x, self.y, 0)
    }

    /// Take a single step in a given direction.
    pub fn add_direction(self, direction: Direction2d) -> Self {
        Self {
            x: self.x + direction.x(),
            y: self.y + direction.y(),
        }
    }

    pub fn subtract_direction(self, direction: Direction2d) -> Self {
        Self {
            x: self.x - direction.x(),
            y: self.y - direction.y(),
        }
    }

    /// Take `multiplier` steps in a given direction.
    pub fn add_direction_multiple(self, direction: Direction2d, multiplier: Position) -> Self {
        Self {
            x: self.x + direction.x() * multiplier,
            y: self.y + direction.y() * multiplier,
        }
    }

    pub fn subtract_direction_multiple(self, direction: Direction2d, multiplier: Position) -> Self {
        Self {
            x: self.x - direction.x() * multiplier,
            y: self.y - direction.y() * multiplier,
        }
    }

    /// Iterate over all 8 adjacent points, diagonals included.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        Direction2d::all().map(move |d| self.add_direction(d))
    }
}

impl ops::Add for Coordinates2d {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl ops::Sub for Coordinates2d {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl ops::Neg for Coordinates2d {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl ops::Mul<Position> for Coordinates2d {
    type Output = Self;

    fn mul(self, scale: Position) -> Self::Output {
        Self {
            x: self.x * scale,
            y: self.y * scale,
        }
    }
}

impl ops::Div<Position> for Coordinates2d {
    type Output = Self;

    fn div(self, scale: Position) -> Self::Output {
        Self {
            x: self.x / scale,
            y: self.y / scale,
        }
    }
}

impl ops::Mul for Coordinates2d {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }
}

impl ops::Div for Coordinates2d {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }
}

impl ops::Add<Direction2d> for Coordinates2d {
    type Output = Self;

    fn add(self, direction: Direction2d) -> Self::Output {
        self.add_direction(direction)
    }
}

impl ops::Sub<Direction2d> for Coordinates2d {
    type Output = Self;

    fn sub(self, direction: Direction2d) -> Self::Output {
        self.subtract_direction(direction)
    }
}

impl fmt::Display for Coordinates2d {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Coordinates2d {
    fn from(coordinates: (Position, Position)) -> Self {
        Self {
            x: coordinates.0,
            y: coordinates.1,
        }
    }
}

impl From<Coordinates2d> for (Position, Position) {
    fn from(coordinates: Coordinates2d) -> Self {
        coordinates.to_tuple()
    }
}

impl From<Vector2> for Coordinates2d {
    fn from(vector: Vector2) -> Self {
        Self::from_vector(vector)
    }
}

impl From<Coordinates2d> for Vector2 {
    fn from(coordinates: Coordinates2d) -> Self {
        coordinates.to_vector()
    }
}

impl FromStr for Coordinates2d {
    type Err = ParseCoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse::exactly::<Position, 2>(s)?;
        Ok(Self::new(x, y))
    }
}
