//! Coordinate work in three dimensions.

use std::fmt;
use std::ops;
use std::str::FromStr;

use crate::errors::ParseCoordinatesError;
use crate::{clamp, floor, parse};
use crate::{Coordinates2d, Direction3d, Position, Vector3};

/// A location on the 3D integer grid.
///
/// `y` is up and `z` is forward, so the horizontal plane is `x`/`z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinates3d {
    pub x: Position,
    pub y: Position,
    pub z: Position,
}

impl Coordinates3d {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };
    pub const ONE: Self = Self { x: 1, y: 1, z: 1 };
    pub const UP: Self = Self { x: 0, y: 1, z: 0 };
    pub const DOWN: Self = Self { x: 0, y: -1, z: 0 };
    pub const LEFT: Self = Self { x: -1, y: 0, z: 0 };
    pub const RIGHT: Self = Self { x: 1, y: 0, z: 0 };
    pub const FORWARD: Self = Self { x: 0, y: 0, z: 1 };
    pub const BACKWARD: Self = Self { x: 0, y: 0, z: -1 };
    pub const MAX: Self = Self {
        x: Position::MAX,
        y: Position::MAX,
        z: Position::MAX,
    };
    pub const MIN: Self = Self {
        x: Position::MIN,
        y: Position::MIN,
        z: Position::MIN,
    };

    pub fn new(x: Position, y: Position, z: Position) -> Self {
        Self { x, y, z }
    }

    /// Floor each axis of a float vector onto the grid.
    pub fn from_vector(vector: Vector3) -> Self {
        Self {
            x: floor(vector.x),
            y: floor(vector.y),
            z: floor(vector.z),
        }
    }

    pub fn to_vector(self) -> Vector3 {
        Vector3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    pub fn to_tuple(self) -> (Position, Position, Position) {
        (self.x, self.y, self.z)
    }

    /// Clamp each axis into its own inclusive range.
    #[allow(clippy::too_many_arguments)]
    pub fn clamp(
        self,
        min_x: Position,
        max_x: Position,
        min_y: Position,
        max_y: Position,
        min_z: Position,
        max_z: Position,
    ) -> Self {
        Self {
            x: clamp(self.x, min_x, max_x),
            y: clamp(self.y, min_y, max_y),
            z: clamp(self.z, min_z, max_z),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn is_inside(
        self,
        min_x: Position,
        max_x: Position,
        min_y: Position,
        max_y: Position,
        min_z: Position,
        max_z: Position,
    ) -> bool {
        self.x >= min_x
            && self.x <= max_x
            && self.y >= min_y
            && self.y <= max_y
            && self.z >= min_z
            && self.z <= max_z
    }

    pub fn distance_to(self, other: Self) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        let dz = (self.z - other.z) as f32;
        (dx.powi(2) + dy.powi(2) + dz.powi(2)).sqrt()
    }

    /// Angle in degrees between the position vectors of two points,
    /// measured from the origin.
    ///
    /// NaN if either point is the origin. The dot product and squared
    /// magnitudes are integer sums, so any component beyond about ±46340
    /// overflows and panics.
    pub fn angle_to(self, other: Self) -> f32 {
        let dot = self.x * other.x + self.y * other.y + self.z * other.z;
        let magnitude = ((self.x * self.x + self.y * self.y + self.z * self.z) as f32).sqrt();
        let other_magnitude =
            ((other.x * other.x + other.y * other.y + other.z * other.z) as f32).sqrt();
        (dot as f32 / (magnitude * other_magnitude))
            .acos()
            .to_degrees()
    }

    /// Unit vector pointing at `other`. NaN when both points coincide.
    pub fn direction_to(self, other: Self) -> Vector3 {
        (other - self).to_vector().normalized()
    }

    /// Project onto the ground plane, keeping `x` and `z`.
    pub fn to_coordinates2d_horizontal(self) -> Coordinates2d {
        Coordinates2d::new(self.x, self.z)
    }

    /// Project onto the `z = 0` plane, keeping `x` and `y`.
    pub fn to_coordinates2d_vertical(self) -> Coordinates2d {
        Coordinates2d::new(self.x, self.y)
    }

    pub fn add_direction(self, direction: Direction3d) -> Self {
        Self {
            x: self.x + direction.x(),
            y: self.y + direction.y(),
            z: self.z + direction.z(),
        }
    }

    pub fn subtract_direction(self, direction: Direction3d) -> Self {
        Self {
            x: self.x - direction.x(),
            y: self.y - direction.y(),
            z: self.z - direction.z(),
        }
    }

    pub fn add_direction_multiple(self, direction: Direction3d, multiplier: Position) -> Self {
        Self {
            x: self.x + direction.x() * multiplier,
            y: self.y + direction.y() * multiplier,
            z: self.z + direction.z() * multiplier,
        }
    }

    pub fn subtract_direction_multiple(self, direction: Direction3d, multiplier: Position) -> Self {
        Self {
            x: self.x - direction.x() * multiplier,
            y: self.y - direction.y() * multiplier,
            z: self.z - direction.z() * multiplier,
        }
    }

    /// Iterate over all 26 adjacent points.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        Direction3d::all().map(move |d| self.add_direction(d))
    }
}

impl ops::Add for Coordinates3d {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl ops::Sub for Coordinates3d {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl ops::Neg for Coordinates3d {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl ops::Mul<Position> for Coordinates3d {
    type Output = Self;

    fn mul(self, scale: Position) -> Self::Output {
        Self {
            x: self.x * scale,
            y: self.y * scale,
            z: self.z * scale,
        }
    }
}

impl ops::Div<Position> for Coordinates3d {
    type Output = Self;

    fn div(self, scale: Position) -> Self::Output {
        Self {
            x: self.x / scale,
            y: self.y / scale,
            z: self.z / scale,
        }
    }
}

impl ops::Mul for Coordinates3d {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl ops::Div for Coordinates3d {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
            z: self.z / other.z,
        }
    }
}

impl ops::Add<Direction3d> for Coordinates3d {
    type Output = Self;

    fn add(self, direction: Direction3d) -> Self::Output {
        self.add_direction(direction)
    }
}

impl ops::Sub<Direction3d> for Coordinates3d {
    type Output = Self;

    fn sub(self, direction: Direction3d) -> Self::Output {
        self.subtract_direction(direction)
    }
}

impl fmt::Display for Coordinates3d {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

impl From<(Position, Position, Position)> for Coordinates3d {
    fn from(coordinates: (Position, Position, Position)) -> Self {
        Self {
            x: coordinates.0,
            y: coordinates.1,
            z: coordinates.2,
        }
    }
}

impl From<Coordinates3d> for (Position, Position, Position) {
    fn from(coordinates: Coordinates3d) -> Self {
        coordinates.to_tuple()
    }
}

impl From<Vector3> for Coordinates3d {
    fn from(vector: Vector3) -> Self {
        Self::from_vector(vector)
    }
}

impl From<Coordinates3d> for Vector3 {
    fn from(coordinates: Coordinates3d) -> Self {
        coordinates.to_vector()
    }
}

impl FromStr for Coordinates3d {
    type Err = ParseCoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse::exactly::<Position, 3>(s)?;
        Ok(Self::new(x, y, z))
    }
}
