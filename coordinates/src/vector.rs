//! Floating point vectors, as used by whatever hosts the grid.
//!
//! Conversions to and from the integer types are always explicit:
//! integer to float widens exactly, float to integer floors each axis.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseCoordinatesError;
use crate::parse;
use crate::{Coordinates2d, Coordinates3d, Direction2d, Direction3d};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Scale this vector to unit length.
    ///
    /// The zero vector has no direction, so every component comes back NaN.
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        Self {
            x: self.x / magnitude,
            y: self.y / magnitude,
        }
    }

    /// Offset this vector by integer coordinates.
    pub fn add_coordinates(self, coordinates: Coordinates2d) -> Self {
        Self {
            x: self.x + coordinates.x as f32,
            y: self.y + coordinates.y as f32,
        }
    }

    /// Offset this vector by a single grid step.
    pub fn add_direction(self, direction: Direction2d) -> Self {
        Self {
            x: self.x + direction.x() as f32,
            y: self.y + direction.y() as f32,
        }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl FromStr for Vector2 {
    type Err = ParseCoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse::exactly::<f32, 2>(s)?;
        Ok(Self::new(x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Scale this vector to unit length. NaN for the zero vector.
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        Self {
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
        }
    }

    pub fn add_coordinates(self, coordinates: Coordinates3d) -> Self {
        Self {
            x: self.x + coordinates.x as f32,
            y: self.y + coordinates.y as f32,
            z: self.z + coordinates.z as f32,
        }
    }

    pub fn add_direction(self, direction: Direction3d) -> Self {
        Self {
            x: self.x + direction.x() as f32,
            y: self.y + direction.y() as f32,
            z: self.z + direction.z() as f32,
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

impl FromStr for Vector3 {
    type Err = ParseCoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse::exactly::<f32, 3>(s)?;
        Ok(Self::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.normalized(), Vector2::new(0.6, 0.8));

        let zero = Vector2::default().normalized();
        assert!(zero.x.is_nan() && zero.y.is_nan());

        let v = Vector3::new(0.0, 0.0, -2.0).normalized();
        assert_eq!(v, Vector3::new(0.0, 0.0, -1.0));
        assert!(Vector3::default().normalized().z.is_nan());
    }

    #[test]
    fn offsets() {
        let v = Vector2::new(0.5, -0.5);
        assert_eq!(
            v.add_coordinates(Coordinates2d::new(2, 3)),
            Vector2::new(2.5, 2.5)
        );
        assert_eq!(v.add_direction(Direction2d::DOWN_LEFT), Vector2::new(-0.5, -1.5));

        let v = Vector3::new(0.25, 0.0, 1.0);
        assert_eq!(
            v.add_coordinates(Coordinates3d::new(1, -1, 2)),
            Vector3::new(1.25, -1.0, 3.0)
        );
        assert_eq!(v.add_direction(Direction3d::BACKWARD_UP), Vector3::new(0.25, 1.0, 0.0));
    }

    #[test]
    fn text() {
        assert_eq!("1.5, -2".parse::<Vector2>().unwrap(), Vector2::new(1.5, -2.0));
        assert_eq!(&Vector2::new(1.5, -2.0).to_string(), "1.5, -2");
        assert_eq!(
            "(0, 0.5, 1)".parse::<Vector3>().unwrap(),
            Vector3::new(0.0, 0.5, 1.0)
        );
        assert!("1, 2".parse::<Vector3>().is_err());
    }
}
