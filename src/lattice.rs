//! Arguments whose dimension is only known once they are parsed.

use std::fmt;
use std::str::FromStr;

use coordinates::parse;
use coordinates::{
    Coordinates2d, Coordinates3d, Direction2d, Direction3d, Position, Vector2, Vector3,
};

use crate::CyanError;

/// Coordinates on either a flat or a spatial grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lattice {
    Flat(Coordinates2d),
    Spatial(Coordinates3d),
}

impl Lattice {
    pub fn dimension(&self) -> usize {
        match self {
            Lattice::Flat(_) => 2,
            Lattice::Spatial(_) => 3,
        }
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Lattice::Flat(c) => write!(f, "{}", c),
            Lattice::Spatial(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for Lattice {
    type Err = CyanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse::components::<Position>(s)?.as_slice() {
            [x, y] => Ok(Lattice::Flat(Coordinates2d::new(*x, *y))),
            [x, y, z] => Ok(Lattice::Spatial(Coordinates3d::new(*x, *y, *z))),
            other => Err(CyanError::UnsupportedDimension(other.len())),
        }
    }
}

/// A single grid step on either kind of grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Flat(Direction2d),
    Spatial(Direction3d),
}

impl Step {
    pub fn dimension(&self) -> usize {
        match self {
            Step::Flat(_) => 2,
            Step::Spatial(_) => 3,
        }
    }
}

impl FromStr for Step {
    type Err = CyanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Lattice>()? {
            Lattice::Flat(c) => Ok(Step::Flat(c.into())),
            Lattice::Spatial(c) => Ok(Step::Spatial(c.into())),
        }
    }
}

/// A float vector on either kind of grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vector {
    Flat(Vector2),
    Spatial(Vector3),
}

impl Vector {
    pub fn dimension(&self) -> usize {
        match self {
            Vector::Flat(_) => 2,
            Vector::Spatial(_) => 3,
        }
    }
}

impl FromStr for Vector {
    type Err = CyanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse::components::<f32>(s)?.as_slice() {
            [x, y] => Ok(Vector::Flat(Vector2::new(*x, *y))),
            [x, y, z] => Ok(Vector::Spatial(Vector3::new(*x, *y, *z))),
            other => Err(CyanError::UnsupportedDimension(other.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_dimension() {
        assert_eq!(
            "1, 2".parse::<Lattice>().unwrap(),
            Lattice::Flat(Coordinates2d::new(1, 2))
        );
        assert_eq!(
            "(1, 2, 3)".parse::<Lattice>().unwrap(),
            Lattice::Spatial(Coordinates3d::new(1, 2, 3))
        );
        assert_eq!("1, 2, 3".parse::<Lattice>().unwrap().dimension(), 3);
        assert!(matches!(
            "1".parse::<Lattice>(),
            Err(CyanError::UnsupportedDimension(1))
        ));
        assert!(matches!(
            "1, 2, 3, 4".parse::<Lattice>(),
            Err(CyanError::UnsupportedDimension(4))
        ));
        assert!(matches!(
            "a, b".parse::<Lattice>(),
            Err(CyanError::Parse(_))
        ));
    }

    #[test]
    fn steps_clamp() {
        assert_eq!(
            "5, -5".parse::<Step>().unwrap(),
            Step::Flat(Direction2d::DOWN_RIGHT)
        );
        assert_eq!(
            "0, 0, 3".parse::<Step>().unwrap(),
            Step::Spatial(Direction3d::FORWARD)
        );
    }

    #[test]
    fn vectors() {
        assert_eq!(
            "0.5, 1".parse::<Vector>().unwrap(),
            Vector::Flat(Vector2::new(0.5, 1.0))
        );
        assert_eq!(
            "0, 0, -1.5".parse::<Vector>().unwrap(),
            Vector::Spatial(Vector3::new(0.0, 0.0, -1.5))
        );
    }
}
