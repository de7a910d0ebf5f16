//! Single grid steps.
//!
//! A direction is a vector whose components are each one of -1, 0 or 1.
//! Every constructor saturates out of range input instead of rejecting it,
//! so the components are private and only readable through accessors.

use std::fmt;
use std::ops;
use std::str::FromStr;

use itertools::iproduct;

use crate::errors::ParseCoordinatesError;
use crate::{parse, unit};
use crate::{Coordinates2d, Coordinates3d, Position};

/// A step towards one of the 8 neighbours of a 2D grid cell, or nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction2d {
    x: Position,
    y: Position,
}

impl Direction2d {
    pub const ZERO: Self = Self { x: 0, y: 0 };
    pub const UP: Self = Self { x: 0, y: 1 };
    pub const DOWN: Self = Self { x: 0, y: -1 };
    pub const LEFT: Self = Self { x: -1, y: 0 };
    pub const RIGHT: Self = Self { x: 1, y: 0 };
    pub const UP_LEFT: Self = Self { x: -1, y: 1 };
    pub const UP_RIGHT: Self = Self { x: 1, y: 1 };
    pub const DOWN_LEFT: Self = Self { x: -1, y: -1 };
    pub const DOWN_RIGHT: Self = Self { x: 1, y: -1 };

    /// Build a direction, clamping each axis into -1..=1.
    pub fn new(x: Position, y: Position) -> Self {
        Self {
            x: unit(x),
            y: unit(y),
        }
    }

    pub fn x(self) -> Position {
        self.x
    }

    pub fn y(self) -> Position {
        self.y
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Enumerates the 8 non-zero directions, ordered by `x` then `y`.
    pub fn all() -> impl Iterator<Item = Self> {
        iproduct!(-1..=1, -1..=1)
            .filter(|(x, y)| !(*x == 0 && *y == 0))
            .map(|(x, y)| Self { x, y })
    }
}

impl ops::Add for Direction2d {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl ops::Sub for Direction2d {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl ops::Neg for Direction2d {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl fmt::Display for Direction2d {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(Position, Position)> for Direction2d {
    fn from(components: (Position, Position)) -> Self {
        Self::new(components.0, components.1)
    }
}

impl From<Direction2d> for (Position, Position) {
    fn from(direction: Direction2d) -> Self {
        (direction.x, direction.y)
    }
}

impl From<Coordinates2d> for Direction2d {
    fn from(coordinates: Coordinates2d) -> Self {
        Self::new(coordinates.x, coordinates.y)
    }
}

impl From<Direction2d> for Coordinates2d {
    fn from(direction: Direction2d) -> Self {
        Coordinates2d::new(direction.x, direction.y)
    }
}

impl FromStr for Direction2d {
    type Err = ParseCoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse::exactly::<Position, 2>(s)?;
        Ok(Self::new(x, y))
    }
}

/// A step towards one of the 26 neighbours of a 3D grid cell, or nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction3d {
    x: Position,
    y: Position,
    z: Position,
}

macro_rules! direction3d {
    ($($name:ident = ($x:expr, $y:expr, $z:expr);)*) => {
        impl Direction3d {
            $(pub const $name: Self = Self { x: $x, y: $y, z: $z };)*
        }
    };
}

direction3d! {
    ZERO = (0, 0, 0);
    FORWARD = (0, 0, 1);
    BACKWARD = (0, 0, -1);
    UP = (0, 1, 0);
    DOWN = (0, -1, 0);
    LEFT = (-1, 0, 0);
    RIGHT = (1, 0, 0);
    FORWARD_UP = (0, 1, 1);
    FORWARD_DOWN = (0, -1, 1);
    BACKWARD_UP = (0, 1, -1);
    BACKWARD_DOWN = (0, -1, -1);
    LEFT_UP = (-1, 1, 0);
    LEFT_DOWN = (-1, -1, 0);
    RIGHT_UP = (1, 1, 0);
    RIGHT_DOWN = (1, -1, 0);
    FORWARD_LEFT = (-1, 0, 1);
    FORWARD_RIGHT = (1, 0, 1);
    BACKWARD_LEFT = (-1, 0, -1);
    BACKWARD_RIGHT = (1, 0, -1);
}

impl Direction3d {
    /// Build a direction, clamping each axis into -1..=1.
    pub fn new(x: Position, y: Position, z: Position) -> Self {
        Self {
            x: unit(x),
            y: unit(y),
            z: unit(z),
        }
    }

    pub fn x(self) -> Position {
        self.x
    }

    pub fn y(self) -> Position {
        self.y
    }

    pub fn z(self) -> Position {
        self.z
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Enumerates the 26 non-zero directions.
    pub fn all() -> impl Iterator<Item = Self> {
        iproduct!(-1..=1, -1..=1, -1..=1)
            .filter(|(x, y, z)| !(*x == 0 && *y == 0 && *z == 0))
            .map(|(x, y, z)| Self { x, y, z })
    }
}

impl ops::Add for Direction3d {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl ops::Sub for Direction3d {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl ops::Neg for Direction3d {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl fmt::Display for Direction3d {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(Position, Position, Position)> for Direction3d {
    fn from(components: (Position, Position, Position)) -> Self {
        Self::new(components.0, components.1, components.2)
    }
}

impl From<Direction3d> for (Position, Position, Position) {
    fn from(direction: Direction3d) -> Self {
        (direction.x, direction.y, direction.z)
    }
}

impl From<Coordinates3d> for Direction3d {
    fn from(coordinates: Coordinates3d) -> Self {
        Self::new(coordinates.x, coordinates.y, coordinates.z)
    }
}

impl From<Direction3d> for Coordinates3d {
    fn from(direction: Direction3d) -> Self {
        Coordinates3d::new(direction.x, direction.y, direction.z)
    }
}

impl FromStr for Direction3d {
    type Err = ParseCoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse::exactly::<Position, 3>(s)?;
        Ok(Self::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    static EXTREMES: [Position; 7] = [
        Position::MIN,
        -1000,
        -1,
        0,
        1,
        1000,
        Position::MAX,
    ];

    fn hash<T: Hash>(value: T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn is_unit(value: Position) -> bool {
        (-1..=1).contains(&value)
    }

    #[test]
    fn clamped_2d() {
        assert_eq!(Direction2d::new(1000, -1000), Direction2d::new(1, -1));
        assert_eq!(Direction2d::new(1000, -1000), Direction2d::DOWN_RIGHT);

        for (x, y) in iproduct!(EXTREMES.iter(), EXTREMES.iter()) {
            let d = Direction2d::new(*x, *y);
            assert!(is_unit(d.x()) && is_unit(d.y()), "{}", d);
            assert_eq!(d.x(), x.signum());

            let d = Direction2d::from(Coordinates2d::new(*x, *y));
            assert!(is_unit(d.x()) && is_unit(d.y()), "{}", d);

            let d = Direction2d::from((*x, *y));
            assert!(is_unit(d.x()) && is_unit(d.y()), "{}", d);
        }
    }

    #[test]
    fn clamped_3d() {
        for (x, y, z) in iproduct!(EXTREMES.iter(), EXTREMES.iter(), EXTREMES.iter()) {
            let d = Direction3d::new(*x, *y, *z);
            assert!(is_unit(d.x()) && is_unit(d.y()) && is_unit(d.z()), "{}", d);

            let d = Direction3d::from(Coordinates3d::new(*x, *y, *z));
            assert_eq!(
                (d.x(), d.y(), d.z()),
                (x.signum(), y.signum(), z.signum())
            );
        }
    }

    #[test]
    fn saturating_arithmetic_2d() {
        assert_eq!(
            Direction2d::new(5, 5) + Direction2d::new(1, 1),
            Direction2d::new(1, 1)
        );
        assert_eq!(Direction2d::RIGHT + Direction2d::RIGHT, Direction2d::RIGHT);
        assert_eq!(Direction2d::RIGHT + Direction2d::UP, Direction2d::UP_RIGHT);
        assert_eq!(Direction2d::RIGHT + Direction2d::LEFT, Direction2d::ZERO);
        assert_eq!(Direction2d::LEFT - Direction2d::RIGHT, Direction2d::LEFT);
        assert_eq!(Direction2d::UP_LEFT - Direction2d::UP, Direction2d::LEFT);
        assert_eq!(-Direction2d::UP_LEFT, Direction2d::DOWN_RIGHT);
    }

    #[test]
    fn saturating_arithmetic_3d() {
        assert_eq!(
            Direction3d::FORWARD + Direction3d::UP,
            Direction3d::FORWARD_UP
        );
        assert_eq!(
            Direction3d::FORWARD_LEFT + Direction3d::FORWARD,
            Direction3d::FORWARD_LEFT
        );
        assert_eq!(
            Direction3d::BACKWARD - Direction3d::FORWARD,
            Direction3d::BACKWARD
        );
        assert_eq!(-Direction3d::RIGHT_DOWN, Direction3d::LEFT_UP);
    }

    #[test]
    fn enumeration() {
        let flat = Direction2d::all().collect::<Vec<_>>();
        assert_eq!(flat.len(), 8);
        assert!(flat.iter().all(|d| !d.is_zero()));
        assert_eq!(flat.iter().collect::<HashSet<_>>().len(), 8);
        assert_eq!(flat[0], Direction2d::DOWN_LEFT);

        let spatial = Direction3d::all().collect::<HashSet<_>>();
        assert_eq!(spatial.len(), 26);
        assert!(!spatial.contains(&Direction3d::ZERO));
        for named in &[
            Direction3d::FORWARD,
            Direction3d::BACKWARD_RIGHT,
            Direction3d::LEFT_DOWN,
        ] {
            assert!(spatial.contains(named));
        }
    }

    #[test]
    fn coordinates_conversion() {
        let c: Coordinates2d = Direction2d::UP_LEFT.into();
        assert_eq!(c, Coordinates2d::new(-1, 1));
        assert_eq!(Direction2d::from(Coordinates2d::new(7, 0)), Direction2d::RIGHT);

        let c: Coordinates3d = Direction3d::BACKWARD_DOWN.into();
        assert_eq!(c, Coordinates3d::new(0, -1, -1));
        assert_eq!(
            Direction3d::from(Coordinates3d::new(0, -9, 2)),
            Direction3d::FORWARD_DOWN
        );

        for d in Direction2d::all() {
            assert_eq!(Direction2d::from(Coordinates2d::from(d)), d);
        }
        for d in Direction3d::all() {
            assert_eq!(Direction3d::from(Coordinates3d::from(d)), d);
        }
    }

    #[test]
    fn equality_and_hash() {
        for d in Direction2d::all() {
            let copy = Direction2d::new(d.x(), d.y());
            assert_eq!(d, copy);
            assert_eq!(hash(d), hash(copy));
        }
        assert_eq!(hash(Direction2d::new(9, 9)), hash(Direction2d::UP_RIGHT));
        assert_eq!(
            hash(Direction3d::new(-4, 0, 4)),
            hash(Direction3d::FORWARD_LEFT)
        );
    }

    #[test]
    fn text() {
        assert_eq!(&Direction2d::UP_LEFT.to_string(), "(-1, 1)");
        assert_eq!("(-1, 1)".parse::<Direction2d>().unwrap(), Direction2d::UP_LEFT);
        assert_eq!("10, -10".parse::<Direction2d>().unwrap(), Direction2d::DOWN_RIGHT);
        assert_eq!(&Direction3d::FORWARD.to_string(), "(0, 0, 1)");
        assert_eq!(
            "0, 0, 1".parse::<Direction3d>().unwrap(),
            Direction3d::FORWARD
        );
        assert!("1".parse::<Direction2d>().is_err());
    }
}
