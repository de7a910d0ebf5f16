//! The operations reachable from the command line.
//!
//! Each takes its raw arguments and returns the rendered result. The
//! dimension of every value is inferred from its number of components.

use anyhow::Error;
use tracing::trace;

use coordinates::{Coordinates2d, Coordinates3d, Position};

use crate::lattice::{Lattice, Step, Vector};
use crate::CyanError;

type Result<T> = ::std::result::Result<T, Error>;

fn arity(operation: &'static str, args: &[&str], min: usize, max: usize) -> Result<()> {
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{} to {}", min, max)
        };
        return Err(CyanError::WrongArgumentCount {
            operation,
            expected,
            found: args.len(),
        }
        .into());
    }
    Ok(())
}

fn mismatch(dimensions: &[usize]) -> Error {
    CyanError::MismatchedDimensions(dimensions.to_vec()).into()
}

fn lattice(arg: &str) -> Result<Lattice> {
    let value = arg.parse::<Lattice>()?;
    trace!(%value, "parsed coordinates");
    Ok(value)
}

fn multiplier(args: &[&str], index: usize) -> Result<Position> {
    Ok(args
        .get(index)
        .map(|n| n.parse::<Position>())
        .transpose()?
        .unwrap_or(1))
}

fn lines<T: ToString>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn distance(args: &[&str]) -> Result<String> {
    arity("distance", args, 2, 2)?;
    let distance = match (lattice(args[0])?, lattice(args[1])?) {
        (Lattice::Flat(a), Lattice::Flat(b)) => a.distance_to(b),
        (Lattice::Spatial(a), Lattice::Spatial(b)) => a.distance_to(b),
        (a, b) => return Err(mismatch(&[a.dimension(), b.dimension()])),
    };
    Ok(distance.to_string())
}

pub(crate) fn angle(args: &[&str]) -> Result<String> {
    arity("angle", args, 2, 2)?;
    let angle = match (lattice(args[0])?, lattice(args[1])?) {
        (Lattice::Flat(a), Lattice::Flat(b)) => a.angle_to(b),
        (Lattice::Spatial(a), Lattice::Spatial(b)) => a.angle_to(b),
        (a, b) => return Err(mismatch(&[a.dimension(), b.dimension()])),
    };
    Ok(angle.to_string())
}

pub(crate) fn direction(args: &[&str]) -> Result<String> {
    arity("direction", args, 2, 2)?;
    match (lattice(args[0])?, lattice(args[1])?) {
        (Lattice::Flat(a), Lattice::Flat(b)) => Ok(a.direction_to(b).to_string()),
        (Lattice::Spatial(a), Lattice::Spatial(b)) => Ok(a.direction_to(b).to_string()),
        (a, b) => Err(mismatch(&[a.dimension(), b.dimension()])),
    }
}

pub(crate) fn step(args: &[&str]) -> Result<String> {
    arity("step", args, 2, 3)?;
    let n = multiplier(args, 2)?;
    let moved = match (lattice(args[0])?, args[1].parse::<Step>()?) {
        (Lattice::Flat(c), Step::Flat(d)) => Lattice::Flat(c.add_direction_multiple(d, n)),
        (Lattice::Spatial(c), Step::Spatial(d)) => Lattice::Spatial(c.add_direction_multiple(d, n)),
        (c, d) => return Err(mismatch(&[c.dimension(), d.dimension()])),
    };
    Ok(moved.to_string())
}

pub(crate) fn back(args: &[&str]) -> Result<String> {
    arity("back", args, 2, 3)?;
    let n = multiplier(args, 2)?;
    let moved = match (lattice(args[0])?, args[1].parse::<Step>()?) {
        (Lattice::Flat(c), Step::Flat(d)) => Lattice::Flat(c.subtract_direction_multiple(d, n)),
        (Lattice::Spatial(c), Step::Spatial(d)) => {
            Lattice::Spatial(c.subtract_direction_multiple(d, n))
        }
        (c, d) => return Err(mismatch(&[c.dimension(), d.dimension()])),
    };
    Ok(moved.to_string())
}

pub(crate) fn clamp(args: &[&str]) -> Result<String> {
    arity("clamp", args, 3, 3)?;
    let clamped = match (lattice(args[0])?, lattice(args[1])?, lattice(args[2])?) {
        (Lattice::Flat(c), Lattice::Flat(lo), Lattice::Flat(hi)) => {
            Lattice::Flat(c.clamp(lo.x, hi.x, lo.y, hi.y))
        }
        (Lattice::Spatial(c), Lattice::Spatial(lo), Lattice::Spatial(hi)) => {
            Lattice::Spatial(c.clamp(lo.x, hi.x, lo.y, hi.y, lo.z, hi.z))
        }
        (c, lo, hi) => return Err(mismatch(&[c.dimension(), lo.dimension(), hi.dimension()])),
    };
    Ok(clamped.to_string())
}

pub(crate) fn inside(args: &[&str]) -> Result<String> {
    arity("inside", args, 3, 3)?;
    let inside = match (lattice(args[0])?, lattice(args[1])?, lattice(args[2])?) {
        (Lattice::Flat(c), Lattice::Flat(lo), Lattice::Flat(hi)) => {
            c.is_inside(lo.x, hi.x, lo.y, hi.y)
        }
        (Lattice::Spatial(c), Lattice::Spatial(lo), Lattice::Spatial(hi)) => {
            c.is_inside(lo.x, hi.x, lo.y, hi.y, lo.z, hi.z)
        }
        (c, lo, hi) => return Err(mismatch(&[c.dimension(), lo.dimension(), hi.dimension()])),
    };
    Ok(inside.to_string())
}

pub(crate) fn snap(args: &[&str]) -> Result<String> {
    arity("snap", args, 1, 1)?;
    match args[0].parse::<Step>()? {
        Step::Flat(d) => Ok(d.to_string()),
        Step::Spatial(d) => Ok(d.to_string()),
    }
}

pub(crate) fn horizontal(args: &[&str]) -> Result<String> {
    arity("horizontal", args, 1, 1)?;
    let converted = match lattice(args[0])? {
        Lattice::Flat(c) => Lattice::Spatial(c.to_coordinates3d_horizontal()),
        Lattice::Spatial(c) => Lattice::Flat(c.to_coordinates2d_horizontal()),
    };
    Ok(converted.to_string())
}

pub(crate) fn vertical(args: &[&str]) -> Result<String> {
    arity("vertical", args, 1, 1)?;
    let converted = match lattice(args[0])? {
        Lattice::Flat(c) => Lattice::Spatial(c.to_coordinates3d_vertical()),
        Lattice::Spatial(c) => Lattice::Flat(c.to_coordinates2d_vertical()),
    };
    Ok(converted.to_string())
}

pub(crate) fn neighbors(args: &[&str]) -> Result<String> {
    arity("neighbors", args, 1, 1)?;
    match lattice(args[0])? {
        Lattice::Flat(c) => Ok(lines(c.neighbors())),
        Lattice::Spatial(c) => Ok(lines(c.neighbors())),
    }
}

pub(crate) fn floor(args: &[&str]) -> Result<String> {
    arity("floor", args, 1, 1)?;
    match args[0].parse::<Vector>()? {
        Vector::Flat(v) => Ok(Coordinates2d::from_vector(v).to_string()),
        Vector::Spatial(v) => Ok(Coordinates3d::from_vector(v).to_string()),
    }
}

pub(crate) fn translate(args: &[&str]) -> Result<String> {
    arity("translate", args, 2, 2)?;
    match (args[0].parse::<Vector>()?, lattice(args[1])?) {
        (Vector::Flat(v), Lattice::Flat(c)) => Ok(v.add_coordinates(c).to_string()),
        (Vector::Spatial(v), Lattice::Spatial(c)) => Ok(v.add_coordinates(c).to_string()),
        (v, c) => Err(mismatch(&[v.dimension(), c.dimension()])),
    }
}
