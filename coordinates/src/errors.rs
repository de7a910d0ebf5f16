//! Errors raised while reading values from text.

use thiserror::Error;

/// Error when parsing coordinates, directions or vectors from a string.
#[derive(Debug, Error, PartialEq)]
pub enum ParseCoordinatesError {
    #[error("Invalid coordinates: {0}")]
    InvalidLiteral(String),

    #[error("Expected {expected} components, found {found}")]
    WrongDimension { expected: usize, found: usize },

    #[error("Invalid Number Literal")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid Float Literal")]
    InvalidFloat(#[from] std::num::ParseFloatError),
}

pub type Result<T> = ::std::result::Result<T, ParseCoordinatesError>;
