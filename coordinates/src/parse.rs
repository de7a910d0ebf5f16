//! Textual form shared by every value type: a comma separated list,
//! optionally wrapped in parentheses, e.g. `3, 4` or `(1, -1, 0)`.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{ParseCoordinatesError, Result};

lazy_static! {
    static ref TUPLE: Regex =
        Regex::new(r"^\s*(?:\((?P<inner>[^()]*)\)|(?P<bare>[^()]*))\s*$").unwrap();
}

/// Split a literal into its components, whatever their number.
pub fn components<T>(s: &str) -> Result<Vec<T>>
where
    T: FromStr,
    ParseCoordinatesError: From<T::Err>,
{
    let cap = match TUPLE.captures(s) {
        None => return Err(ParseCoordinatesError::InvalidLiteral(s.to_string())),
        Some(c) => c,
    };

    let body = cap
        .name("inner")
        .or_else(|| cap.name("bare"))
        .map(|m| m.as_str())
        .unwrap_or_default();

    if body.trim().is_empty() {
        return Err(ParseCoordinatesError::InvalidLiteral(s.to_string()));
    }

    body.split(',')
        .map(|part| part.trim().parse::<T>().map_err(ParseCoordinatesError::from))
        .collect()
}

/// Split a literal into exactly `N` components.
pub fn exactly<T, const N: usize>(s: &str) -> Result<[T; N]>
where
    T: FromStr + Copy + Default,
    ParseCoordinatesError: From<T::Err>,
{
    let values = components::<T>(s)?;
    if values.len() != N {
        return Err(ParseCoordinatesError::WrongDimension {
            expected: N,
            found: values.len(),
        });
    }

    let mut out = [T::default(); N];
    out.copy_from_slice(&values);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_and_parenthesised() {
        assert_eq!(components::<i32>("3, 4").unwrap(), vec![3, 4]);
        assert_eq!(components::<i32>("3,4").unwrap(), vec![3, 4]);
        assert_eq!(components::<i32>(" (1, -1, 0) ").unwrap(), vec![1, -1, 0]);
        assert_eq!(components::<f32>("0.5,-1.25").unwrap(), vec![0.5, -1.25]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            components::<i32>(""),
            Err(ParseCoordinatesError::InvalidLiteral(_))
        ));
        assert!(matches!(
            components::<i32>("(1, 2"),
            Err(ParseCoordinatesError::InvalidLiteral(_))
        ));
        assert!(matches!(
            components::<i32>("1, x"),
            Err(ParseCoordinatesError::InvalidNumber(_))
        ));
        assert!(matches!(
            components::<i32>("99999999999, 0"),
            Err(ParseCoordinatesError::InvalidNumber(_))
        ));
        assert!(matches!(
            components::<f32>("1.0, nope"),
            Err(ParseCoordinatesError::InvalidFloat(_))
        ));
    }

    #[test]
    fn exact_dimension() {
        assert_eq!(exactly::<i32, 2>("1, 2").unwrap(), [1, 2]);
        assert_eq!(
            exactly::<i32, 2>("1, 2, 3"),
            Err(ParseCoordinatesError::WrongDimension {
                expected: 2,
                found: 3
            })
        );
    }
}
