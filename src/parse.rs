//! Parsing points back from their string forms.
//!
//! Both `(1, 2)` and `Point(1, 2)` are accepted, so the `Debug` output of a
//! point parses to an equal point.

use std::fmt::Display;
use std::str::FromStr;

use crate::coordinate::Coordinate;
use crate::errors::PointError;
use crate::point::Point;

const TYPE_NAME: &str = "Point";

impl<T> FromStr for Point<T>
where
    T: Coordinate,
    <T as FromStr>::Err: Display,
{
    type Err = PointError;

    fn from_str(input: &str) -> Result<Self, PointError> {
        let trimmed = input.trim();
        let body = trimmed.strip_prefix(TYPE_NAME).unwrap_or(trimmed).trim_start();
        let inner = body
            .strip_prefix('(')
            .and_then(|b| b.strip_suffix(')'))
            .ok_or_else(|| PointError::parse(input, "expected `(..)` or `Point(..)`"))?
            .trim();

        if inner.is_empty() {
            return Err(PointError::NoCoordinates);
        }
        let inner = inner.strip_suffix(',').unwrap_or(inner);

        let mut coordinates = Vec::new();
        for (i, part) in inner.split(',').enumerate() {
            let part = part.trim();
            if part.is_empty() {
                return Err(PointError::parse(input, format!("coordinate {} is empty", i)));
            }
            let value = part.parse::<T>().map_err(|e| {
                PointError::parse(input, format!("coordinate {} ({:?}): {}", i, part, e))
            })?;
            coordinates.push(value);
        }
        Point::new(coordinates)
    }
}
