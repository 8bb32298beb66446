#![forbid(unsafe_code)]

//! Immutable n-dimensional Cartesian points.
//!
//! A [`Point`] holds one or more numeric coordinates and supports
//! component-wise `+`, `-`, and `abs`, with the shorter operand read as
//! zero-padded. [`Point::cartesian_product`] lazily enumerates every point
//! whose coordinates are drawn one from each factor.
//!
//! ```
//! use cartesian_point::point;
//!
//! let p = point![1, 2] + point![1, 2, 3];
//! assert_eq!(p, point![2, 4, 3]);
//! assert_eq!(p.to_string(), "(2, 4, 3)");
//! assert_eq!(format!("{:?}", p), "Point(2, 4, 3)");
//! ```

/// Crate version, reported by the fixture harness.
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod coordinate;
pub mod errors;
pub mod point;
pub mod product;
pub mod parse;
pub mod fixtures;

pub use coordinate::Coordinate;
pub use errors::{Operation, PointError};
pub use point::{Point, MIN_DIMENSIONS};
pub use product::CartesianProduct;

/// Build a point from one or more coordinates.
///
/// ```
/// use cartesian_point::point;
/// let p = point![1.0, -2.5];
/// assert_eq!(p.number_of_dimensions(), 2);
/// ```
///
/// At least one coordinate is required:
///
/// ```compile_fail
/// let _ = cartesian_point::point![];
/// ```
#[macro_export]
macro_rules! point {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::Point::__from_parts($first, ::std::vec![$($rest),*])
    };
}
