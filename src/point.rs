//! Immutable n-dimensional Cartesian point.
//!
//! A point owns its coordinates and never hands out mutable access to them.
//! Every arithmetic operation returns a new point.
//!
//! Operands of different lengths are reconciled by treating the missing
//! trailing coordinates of the shorter one as zero.
//!
//! Ordering and multiplication have no geometric meaning for a point.
//! `PartialOrd` and `Mul` are deliberately absent, so these do not compile:
//!
//! ```compile_fail
//! use cartesian_point::point;
//! let _ = point![1, 2] < point![3, 4];
//! ```
//!
//! ```compile_fail
//! use cartesian_point::point;
//! let _ = point![1, 2] * point![3, 4];
//! ```
//!
//! The named methods (`lt`, `mul`, `count`, ...) remain callable and always
//! return `PointError::Unsupported`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index, Sub};

use crate::coordinate::{self, Coordinate};
use crate::errors::{Operation, PointError};
use crate::product::CartesianProduct;

/// Smallest number of coordinates a point may hold.
pub const MIN_DIMENSIONS: usize = 1;

/// An immutable point of one or more numeric coordinates.
///
/// Equality and hashing compare coordinates through
/// `Coordinate::canonical_key`, so float points are usable as map keys:
/// `-0.0` equals `0.0`, and a NaN coordinate equals any other NaN.
#[derive(Clone)]
pub struct Point<T> {
    coordinates: Box<[T]>,
}

// ── Construction ───────────────────────────────────────────────────

impl<T: Coordinate> Point<T> {
    /// Create a point from its coordinates, in order.
    ///
    /// # Example
    /// ```
    /// use cartesian_point::{Point, PointError};
    /// let p = Point::new(vec![1, 2, 3]).unwrap();
    /// assert_eq!(p.number_of_dimensions(), 3);
    /// assert_eq!(Point::<i32>::new(vec![]), Err(PointError::NoCoordinates));
    /// ```
    pub fn new(coordinates: Vec<T>) -> Result<Self, PointError> {
        if coordinates.len() < MIN_DIMENSIONS {
            return Err(PointError::NoCoordinates);
        }
        Ok(Self::from_nonempty(coordinates))
    }

    /// Backs `point!`: the leading coordinate makes the point non-empty.
    #[doc(hidden)]
    pub fn __from_parts(first: T, rest: Vec<T>) -> Self {
        let mut coordinates = Vec::with_capacity(rest.len() + 1);
        coordinates.push(first);
        coordinates.extend(rest);
        Self::from_nonempty(coordinates)
    }

    /// Caller guarantees at least one coordinate.
    pub(crate) fn from_nonempty(coordinates: Vec<T>) -> Self {
        debug_assert!(coordinates.len() >= MIN_DIMENSIONS);
        Self {
            coordinates: coordinates.into_boxed_slice(),
        }
    }

    /// Lazily yield one point per tuple of the Cartesian product of
    /// `factors`. The rightmost factor varies fastest.
    ///
    /// # Example
    /// ```
    /// use cartesian_point::{point, Point};
    /// let product: Vec<_> = Point::cartesian_product([point![1, 2], point![3, 4]])
    ///     .unwrap()
    ///     .collect();
    /// assert_eq!(
    ///     product,
    ///     vec![point![1, 3], point![1, 4], point![2, 3], point![2, 4]]
    /// );
    /// ```
    pub fn cartesian_product<I, S>(factors: I) -> Result<CartesianProduct<T>, PointError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
    {
        let factors: Vec<Vec<T>> = factors
            .into_iter()
            .map(|factor| factor.as_ref().to_vec())
            .collect();
        CartesianProduct::new(factors)
    }
}

// ── Accessors ──────────────────────────────────────────────────────

impl<T: Coordinate> Point<T> {
    /// Number of coordinates. Always at least one.
    pub fn number_of_dimensions(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &[T] {
        &self.coordinates
    }

    /// Coordinate at `axis`, if the point has that many dimensions.
    pub fn get(&self, axis: usize) -> Option<T> {
        self.coordinates.get(axis).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coordinates.iter()
    }

    pub fn into_coordinates(self) -> Vec<T> {
        self.coordinates.into_vec()
    }

    /// First coordinate. Every point has one.
    pub fn x(&self) -> T {
        self.coordinates[0]
    }

    /// Second coordinate.
    pub fn y(&self) -> Result<T, PointError> {
        self.axis('y', 1)
    }

    /// Third coordinate.
    pub fn z(&self) -> Result<T, PointError> {
        self.axis('z', 2)
    }

    fn axis(&self, name: char, axis: usize) -> Result<T, PointError> {
        self.get(axis).ok_or(PointError::DimensionOutOfRange {
            axis: name,
            dimensions: self.number_of_dimensions(),
        })
    }
}

// ── Arithmetic ─────────────────────────────────────────────────────

impl<T: Coordinate> Point<T> {
    /// `self + other`, component-wise, zero-padding the shorter operand.
    ///
    /// # Example
    /// ```
    /// use cartesian_point::point;
    /// assert_eq!(point![1, 2].checked_add([1, 2, 3]).unwrap(), point![2, 4, 3]);
    /// assert!(point![i8::MAX].checked_add([1]).is_err());
    /// ```
    pub fn checked_add<R: AsRef<[T]>>(&self, other: R) -> Result<Self, PointError> {
        zip_padded(&self.coordinates, other.as_ref(), coordinate::add)
    }

    /// `self - other`, component-wise, zero-padding the shorter operand.
    pub fn checked_sub<R: AsRef<[T]>>(&self, other: R) -> Result<Self, PointError> {
        zip_padded(&self.coordinates, other.as_ref(), coordinate::sub)
    }

    /// `other - self`, component-wise, zero-padding the shorter operand.
    pub fn checked_rsub<R: AsRef<[T]>>(&self, other: R) -> Result<Self, PointError> {
        zip_padded(other.as_ref(), &self.coordinates, coordinate::sub)
    }

    /// Reflected addition: `other + self`. Equal to `self + other`.
    ///
    /// # Panics
    /// If an integer coordinate sum overflows.
    pub fn radd<R: AsRef<[T]>>(&self, other: R) -> Self {
        or_panic(zip_padded(other.as_ref(), &self.coordinates, coordinate::add))
    }

    /// Reflected subtraction: `other - self`.
    ///
    /// # Panics
    /// If an integer coordinate difference overflows. See `checked_rsub`.
    ///
    /// # Example
    /// ```
    /// use cartesian_point::point;
    /// assert_eq!(point![2, 1].rsub([5, 5]), point![3, 4]);
    /// ```
    pub fn rsub<R: AsRef<[T]>>(&self, other: R) -> Self {
        or_panic(self.checked_rsub(other))
    }

    /// Component-wise absolute value, or an error if a coordinate has no
    /// representable absolute value (`iN::MIN`).
    pub fn checked_abs(&self) -> Result<Self, PointError> {
        let coordinates = self
            .coordinates
            .iter()
            .map(|&c| coordinate::abs(c))
            .collect::<Result<Vec<T>, PointError>>()?;
        Ok(Self::from_nonempty(coordinates))
    }

    /// The point reflected into the first orthant: every coordinate is
    /// replaced by its absolute value.
    ///
    /// # Panics
    /// If a coordinate is `iN::MIN`. See `checked_abs`.
    pub fn abs(&self) -> Self {
        or_panic(self.checked_abs())
    }
}

/// Combine two coordinate slices element-wise over the longer length,
/// reading missing trailing coordinates as zero.
fn zip_padded<T, F>(lhs: &[T], rhs: &[T], op: F) -> Result<Point<T>, PointError>
where
    T: Coordinate,
    F: Fn(T, T) -> Result<T, PointError>,
{
    let len = lhs.len().max(rhs.len());
    let mut coordinates = Vec::with_capacity(len);
    for i in 0..len {
        let a = lhs.get(i).copied().unwrap_or_else(T::zero);
        let b = rhs.get(i).copied().unwrap_or_else(T::zero);
        coordinates.push(op(a, b)?);
    }
    Point::new(coordinates)
}

/// Operators have no error channel. Overflow panics like the checked
/// integer primitives do.
fn or_panic<T>(result: Result<Point<T>, PointError>) -> Point<T> {
    match result {
        Ok(point) => point,
        Err(err) => panic!("{}", err),
    }
}

/// Component-wise sum, zero-padding the shorter operand.
///
/// # Panics
/// If an integer coordinate sum overflows. `checked_add` reports it instead.
///
/// ```should_panic
/// use cartesian_point::point;
/// let _ = point![i64::MAX] + point![1];
/// ```
impl<T: Coordinate, R: AsRef<[T]>> Add<R> for Point<T> {
    type Output = Point<T>;

    fn add(self, rhs: R) -> Point<T> {
        or_panic(self.checked_add(rhs))
    }
}

/// # Panics
/// If an integer coordinate sum overflows.
impl<T: Coordinate, R: AsRef<[T]>> Add<R> for &Point<T> {
    type Output = Point<T>;

    fn add(self, rhs: R) -> Point<T> {
        or_panic(self.checked_add(rhs))
    }
}

/// Component-wise difference, zero-padding the shorter operand.
///
/// # Panics
/// If an integer coordinate difference overflows. `checked_sub` reports it
/// instead.
impl<T: Coordinate, R: AsRef<[T]>> Sub<R> for Point<T> {
    type Output = Point<T>;

    fn sub(self, rhs: R) -> Point<T> {
        or_panic(self.checked_sub(rhs))
    }
}

/// # Panics
/// If an integer coordinate difference overflows.
impl<T: Coordinate, R: AsRef<[T]>> Sub<R> for &Point<T> {
    type Output = Point<T>;

    fn sub(self, rhs: R) -> Point<T> {
        or_panic(self.checked_sub(rhs))
    }
}

// ── Disabled sequence operations ───────────────────────────────────

#[allow(clippy::should_implement_trait)]
impl<T: Coordinate> Point<T> {
    /// Not defined for points.
    pub fn count(&self, _value: T) -> Result<usize, PointError> {
        Err(PointError::Unsupported(Operation::Count))
    }

    /// Not defined for points. Positional access is `get` or `[]`.
    pub fn index(&self, _value: T) -> Result<usize, PointError> {
        Err(PointError::Unsupported(Operation::Index))
    }

    /// Not defined for points.
    pub fn lt(&self, _other: &Self) -> Result<bool, PointError> {
        Err(PointError::Unsupported(Operation::LessThan))
    }

    /// Not defined for points.
    pub fn le(&self, _other: &Self) -> Result<bool, PointError> {
        Err(PointError::Unsupported(Operation::LessOrEqual))
    }

    /// Not defined for points.
    pub fn gt(&self, _other: &Self) -> Result<bool, PointError> {
        Err(PointError::Unsupported(Operation::GreaterThan))
    }

    /// Not defined for points.
    pub fn ge(&self, _other: &Self) -> Result<bool, PointError> {
        Err(PointError::Unsupported(Operation::GreaterOrEqual))
    }

    /// Not defined for points, whatever the operand.
    pub fn mul<R>(&self, _other: R) -> Result<Self, PointError> {
        Err(PointError::Unsupported(Operation::Multiply))
    }

    /// Not defined for points, whatever the operand.
    pub fn rmul<R>(&self, _other: R) -> Result<Self, PointError> {
        Err(PointError::Unsupported(Operation::ReflectedMultiply))
    }
}

// ── Equality and hashing ───────────────────────────────────────────

impl<T: Coordinate> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates.len() == other.coordinates.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(&a, &b)| a.canonical_key() == b.canonical_key())
    }
}

impl<T: Coordinate> Eq for Point<T> {}

impl<T: Coordinate> Hash for Point<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.coordinates.len());
        for &c in self.iter() {
            c.canonical_key().hash(state);
        }
    }
}

// ── Conversions ────────────────────────────────────────────────────

/// A bare value is a one-dimensional point.
impl<T: Coordinate> From<T> for Point<T> {
    fn from(value: T) -> Self {
        Self::from_nonempty(vec![value])
    }
}

impl<T: Coordinate> TryFrom<Vec<T>> for Point<T> {
    type Error = PointError;

    fn try_from(coordinates: Vec<T>) -> Result<Self, PointError> {
        Self::new(coordinates)
    }
}

impl<T: Coordinate> TryFrom<&[T]> for Point<T> {
    type Error = PointError;

    fn try_from(coordinates: &[T]) -> Result<Self, PointError> {
        Self::new(coordinates.to_vec())
    }
}

impl<T: Coordinate, const N: usize> TryFrom<[T; N]> for Point<T> {
    type Error = PointError;

    fn try_from(coordinates: [T; N]) -> Result<Self, PointError> {
        Self::new(coordinates.to_vec())
    }
}

impl<T> AsRef<[T]> for Point<T> {
    fn as_ref(&self) -> &[T] {
        &self.coordinates
    }
}

impl<T> Index<usize> for Point<T> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        &self.coordinates[axis]
    }
}

impl<'a, T> IntoIterator for &'a Point<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl<T> IntoIterator for Point<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.into_vec().into_iter()
    }
}

// ── String forms ───────────────────────────────────────────────────

fn write_coordinates<T: fmt::Display>(f: &mut fmt::Formatter<'_>, coordinates: &[T]) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in coordinates.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str(")")
}

/// `(1, 2, 3)`
impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coordinates(f, &self.coordinates)
    }
}

/// `Point(1, 2, 3)`
impl<T: fmt::Display> fmt::Debug for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Point")?;
        write_coordinates(f, &self.coordinates)
    }
}
