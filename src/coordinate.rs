/// Coordinate scalars
///
/// Every coordinate is a primitive integer or float. Integer arithmetic is
/// overflow-checked: a sum that does not fit is an error, never a wrap.
/// Float arithmetic follows IEEE 754 and never reports overflow.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{CheckedAdd, CheckedNeg, CheckedSub, Float, Num, Signed};

use crate::errors::PointError;

/// A numeric value usable as one coordinate of a `Point`.
///
/// `Num` supplies the zero used to pad the shorter operand.
pub trait Coordinate: Num + Copy + Debug + Display + FromStr {
    /// `a + b`, or `None` if the result does not fit.
    fn try_add(self, other: Self) -> Option<Self>;

    /// `a - b`, or `None` if the result does not fit.
    fn try_sub(self, other: Self) -> Option<Self>;

    /// `|a|`, or `None` if the result does not fit (`iN::MIN`).
    fn try_abs(self) -> Option<Self>;

    /// Bit pattern that identifies the value for equality and hashing.
    /// Values that compare equal share a key. Floats map `-0.0` to `0.0`
    /// and every NaN to one key.
    fn canonical_key(self) -> u128;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            fn try_add(self, other: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &other)
            }

            fn try_sub(self, other: Self) -> Option<Self> {
                CheckedSub::checked_sub(&self, &other)
            }

            fn try_abs(self) -> Option<Self> {
                if Signed::is_negative(&self) {
                    CheckedNeg::checked_neg(&self)
                } else {
                    Some(self)
                }
            }

            fn canonical_key(self) -> u128 {
                self as u128
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            fn try_add(self, other: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &other)
            }

            fn try_sub(self, other: Self) -> Option<Self> {
                CheckedSub::checked_sub(&self, &other)
            }

            fn try_abs(self) -> Option<Self> {
                Some(self)
            }

            fn canonical_key(self) -> u128 {
                self as u128
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            fn try_add(self, other: Self) -> Option<Self> {
                Some(self + other)
            }

            fn try_sub(self, other: Self) -> Option<Self> {
                Some(self - other)
            }

            fn try_abs(self) -> Option<Self> {
                Some(Float::abs(self))
            }

            fn canonical_key(self) -> u128 {
                if Float::is_nan(self) {
                    <$t>::NAN.to_bits() as u128
                } else if self == 0.0 {
                    0
                } else {
                    self.to_bits() as u128
                }
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

/// Checked coordinate addition. Reports the operands on overflow.
pub fn add<T: Coordinate>(a: T, b: T) -> Result<T, PointError> {
    a.try_add(b)
        .ok_or_else(|| PointError::overflow(format!("{} + {}", a, b)))
}

/// Checked coordinate subtraction. Reports the operands on overflow.
pub fn sub<T: Coordinate>(a: T, b: T) -> Result<T, PointError> {
    a.try_sub(b)
        .ok_or_else(|| PointError::overflow(format!("{} - {}", a, b)))
}

/// Checked absolute value. Reports the operand on overflow.
pub fn abs<T: Coordinate>(a: T) -> Result<T, PointError> {
    a.try_abs()
        .ok_or_else(|| PointError::overflow(format!("abs({})", a)))
}
