//! Lazy Cartesian product of point-like coordinate sequences.
//!
//! The iterator keeps one cursor per factor and advances them like an
//! odometer: the rightmost cursor turns fastest. Only the current tuple is
//! materialized, so a caller may take a prefix of a huge product cheaply.

use std::iter::FusedIterator;

use crate::coordinate::Coordinate;
use crate::errors::PointError;
use crate::point::Point;

/// Iterator over the Cartesian product of several coordinate sequences.
///
/// Cloning yields an independent iterator at the same position;
/// `restart` rewinds to the first tuple.
#[derive(Debug, Clone)]
pub struct CartesianProduct<T> {
    factors: Vec<Vec<T>>,
    cursor: Vec<usize>,
    exhausted: bool,
}

impl<T: Coordinate> CartesianProduct<T> {
    pub(crate) fn new(factors: Vec<Vec<T>>) -> Result<Self, PointError> {
        if factors.is_empty() {
            return Err(PointError::NoFactors);
        }
        let exhausted = factors.iter().any(|f| f.is_empty());
        Ok(Self {
            cursor: vec![0; factors.len()],
            factors,
            exhausted,
        })
    }

    /// Number of factors, which is the dimensionality of every yielded point.
    pub fn arity(&self) -> usize {
        self.factors.len()
    }

    /// Total number of points the full product yields, or `None` if the
    /// count does not fit in `usize`.
    pub fn total(&self) -> Option<usize> {
        self.factors
            .iter()
            .try_fold(1usize, |acc, f| acc.checked_mul(f.len()))
    }

    /// Points not yet yielded, or `None` if the count does not fit in `usize`.
    pub fn remaining(&self) -> Option<usize> {
        if self.exhausted {
            return Some(0);
        }
        // Tuples strictly after the cursor, in mixed radix, plus the cursor itself.
        let mut after = 0usize;
        let mut stride = 1usize;
        for (factor, &pos) in self.factors.iter().zip(&self.cursor).rev() {
            let left = factor.len() - 1 - pos;
            after = left.checked_mul(stride)?.checked_add(after)?;
            stride = stride.checked_mul(factor.len())?;
        }
        after.checked_add(1)
    }

    /// Rewind to the first tuple.
    pub fn restart(&mut self) {
        self.cursor.iter_mut().for_each(|c| *c = 0);
        self.exhausted = self.factors.iter().any(|f| f.is_empty());
    }

    fn advance(&mut self) {
        for (pos, factor) in self.cursor.iter_mut().zip(&self.factors).rev() {
            *pos += 1;
            if *pos < factor.len() {
                return;
            }
            *pos = 0;
        }
        self.exhausted = true;
    }
}

impl<T: Coordinate> Iterator for CartesianProduct<T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Point<T>> {
        if self.exhausted {
            return None;
        }
        let coordinates: Vec<T> = self
            .cursor
            .iter()
            .zip(&self.factors)
            .map(|(&pos, factor)| factor[pos])
            .collect();
        self.advance();
        Some(Point::from_nonempty(coordinates))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Coordinate> FusedIterator for CartesianProduct<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;

    #[test]
    fn test_two_factors_in_nested_loop_order() {
        let out: Vec<Point<i32>> = Point::cartesian_product([point![1, 2], point![3, 4]])
            .unwrap()
            .collect();
        assert_eq!(out, vec![point![1, 3], point![1, 4], point![2, 3], point![2, 4]]);
    }

    #[test]
    fn test_three_factors_of_mixed_length() {
        let out: Vec<String> = Point::cartesian_product([vec![1, 2], vec![3], vec![4, 5, 6]])
            .unwrap()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(
            out,
            vec![
                "(1, 3, 4)", "(1, 3, 5)", "(1, 3, 6)",
                "(2, 3, 4)", "(2, 3, 5)", "(2, 3, 6)",
            ]
        );
    }

    #[test]
    fn test_single_factor() {
        let out: Vec<Point<i32>> = Point::cartesian_product([point![7, 8]]).unwrap().collect();
        assert_eq!(out, vec![point![7], point![8]]);
    }

    #[test]
    fn test_no_factors_rejected() {
        let factors: Vec<Point<i32>> = Vec::new();
        assert_eq!(
            Point::cartesian_product(factors).unwrap_err(),
            PointError::NoFactors
        );
    }

    #[test]
    fn test_empty_factor_yields_nothing() {
        let empty: &[i32] = &[];
        let mut product = Point::cartesian_product([&[1, 2][..], empty]).unwrap();
        assert_eq!(product.total(), Some(0));
        assert_eq!(product.size_hint(), (0, Some(0)));
        assert_eq!(product.next(), None);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut product = Point::cartesian_product([vec![1, 2, 3], vec![4, 5]]).unwrap();
        assert_eq!(product.arity(), 2);
        assert_eq!(product.total(), Some(6));
        for expected in (1..=6).rev() {
            assert_eq!(product.size_hint(), (expected, Some(expected)));
            assert!(product.next().is_some());
        }
        assert_eq!(product.remaining(), Some(0));
        assert_eq!(product.next(), None);
        assert_eq!(product.next(), None);
    }

    #[test]
    fn test_restart_and_clone() {
        let mut product = Point::cartesian_product([point![1, 2], point![3, 4]]).unwrap();
        let fresh = product.clone();
        let first: Vec<Point<i32>> = product.by_ref().collect();
        assert_eq!(product.next(), None);

        product.restart();
        let second: Vec<Point<i32>> = product.collect();
        assert_eq!(first, second);
        assert_eq!(fresh.collect::<Vec<_>>(), first);
    }

    #[test]
    fn test_prefix_of_huge_product_is_cheap() {
        let wide: Vec<u32> = (0..1000).collect();
        let product = Point::cartesian_product([&wide, &wide, &wide, &wide]).unwrap();
        assert_eq!(product.total(), Some(1_000_000_000_000));
        let head: Vec<Point<u32>> = product.take(3).collect();
        assert_eq!(head, vec![point![0, 0, 0, 0], point![0, 0, 0, 1], point![0, 0, 0, 2]]);
    }

    #[test]
    fn test_total_overflow_is_none() {
        let wide: Vec<u8> = vec![0; 1 << 16];
        let factors = vec![wide.as_slice(); 5];
        let product = Point::cartesian_product(factors).unwrap();
        assert_eq!(product.total(), None);
        assert_eq!(product.size_hint(), (usize::MAX, None));
    }
}
