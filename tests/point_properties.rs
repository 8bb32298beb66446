//! Algebraic properties of points over hand-picked operand sets.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use cartesian_point::{point, Operation, Point, PointError};

fn samples() -> Vec<Point<i64>> {
    vec![
        point![0],
        point![1, 2],
        point![1, 2, 3],
        point![-5, 0, 7, -9],
        point![i64::from(i32::MAX), i64::from(i32::MIN)],
        point![3, -3, 3, -3, 3],
    ]
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn addition_commutes() {
    for a in samples() {
        for b in samples() {
            assert_eq!(&a + &b, &b + &a, "{} + {}", a, b);
            assert_eq!(a.radd(&b), &a + &b, "radd {} {}", a, b);
        }
    }
}

#[test]
fn result_length_is_longest_operand() {
    for a in samples() {
        for b in samples() {
            let expected = a.number_of_dimensions().max(b.number_of_dimensions());
            assert_eq!((&a + &b).number_of_dimensions(), expected);
            assert_eq!((&a - &b).number_of_dimensions(), expected);
        }
    }
}

#[test]
fn self_subtraction_is_origin() {
    for p in samples() {
        let zero = &p - &p;
        assert_eq!(zero.number_of_dimensions(), p.number_of_dimensions());
        assert!(zero.iter().all(|&c| c == 0), "{} - itself = {}", p, zero);
    }
}

#[test]
fn reflected_subtraction_is_negated_subtraction() {
    for a in samples() {
        for b in samples() {
            let forward = &b - &a;
            assert_eq!(a.rsub(&b), forward, "{} rsub {}", a, b);
        }
    }
}

#[test]
fn abs_is_non_negative_and_idempotent() {
    for p in samples() {
        let reflected = p.abs();
        assert!(reflected.iter().all(|&c| c >= 0), "abs({}) = {}", p, reflected);
        assert_eq!(reflected.abs(), reflected);
    }
}

#[test]
fn canonical_examples() {
    assert_eq!(point![1, 2] + point![1, 2, 3], point![2, 4, 3]);
    assert_eq!(point![5, 5] - point![2, 1], point![3, 4]);

    let product: Vec<Point<i32>> = Point::cartesian_product([point![1, 2], point![3, 4]])
        .unwrap()
        .collect();
    assert_eq!(product, vec![point![1, 3], point![1, 4], point![2, 3], point![2, 4]]);

    assert_eq!(point![1, 2].to_string(), "(1, 2)");
    let repr = format!("{:?}", point![1, 2]);
    assert_eq!(repr, "Point(1, 2)");
    assert_eq!(repr.parse::<Point<i32>>(), Ok(point![1, 2]));
}

#[test]
fn every_disabled_operation_is_rejected() {
    for p in samples() {
        let q = p.clone();
        let results = [
            (Operation::Count, p.count(0).map(|_| ())),
            (Operation::Index, p.index(0).map(|_| ())),
            (Operation::LessThan, p.lt(&q).map(|_| ())),
            (Operation::LessOrEqual, p.le(&q).map(|_| ())),
            (Operation::GreaterThan, p.gt(&q).map(|_| ())),
            (Operation::GreaterOrEqual, p.ge(&q).map(|_| ())),
            (Operation::Multiply, p.mul(&q).map(|_| ())),
            (Operation::ReflectedMultiply, p.rmul(2).map(|_| ())),
        ];
        for (op, result) in results {
            assert_eq!(result, Err(PointError::Unsupported(op)));
        }
    }
}

#[test]
fn empty_construction_fails() {
    assert_eq!(Point::<i64>::new(vec![]), Err(PointError::NoCoordinates));
    assert_eq!(Point::<i64>::try_from(&[0i64; 0][..]), Err(PointError::NoCoordinates));
}

#[test]
fn equal_points_hash_identically() {
    let a = Point::new(vec![4, 5, 6]).unwrap();
    let b = point![4, 5, 6];
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut counts: HashMap<Point<i32>, usize> = HashMap::new();
    for p in [a, b, point![4, 5], point![4, 5, 6]] {
        *counts.entry(p).or_default() += 1;
    }
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&point![4, 5, 6]], 3);
}

#[test]
fn points_are_shareable_across_threads() {
    let p = std::sync::Arc::new(point![1, 2, 3]);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let p = std::sync::Arc::clone(&p);
            std::thread::spawn(move || (*p).clone() + [i])
        })
        .collect();
    let sums: Vec<Point<i32>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(sums[3], point![4, 2, 3]);
}

fn float_samples() -> Vec<Point<f64>> {
    vec![
        point![0.0],
        point![0.5, -1.25],
        point![-2.5, 0.0, 3.75],
        point![1e10, -1e-3, 0.125, -7.0],
        point![-0.0, 4.5],
    ]
}

#[test]
fn float_addition_commutes() {
    for a in float_samples() {
        for b in float_samples() {
            assert_eq!(&a + &b, &b + &a, "{} + {}", a, b);
        }
    }
}

#[test]
fn float_self_subtraction_is_origin() {
    for p in float_samples() {
        let zero = &p - &p;
        assert_eq!(zero.number_of_dimensions(), p.number_of_dimensions());
        assert!(zero.iter().all(|&c| c == 0.0), "{} - itself = {}", p, zero);
    }
}

#[test]
fn float_abs_is_non_negative_and_idempotent() {
    for p in float_samples() {
        let reflected = p.abs();
        assert!(reflected.iter().all(|&c| c >= 0.0), "abs({}) = {}", p, reflected);
        assert_eq!(reflected.abs(), reflected);
    }
}

#[test]
fn float_cartesian_product() {
    let product: Vec<Point<f64>> =
        Point::cartesian_product([point![0.5, 1.5], point![-1.0], point![2.25, 3.0]])
            .unwrap()
            .collect();
    assert_eq!(
        product,
        vec![
            point![0.5, -1.0, 2.25],
            point![0.5, -1.0, 3.0],
            point![1.5, -1.0, 2.25],
            point![1.5, -1.0, 3.0],
        ]
    );
}

#[test]
fn equal_float_points_hash_identically() {
    let a = point![1.5, 2.0];
    let b = Point::new(vec![1.5, 2.0]).unwrap();
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(hash_of(&point![-0.0]), hash_of(&point![0.0]));

    let mut counts: HashMap<Point<f64>, usize> = HashMap::new();
    for p in [a, b, point![2.0, 1.5]] {
        *counts.entry(p).or_default() += 1;
    }
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&point![1.5, 2.0]], 2);
}
