//! Fixture cases: declarative checks of point behavior.
//!
//! A fixture file is a JSON array of cases. Each case names an operation,
//! its integer operands, and the expected outcome: coordinates, a string
//! form, or the rendered error. The harness binary and the golden tests
//! both run cases through `check_case`.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::errors::PointError;
use crate::point::Point;

/// One named fixture case.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(flatten)]
    pub case: Case,
}

/// Operation under test, with its operands and expected outcome.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Case {
    New { coordinates: Vec<i64>, expected: Outcome },
    Add { lhs: Vec<i64>, rhs: Vec<i64>, expected: Outcome },
    Sub { lhs: Vec<i64>, rhs: Vec<i64>, expected: Outcome },
    Rsub { lhs: Vec<i64>, rhs: Vec<i64>, expected: Outcome },
    Abs { coordinates: Vec<i64>, expected: Outcome },
    Axis { coordinates: Vec<i64>, axis: char, expected: AxisOutcome },
    Product { factors: Vec<Vec<i64>>, expected: ProductOutcome },
    Display { coordinates: Vec<i64>, expected: String },
    Debug { coordinates: Vec<i64>, expected: String },
    Parse { text: String, expected: Outcome },
    Disabled { coordinates: Vec<i64>, method: String, expected_error: String },
}

/// Expected point or expected error text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    Point(Vec<i64>),
    Error { error: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AxisOutcome {
    Value(i64),
    Error { error: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductOutcome {
    Points(Vec<Vec<i64>>),
    Error { error: String },
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Fixture file failures.
#[derive(Debug)]
pub enum FixtureError {
    Io(String),
    Json(String),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Io(msg) => write!(f, "IoError: {}", msg),
            FixtureError::Json(msg) => write!(f, "JsonError: {}", msg),
        }
    }
}

impl std::error::Error for FixtureError {}

impl From<io::Error> for FixtureError {
    fn from(err: io::Error) -> Self {
        FixtureError::Io(err.to_string())
    }
}

/// Parse a JSON array of fixtures.
pub fn parse_fixtures(json: &str) -> Result<Vec<Fixture>, FixtureError> {
    serde_json::from_str(json).map_err(|e| FixtureError::Json(e.to_string()))
}

/// Read and parse a fixture file.
pub fn load_fixtures(path: &Path) -> Result<Vec<Fixture>, FixtureError> {
    let content = fs::read_to_string(path)?;
    parse_fixtures(&content)
}

// ---------------------------------------------------------------------------
// Checking
// ---------------------------------------------------------------------------

/// Run one case. `Err` carries a human-readable mismatch description.
pub fn check_case(case: &Case) -> Result<(), String> {
    match case {
        Case::New { coordinates, expected } => {
            compare_point(Point::new(coordinates.clone()), expected)
        }
        Case::Add { lhs, rhs, expected } => {
            compare_point(point_of(lhs)?.checked_add(rhs), expected)
        }
        Case::Sub { lhs, rhs, expected } => {
            compare_point(point_of(lhs)?.checked_sub(rhs), expected)
        }
        Case::Rsub { lhs, rhs, expected } => {
            compare_point(point_of(lhs)?.checked_rsub(rhs), expected)
        }
        Case::Abs { coordinates, expected } => {
            compare_point(point_of(coordinates)?.checked_abs(), expected)
        }
        Case::Axis { coordinates, axis, expected } => {
            let p = point_of(coordinates)?;
            let got = match *axis {
                'x' => Ok(p.x()),
                'y' => p.y(),
                'z' => p.z(),
                other => return Err(format!("unknown axis {:?}", other)),
            };
            match (got, expected) {
                (Ok(v), AxisOutcome::Value(want)) if v == *want => Ok(()),
                (Err(e), AxisOutcome::Error { error }) if e.to_string() == *error => Ok(()),
                (got, want) => Err(format!("got {:?}, expected {:?}", got, want)),
            }
        }
        Case::Product { factors, expected } => {
            let got = Point::cartesian_product(factors)
                .map(|product| product.map(Point::into_coordinates).collect::<Vec<_>>());
            match (got, expected) {
                (Ok(points), ProductOutcome::Points(want)) if points == *want => Ok(()),
                (Err(e), ProductOutcome::Error { error }) if e.to_string() == *error => Ok(()),
                (got, want) => Err(format!("got {:?}, expected {:?}", got, want)),
            }
        }
        Case::Display { coordinates, expected } => {
            compare_text(point_of(coordinates)?.to_string(), expected)
        }
        Case::Debug { coordinates, expected } => {
            compare_text(format!("{:?}", point_of(coordinates)?), expected)
        }
        Case::Parse { text, expected } => compare_point(text.parse::<Point<i64>>(), expected),
        Case::Disabled { coordinates, method, expected_error } => {
            let p = point_of(coordinates)?;
            let got = match method.as_str() {
                "count" => p.count(0).map(|_| ()),
                "index" => p.index(0).map(|_| ()),
                "lt" => p.lt(&p).map(|_| ()),
                "le" => p.le(&p).map(|_| ()),
                "gt" => p.gt(&p).map(|_| ()),
                "ge" => p.ge(&p).map(|_| ()),
                "mul" => p.mul(&p).map(|_| ()),
                "rmul" => p.rmul(&p).map(|_| ()),
                other => return Err(format!("unknown method {:?}", other)),
            };
            match got {
                Err(e) if e.to_string() == *expected_error => Ok(()),
                got => Err(format!("got {:?}, expected error {:?}", got, expected_error)),
            }
        }
    }
}

fn point_of(coordinates: &[i64]) -> Result<Point<i64>, String> {
    Point::try_from(coordinates).map_err(|e| format!("bad operand {:?}: {}", coordinates, e))
}

fn compare_point(got: Result<Point<i64>, PointError>, expected: &Outcome) -> Result<(), String> {
    match (&got, expected) {
        (Ok(p), Outcome::Point(want)) if p.coordinates() == want.as_slice() => Ok(()),
        (Err(e), Outcome::Error { error }) if e.to_string() == *error => Ok(()),
        _ => Err(format!("got {:?}, expected {:?}", got, expected)),
    }
}

fn compare_text(got: String, expected: &str) -> Result<(), String> {
    if got == expected {
        Ok(())
    } else {
        Err(format!("got {:?}, expected {:?}", got, expected))
    }
}
