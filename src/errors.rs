//! Error type for point construction, arithmetic, and parsing.
//!
//! Every variant is a contract violation reported straight to the caller.
//! Nothing here is transient and nothing is retried.

use std::error::Error;
use std::fmt;

// ---------------------------------------------------------------------------
// Disabled operations
// ---------------------------------------------------------------------------

/// Sequence operations that have no meaning for a Cartesian point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Count,
    Index,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    Multiply,
    ReflectedMultiply,
}

impl Operation {
    /// All disabled operations, in declaration order.
    pub const ALL: [Operation; 8] = [
        Operation::Count,
        Operation::Index,
        Operation::LessThan,
        Operation::LessOrEqual,
        Operation::GreaterThan,
        Operation::GreaterOrEqual,
        Operation::Multiply,
        Operation::ReflectedMultiply,
    ];

    /// Method name on `Point` that exposes this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Count => "count",
            Operation::Index => "index",
            Operation::LessThan => "lt",
            Operation::LessOrEqual => "le",
            Operation::GreaterThan => "gt",
            Operation::GreaterOrEqual => "ge",
            Operation::Multiply => "mul",
            Operation::ReflectedMultiply => "rmul",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// All possible point failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    /// A point needs at least one coordinate.
    NoCoordinates,
    /// A Cartesian product needs at least one factor.
    NoFactors,
    /// The operation is not defined for points.
    Unsupported(Operation),
    /// Named axis accessor used on a point with too few dimensions.
    DimensionOutOfRange {
        axis: char,
        dimensions: usize,
    },
    /// Integer coordinate arithmetic left the range of its type.
    Overflow {
        expression: String,
    },
    /// Text is not a point in either string form.
    Parse {
        input: String,
        reason: String,
    },
}

impl PointError {
    pub(crate) fn overflow(expression: String) -> Self {
        PointError::Overflow { expression }
    }

    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        PointError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::NoCoordinates => {
                write!(f, "NoCoordinates: a point needs at least one coordinate")
            }
            PointError::NoFactors => {
                write!(f, "NoFactors: a Cartesian product needs at least one point")
            }
            PointError::Unsupported(op) => {
                write!(f, "Unsupported: `{}` is not defined for points", op)
            }
            PointError::DimensionOutOfRange { axis, dimensions } => {
                write!(
                    f,
                    "DimensionOutOfRange: axis {} needs more than {} dimension(s)",
                    axis, dimensions
                )
            }
            PointError::Overflow { expression } => {
                write!(f, "Overflow: {} does not fit the coordinate type", expression)
            }
            PointError::Parse { input, reason } => {
                write!(f, "Parse: {:?}: {}", input, reason)
            }
        }
    }
}

impl Error for PointError {}
