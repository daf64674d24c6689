//! Error type shared by plane generation and the windmill process.

use std::fmt;

use crate::plane::Point;

/// Precondition violations surfaced by the core operations.
///
/// Neither variant is transient: retrying with the same inputs fails the same way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WindmillError {
    /// Empty or malformed plane, a pivot outside the plane, or bad generation params.
    InvalidInput { reason: String },
    /// No point is left that could become the next pivot.
    NoIntersection { pivot: Point },
}

impl WindmillError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn no_intersection(pivot: Point) -> Self {
        Self::NoIntersection { pivot }
    }
}

impl fmt::Display for WindmillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::NoIntersection { pivot } => {
                write!(f, "no intersection point left for pivot ({}, {})", pivot.x, pivot.y)
            }
        }
    }
}

impl std::error::Error for WindmillError {}
