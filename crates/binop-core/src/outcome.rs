use crate::ops::compare;
use binop_primitives::BinaryOpFamily;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// BinaryOutcome
///
/// Result of evaluating one operator over one pair of samples.
///
/// `PartialEq` is plain IEEE: two NaN values are not equal. Use
/// [`BinaryOutcome::same_as`] to compare outcomes with NaN treated as a
/// value.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, PartialEq, Serialize)]
pub enum BinaryOutcome {
    #[display("{_0}")]
    Bool(bool),

    #[display("{_0}")]
    Value(f64),
}

impl BinaryOutcome {
    #[must_use]
    pub const fn family(self) -> BinaryOpFamily {
        match self {
            Self::Bool(_) => BinaryOpFamily::Predicate,
            Self::Value(_) => BinaryOpFamily::Value,
        }
    }

    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            Self::Value(_) => None,
        }
    }

    #[must_use]
    pub const fn as_value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Bool(_) => None,
        }
    }

    /// Compare two outcomes, with NaN equal to NaN.
    #[must_use]
    pub const fn same_as(self, other: Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Value(a), Self::Value(b)) => compare::eq(a, b),
            _ => false,
        }
    }
}

/// TESTS
///
