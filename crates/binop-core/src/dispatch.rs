use crate::{BinaryOpError, BinaryOutcome};
use binop_primitives::{BinaryOpFamily, BinaryOpKind};

///
/// BinaryOpFn
///
/// Function pointer that evaluates one operator kind.
/// The variant is the operator's result family.
///

#[derive(Clone, Copy, Debug)]
pub enum BinaryOpFn {
    Predicate(fn(f64, f64) -> bool),
    Value(fn(f64, f64) -> f64),
}

impl BinaryOpFn {
    #[must_use]
    pub const fn family(self) -> BinaryOpFamily {
        match self {
            Self::Predicate(_) => BinaryOpFamily::Predicate,
            Self::Value(_) => BinaryOpFamily::Value,
        }
    }

    #[must_use]
    pub fn call(self, left: f64, right: f64) -> BinaryOutcome {
        match self {
            Self::Predicate(f) => BinaryOutcome::Bool(f(left, right)),
            Self::Value(f) => BinaryOutcome::Value(f(left, right)),
        }
    }
}

/// Return the function that evaluates `kind`.
#[must_use]
pub const fn binary_op_fn(kind: BinaryOpKind) -> BinaryOpFn {
    op_registry!(op_fn_from_registry, kind)
}

/// Evaluate one operator over one pair of samples.
#[must_use]
pub fn eval(kind: BinaryOpKind, left: f64, right: f64) -> BinaryOutcome {
    binary_op_fn(kind).call(left, right)
}

/// Evaluate a predicate operator.
///
/// Fails only when `kind` is a value operator; the evaluation itself is total.
pub fn eval_predicate(kind: BinaryOpKind, left: f64, right: f64) -> Result<bool, BinaryOpError> {
    match binary_op_fn(kind) {
        BinaryOpFn::Predicate(f) => Ok(f(left, right)),
        BinaryOpFn::Value(_) => {
            Err(BinaryOpError::family_mismatch(kind, BinaryOpFamily::Predicate))
        }
    }
}

/// Evaluate a value operator.
///
/// Fails only when `kind` is a predicate operator.
pub fn eval_value(kind: BinaryOpKind, left: f64, right: f64) -> Result<f64, BinaryOpError> {
    match binary_op_fn(kind) {
        BinaryOpFn::Value(f) => Ok(f(left, right)),
        BinaryOpFn::Predicate(_) => {
            Err(BinaryOpError::family_mismatch(kind, BinaryOpFamily::Value))
        }
    }
}
