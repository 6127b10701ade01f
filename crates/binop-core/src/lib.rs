//! Scalar evaluation primitives for time-series binary operators.
//!
//! Every operator takes two `f64` samples and is total: NaN is a valid input
//! meaning "no sample", and each operator gives it a defined result.
#![warn(unreachable_pub)]

#[macro_use]
pub(crate) mod op_registry;

pub mod dispatch;
pub mod error;
pub mod ops;
pub mod outcome;
pub mod symbol;

#[cfg(test)]
mod tests;

pub use binop_primitives::{
    ALL_BINARY_OP_KINDS, BinaryOpFamily, BinaryOpGroup, BinaryOpKind, BinaryOpMetadata,
};
pub use dispatch::{BinaryOpFn, binary_op_fn, eval, eval_predicate, eval_value};
pub use error::BinaryOpError;
pub use outcome::BinaryOutcome;
pub use symbol::parse_binary_op;

///
/// CONSTANTS
///

/// The NaN returned by operators that filter a sample out.
pub const NAN: f64 = f64::NAN;
