//! ## Crate layout
//! - `core`: operator functions, dispatch, outcomes and symbol resolution.
//! - `primitives`: the operator vocabulary and its static metadata.
//!
//! The `prelude` module exposes what an expression evaluator needs to pick
//! an operator by symbol and apply it to a pair of samples.

pub use binop_core as core;
pub use binop_primitives as primitives;

pub use binop_core::{
    BinaryOpError, BinaryOpFn, BinaryOutcome, NAN, binary_op_fn, eval, eval_predicate, eval_value,
    ops, parse_binary_op,
};
pub use binop_primitives::{
    ALL_BINARY_OP_KINDS, BinaryOpFamily, BinaryOpGroup, BinaryOpKind, BinaryOpMetadata,
};

///
/// Prelude
///
/// Operator vocabulary and entry points only; no free operator functions.
///

pub mod prelude {
    pub use crate::{
        BinaryOpFamily, BinaryOpKind, BinaryOutcome, eval, eval_predicate, eval_value,
        parse_binary_op,
    };
}
