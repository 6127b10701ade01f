use binop_primitives::{BinaryOpFamily, BinaryOpKind};
use thiserror::Error as ThisError;

///
/// BinaryOpError
///
/// Caller-side errors around operator selection. Operators themselves never
/// fail; a NaN result is data, not an error.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BinaryOpError {
    #[error("binary operator symbol is empty")]
    EmptySymbol,

    #[error("unknown binary operator '{symbol}'")]
    UnknownSymbol { symbol: String },

    #[error("binary operator '{op}' is not a {expected} operator")]
    FamilyMismatch {
        op: BinaryOpKind,
        expected: BinaryOpFamily,
    },
}

impl BinaryOpError {
    pub(crate) fn unknown_symbol(symbol: impl Into<String>) -> Self {
        Self::UnknownSymbol {
            symbol: symbol.into(),
        }
    }

    pub(crate) const fn family_mismatch(op: BinaryOpKind, expected: BinaryOpFamily) -> Self {
        Self::FamilyMismatch { op, expected }
    }
}
