//! Operator vocabulary shared by the binop crates: the closed set of binary
//! operator kinds and their static metadata.

#[macro_use]
mod macros;


use std::fmt;

///
/// BinaryOpKind
///
/// Canonical binary operator kind. The set is closed; new operators are
/// added to the registry, never constructed at runtime.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum BinaryOpKind {
    Eq = 0x01,
    Neq = 0x02,
    Gt = 0x03,
    Lt = 0x04,
    Gte = 0x05,
    Lte = 0x06,
    Add = 0x07,
    Sub = 0x08,
    Mul = 0x09,
    Div = 0x0a,
    Mod = 0x0b,
    Pow = 0x0c,
    Atan2 = 0x0d,
    Default = 0x0e,
    If = 0x0f,
    IfNot = 0x10,
    And = 0x11,
    Or = 0x12,
}

impl BinaryOpKind {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Return the full metadata descriptor for one operator kind.
    #[must_use]
    pub const fn metadata(self) -> BinaryOpMetadata {
        binary_op_registry!(metadata_from_registry, self)
    }

    /// Return the canonical query-language spelling of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        self.metadata().symbol
    }

    /// Return the result family (boolean or numeric) of this operator.
    #[must_use]
    pub const fn family(self) -> BinaryOpFamily {
        self.metadata().family
    }

    #[must_use]
    pub const fn group(self) -> BinaryOpGroup {
        self.metadata().group
    }

    #[must_use]
    pub const fn is_predicate(self) -> bool {
        matches!(self.family(), BinaryOpFamily::Predicate)
    }

    /// Return whether this operator gives NaN its "no data" meaning instead
    /// of plain IEEE-754 propagation.
    #[must_use]
    pub const fn is_nan_sentinel(self) -> bool {
        self.metadata().nan_sentinel
    }

    /// Resolve a canonical operator symbol.
    ///
    /// Word operators (`and`, `ifnot`, ...) match ASCII case-insensitively.
    /// No whitespace trimming happens here.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        ALL_BINARY_OP_KINDS
            .into_iter()
            .find(|kind| kind.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for BinaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

///
/// BinaryOpMetadata
///
/// Static descriptor for one operator kind.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BinaryOpMetadata {
    pub symbol: &'static str,
    pub family: BinaryOpFamily,
    pub group: BinaryOpGroup,
    pub nan_sentinel: bool,
}

///
/// BinaryOpFamily
///
/// Result family of an operator.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOpFamily {
    Predicate,
    Value,
}

impl fmt::Display for BinaryOpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate => f.write_str("predicate"),
            Self::Value => f.write_str("value"),
        }
    }
}

///
/// BinaryOpGroup
///
/// Coarse operator grouping as seen by query syntax.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOpGroup {
    Comparison,
    Arithmetic,
    Logical,
}

/// Ordered list of all operator kinds in registry order.
pub const ALL_BINARY_OP_KINDS: [BinaryOpKind; 18] = binary_op_registry!(all_kinds_from_registry);
