use crate::BinaryOpError;
use binop_primitives::BinaryOpKind;
use log::debug;

/// Resolve an operator symbol as written in a query, e.g. `">="` or `"ifnot"`.
///
/// Surrounding ASCII whitespace is ignored; other Unicode whitespace is part
/// of the symbol and makes it unknown. Word operators are case-insensitive.
pub fn parse_binary_op(input: &str) -> Result<BinaryOpKind, BinaryOpError> {
    let symbol = input.trim_matches(|c: char| c.is_ascii_whitespace());
    if symbol.is_empty() {
        debug!("rejected empty binary operator symbol");
        return Err(BinaryOpError::EmptySymbol);
    }

    BinaryOpKind::from_symbol(symbol).ok_or_else(|| {
        debug!("rejected unknown binary operator symbol {symbol:?}");
        BinaryOpError::unknown_symbol(symbol)
    })
}

/// TESTS
///
