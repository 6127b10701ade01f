#[macro_export]
macro_rules! binary_op_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Eq, "==", Predicate, Comparison, nan_sentinel = true),
            (Neq, "!=", Predicate, Comparison, nan_sentinel = true),
            (Gt, ">", Predicate, Comparison, nan_sentinel = false),
            (Lt, "<", Predicate, Comparison, nan_sentinel = false),
            (Gte, ">=", Predicate, Comparison, nan_sentinel = false),
            (Lte, "<=", Predicate, Comparison, nan_sentinel = false),
            (Add, "+", Value, Arithmetic, nan_sentinel = false),
            (Sub, "-", Value, Arithmetic, nan_sentinel = false),
            (Mul, "*", Value, Arithmetic, nan_sentinel = false),
            (Div, "/", Value, Arithmetic, nan_sentinel = false),
            (Mod, "%", Value, Arithmetic, nan_sentinel = false),
            (Pow, "^", Value, Arithmetic, nan_sentinel = true),
            (Atan2, "atan2", Value, Arithmetic, nan_sentinel = false),
            (Default, "default", Value, Logical, nan_sentinel = true),
            (If, "if", Value, Logical, nan_sentinel = true),
            (IfNot, "ifnot", Value, Logical, nan_sentinel = true),
            (And, "and", Value, Logical, nan_sentinel = true),
            (Or, "or", Value, Logical, nan_sentinel = true),
        }
    };
}

#[macro_export]
macro_rules! binary_op_registry {
    ($macro:ident) => {
        $crate::binary_op_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::binary_op_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($op:ident, $symbol:literal, $family:ident, $group:ident, nan_sentinel = $nan_sentinel:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::BinaryOpKind::$op => $crate::BinaryOpMetadata {
                    symbol: $symbol,
                    family: $crate::BinaryOpFamily::$family,
                    group: $crate::BinaryOpGroup::$group,
                    nan_sentinel: $nan_sentinel,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($op:ident, $symbol:literal, $family:ident, $group:ident, nan_sentinel = $nan_sentinel:expr) ),* $(,)? ) => {
        [ $( $crate::BinaryOpKind::$op ),* ]
    };
    ( @args $($ignore:tt)*; @entries $( ($op:ident, $symbol:literal, $family:ident, $group:ident, nan_sentinel = $nan_sentinel:expr) ),* $(,)? ) => {
        [ $( $crate::BinaryOpKind::$op ),* ]
    };
}
