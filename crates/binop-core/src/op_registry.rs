///
/// Operator Registry
///
/// Binds each operator kind to the function that evaluates it.
/// The family column must agree with the primitives metadata; the registry
/// coherence test enforces that.
///

macro_rules! op_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Eq, Predicate, compare::eq),
            (Neq, Predicate, compare::neq),
            (Gt, Predicate, compare::gt),
            (Lt, Predicate, compare::lt),
            (Gte, Predicate, compare::gte),
            (Lte, Predicate, compare::lte),
            (Add, Value, arith::add),
            (Sub, Value, arith::sub),
            (Mul, Value, arith::mul),
            (Div, Value, arith::div),
            (Mod, Value, arith::modulo),
            (Pow, Value, arith::pow),
            (Atan2, Value, arith::atan2),
            (Default, Value, logical::default),
            (If, Value, logical::if_),
            (IfNot, Value, logical::if_not),
            (And, Value, logical::and),
            (Or, Value, logical::or),
        }
    };
}

macro_rules! op_registry {
    ($macro:ident) => {
        op_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        op_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! op_fn_from_registry {
    ( @args $kind:expr; @entries $( ($op:ident, $family:ident, $module:ident :: $func:ident) ),* $(,)? ) => {
        match $kind {
            $(
                ::binop_primitives::BinaryOpKind::$op => {
                    $crate::dispatch::BinaryOpFn::$family($crate::ops::$module::$func)
                }
            )*
        }
    };
}
