use crate::{
    ALL_BINARY_OP_KINDS, BinaryOpKind, eval,
    ops::{arith, compare, logical},
};
use proptest::prelude::*;

fn arb_operand() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(0.0),
        Just(-0.0),
        -1.0e9..1.0e9f64,
        any::<f64>(),
    ]
}

fn arb_kind() -> impl Strategy<Value = BinaryOpKind> {
    proptest::sample::select(ALL_BINARY_OP_KINDS.to_vec())
}

proptest! {
    #[test]
    fn eq_with_nan_is_true_only_for_nan(x in arb_operand()) {
        prop_assert_eq!(compare::eq(x, f64::NAN), x.is_nan());
        prop_assert_eq!(compare::eq(f64::NAN, x), x.is_nan());
    }

    #[test]
    fn eq_and_neq_partition_every_pair(x in arb_operand(), y in arb_operand()) {
        prop_assert_ne!(compare::eq(x, y), compare::neq(x, y));
    }

    #[test]
    fn ordering_with_nan_is_always_false(x in arb_operand(), y in arb_operand()) {
        if x.is_nan() || y.is_nan() {
            prop_assert!(!compare::gt(x, y));
            prop_assert!(!compare::lt(x, y));
            prop_assert!(!compare::gte(x, y));
            prop_assert!(!compare::lte(x, y));
        }
    }

    #[test]
    fn pow_of_nan_is_nan(y in arb_operand()) {
        prop_assert!(arith::pow(f64::NAN, y).is_nan());
    }

    #[test]
    fn logical_operators_pass_left_through(x in arb_operand(), y in arb_operand()) {
        let first_present = if x.is_nan() { y } else { x };
        let both_present = if x.is_nan() || y.is_nan() { f64::NAN } else { x };
        let when_present = if y.is_nan() { f64::NAN } else { x };
        let when_absent = if y.is_nan() { x } else { f64::NAN };

        prop_assert!(compare::eq(logical::default(x, y), first_present));
        prop_assert!(compare::eq(logical::or(x, y), first_present));
        prop_assert!(compare::eq(logical::and(x, y), both_present));
        prop_assert!(compare::eq(logical::if_(x, y), when_present));
        prop_assert!(compare::eq(logical::if_not(x, y), when_absent));
    }

    #[test]
    fn eval_is_deterministic(kind in arb_kind(), x in arb_operand(), y in arb_operand()) {
        let first = eval(kind, x, y);
        let second = eval(kind, x, y);
        prop_assert!(first.same_as(second));
        prop_assert_eq!(first.family(), kind.family());
    }

    #[test]
    fn predicate_results_are_stable_across_repeats(x in arb_operand(), y in arb_operand()) {
        for kind in ALL_BINARY_OP_KINDS.into_iter().filter(|k| k.is_predicate()) {
            let first = eval(kind, x, y).as_bool();
            for _ in 0..3 {
                prop_assert_eq!(eval(kind, x, y).as_bool(), first);
            }
        }
    }
}
