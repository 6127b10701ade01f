#![allow(clippy::float_cmp)]

// Equality treats NaN as a value so that absent samples compare equal to
// each other. Ordering stays IEEE: any NaN operand makes it false.

/// NaN-aware equality: true when both are NaN or both are equal numbers.
#[must_use]
pub const fn eq(left: f64, right: f64) -> bool {
    if left.is_nan() {
        return right.is_nan();
    }

    left == right
}

/// NaN-aware inequality, the exact negation of [`eq`].
#[must_use]
pub const fn neq(left: f64, right: f64) -> bool {
    if left.is_nan() {
        return !right.is_nan();
    }
    if right.is_nan() {
        return true;
    }

    left != right
}

#[must_use]
pub const fn gt(left: f64, right: f64) -> bool {
    left > right
}

#[must_use]
pub const fn lt(left: f64, right: f64) -> bool {
    left < right
}

#[must_use]
pub const fn gte(left: f64, right: f64) -> bool {
    left >= right
}

#[must_use]
pub const fn lte(left: f64, right: f64) -> bool {
    left <= right
}
