use crate::NAN;

// Logical operators encode "false" as NaN and pass the left sample through
// otherwise. The right operand acts as a condition or a fallback.

/// `left`, or `right` when `left` is absent.
#[must_use]
pub const fn default(left: f64, right: f64) -> f64 {
    if left.is_nan() {
        return right;
    }

    left
}

/// `left` when the `right` condition is present, otherwise NaN.
#[must_use]
pub const fn if_(left: f64, right: f64) -> f64 {
    if right.is_nan() {
        return NAN;
    }

    left
}

/// `left` when the `right` condition is absent, otherwise NaN.
#[must_use]
pub const fn if_not(left: f64, right: f64) -> f64 {
    if right.is_nan() {
        return left;
    }

    NAN
}

/// `left` when both samples are present, otherwise NaN.
#[must_use]
pub const fn and(left: f64, right: f64) -> f64 {
    if left.is_nan() || right.is_nan() {
        return NAN;
    }

    left
}

/// The first present sample, or NaN when both are absent.
#[must_use]
pub const fn or(left: f64, right: f64) -> f64 {
    if !left.is_nan() {
        return left;
    }

    right
}
