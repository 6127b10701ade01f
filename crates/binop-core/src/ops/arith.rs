use crate::NAN;

#[must_use]
pub const fn add(left: f64, right: f64) -> f64 {
    left + right
}

#[must_use]
pub const fn sub(left: f64, right: f64) -> f64 {
    left - right
}

#[must_use]
pub const fn mul(left: f64, right: f64) -> f64 {
    left * right
}

/// IEEE division; a zero divisor yields ±Inf or NaN.
#[must_use]
pub const fn div(left: f64, right: f64) -> f64 {
    left / right
}

/// Truncated remainder (`fmod`): the sign follows the dividend.
#[must_use]
pub const fn modulo(left: f64, right: f64) -> f64 {
    left % right
}

/// `left` raised to `right`.
///
/// A NaN base is an absent sample and stays NaN even for a zero exponent,
/// where plain `powf` would return 1.
#[must_use]
pub fn pow(left: f64, right: f64) -> f64 {
    if left.is_nan() {
        return NAN;
    }

    left.powf(right)
}

/// Four-quadrant arctangent of `left / right`.
#[must_use]
pub fn atan2(left: f64, right: f64) -> f64 {
    left.atan2(right)
}
