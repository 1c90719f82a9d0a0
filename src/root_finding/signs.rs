//! Sign utilities for root-finding algorithms.
//! - [`Sign::of`]      : sign of a single value
//! - [`product_sign`]  : sign of `x * y` without forming the product
//! - `opposite_sign`   : `true` if the values have strictly opposite signs

/// The sign of a value, with zero kept distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Returns the sign of `value`. NaN maps to [`Sign::Zero`];
    /// solvers finite-check evaluations before asking.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}


/// Sign of `x * y`.
///
/// Compares signs instead of multiplying, so tiny residuals cannot
/// underflow to zero and large ones cannot overflow to infinity.
#[inline]
#[must_use]
pub fn product_sign(x: f64, y: f64) -> Sign {
    match (Sign::of(x), Sign::of(y)) {
        (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
        (sx, sy) if sx == sy              => Sign::Positive,
        _                                 => Sign::Negative,
    }
}


/// Returns `true` if `x` and `y` have strictly opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    product_sign(x, y) == Sign::Negative
}
