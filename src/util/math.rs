//! Tolerant floating point comparisons.
//!
//! Every geometric boundary decision in this crate (equality of points,
//! on-edge tests, tangency, bounding box overlap) goes through the functions
//! in this module. Changing [`CALC_ERROR_MARGIN`] changes the sensitivity of
//! all containment and collision predicates at once.

/// Absolute margin under which two values are considered equal.
pub const CALC_ERROR_MARGIN: f64 = 1e-9;

/// `|a - b| <= CALC_ERROR_MARGIN`
///
/// ```
/// # use hitbox::util::math::are_equal;
/// assert!(are_equal(0.1 + 0.2, 0.3));
/// assert!(!are_equal(0.1, 0.2));
/// ```
#[inline]
pub fn are_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= CALC_ERROR_MARGIN
}

#[inline]
pub fn is_zero(a: f64) -> bool {
    are_equal(a, 0.0)
}

/// `a >= b`, within the error margin.
#[inline]
pub fn is_greater_or_equal(a: f64, b: f64) -> bool {
    a > b || are_equal(a, b)
}

/// `a <= b`, within the error margin.
#[inline]
pub fn is_less_or_equal(a: f64, b: f64) -> bool {
    a < b || are_equal(a, b)
}

/// `a > b` by more than the error margin.
#[inline]
pub fn is_strictly_greater(a: f64, b: f64) -> bool {
    !is_less_or_equal(a, b)
}

/// `a < b` by more than the error margin.
#[inline]
pub fn is_strictly_less(a: f64, b: f64) -> bool {
    !is_greater_or_equal(a, b)
}
