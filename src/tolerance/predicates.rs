//! Fixed-epsilon comparisons and orientation predicates.

use crate::primitives::Point2;
use num_traits::Float;

/// Absolute difference below which two values compare equal.
pub const EPSILON: f64 = 1e-7;

/// Returns [`EPSILON`] converted to `F`.
#[inline]
pub fn epsilon<F: Float>() -> F {
    F::from(EPSILON).unwrap()
}

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn equal<F: Float>(a: F, b: F) -> bool {
    (a - b).abs() < epsilon()
}

/// Returns `true` if `a` is within [`EPSILON`] of zero.
#[inline]
pub fn is_zero<F: Float>(a: F) -> bool {
    equal(a, F::zero())
}

/// Returns `true` if `a > b` by more than the tolerance.
#[inline]
pub fn greater_than<F: Float>(a: F, b: F) -> bool {
    a > b && !equal(a, b)
}

/// Returns `true` if `a < b` by more than the tolerance.
#[inline]
pub fn less_than<F: Float>(a: F, b: F) -> bool {
    greater_than(b, a)
}

/// Returns `true` unless `a` is clearly greater than `b`.
#[inline]
pub fn less_or_equal<F: Float>(a: F, b: F) -> bool {
    !greater_than(a, b)
}

/// Returns `true` unless `a` is clearly less than `b`.
#[inline]
pub fn greater_or_equal<F: Float>(a: F, b: F) -> bool {
    !less_than(a, b)
}

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if twice the signed area of `abc` is within `eps` of zero
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}
