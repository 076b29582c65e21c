//! 2D line segment type.

use super::{Point2, Vec2};
use crate::tolerance::{self, orient2d};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// The endpoint order matters for [`slope`](Segment2::slope) and strict
/// equality, but not for [`approx_eq`](Segment2::approx_eq).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Creates a segment starting at `start` along a line of the given slope.
    ///
    /// A positive `distance` places the end to the right of `start` (or
    /// above it for an infinite slope), a negative one to the left (below).
    /// The resulting length is `|distance|`.
    pub fn from_point_slope(start: Point2<F>, slope: F, distance: F) -> Self {
        let angle = slope.atan();
        let end = start + Vec2::new(angle.cos(), angle.sin()) * distance;
        Self::new(start, end)
    }

    /// Horizontal displacement from `start` to `end`.
    #[inline]
    pub fn delta_x(self) -> F {
        self.end.x - self.start.x
    }

    /// Vertical displacement from `start` to `end`.
    #[inline]
    pub fn delta_y(self) -> F {
        self.end.y - self.start.y
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Slope of the supporting line.
    ///
    /// Vertical segments give `+∞` when travelling upwards and `-∞`
    /// otherwise.
    pub fn slope(self) -> F {
        let dx = self.delta_x();
        let dy = self.delta_y();
        if tolerance::is_zero(dx) {
            if dy > F::zero() {
                F::infinity()
            } else {
                F::neg_infinity()
            }
        } else {
            dy / dx
        }
    }

    /// Slope of a line perpendicular to this one, `-1 / slope`.
    ///
    /// Horizontal segments give `-∞` when travelling right and `+∞` when
    /// travelling left.
    pub fn perpendicular_slope(self) -> F {
        let dx = self.delta_x();
        let dy = self.delta_y();
        if tolerance::is_zero(dy) {
            if dx > F::zero() {
                F::neg_infinity()
            } else {
                F::infinity()
            }
        } else {
            -dx / dy
        }
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Computes the closest point on the segment to the given point.
    pub fn closest_point(self, p: Point2<F>) -> Point2<F> {
        let v = self.direction();
        let len_sq = v.dot(v);

        if len_sq <= F::epsilon() {
            return self.start;
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t = t.max(F::zero()).min(F::one());
        self.start + v * t
    }

    /// Returns `true` if `p` lies on the segment, within tolerance.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        tolerance::is_zero(p.distance(self.closest_point(p)))
    }

    /// Returns `true` if either endpoint of `self` tolerantly equals either
    /// endpoint of `other`.
    pub fn shares_endpoint(self, other: Self) -> bool {
        self.start.approx_eq(other.start)
            || self.start.approx_eq(other.end)
            || self.end.approx_eq(other.start)
            || self.end.approx_eq(other.end)
    }

    /// Segment/segment intersection test.
    ///
    /// Parallel (including collinear) segments never intersect. Touching
    /// counts as intersecting. With `count_endpoints == false`, segments
    /// that share an endpoint are reported as not intersecting.
    pub fn intersects(self, other: Self, count_endpoints: bool) -> bool {
        if tolerance::is_zero(self.direction().cross(other.direction())) {
            return false;
        }

        let eps = tolerance::epsilon();
        let o1 = orient2d(self.start, self.end, other.start, eps);
        let o2 = orient2d(self.start, self.end, other.end, eps);
        let o3 = orient2d(other.start, other.end, self.start, eps);
        let o4 = orient2d(other.start, other.end, self.end, eps);

        o1 != o2 && o3 != o4 && (count_endpoints || !self.shares_endpoint(other))
    }

    /// Tolerant equality that also accepts reversed endpoint order.
    pub fn approx_eq(self, other: Self) -> bool {
        (self.start.approx_eq(other.start) && self.end.approx_eq(other.end))
            || (self.start.approx_eq(other.end) && self.end.approx_eq(other.start))
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
