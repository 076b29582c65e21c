//! Polygon triangulation using ear clipping.
//!
//! # Algorithm
//!
//! The remaining vertices are kept in a cyclic work list. The triangle
//! formed by the first three entries is an "ear" when:
//! - it winds counter-clockwise with non-zero area,
//! - the midpoint of its closing diagonal lies inside the original polygon,
//! - no other remaining vertex lies inside it.
//!
//! An ear is emitted and its middle vertex removed; otherwise the list is
//! rotated by one. An n-gon yields exactly n - 2 triangles.
//!
//! # Complexity
//!
//! - Time: O(n³) worst case for a polygon with n vertices
//! - Space: O(n)

use super::core::SimplePolygon;
use super::triangle::Triangle;
use crate::primitives::Point2;
use crate::tolerance;
use log::warn;
use num_traits::Float;
use std::collections::VecDeque;

/// Triangulates a CCW ring by ear clipping.
pub(crate) fn ear_clip<F: Float>(shape: &SimplePolygon<F>) -> Vec<Triangle<F>> {
    let mut work: VecDeque<Point2<F>> = shape.nodes().iter().copied().collect();
    let mut triangles = Vec::with_capacity(work.len().saturating_sub(2));
    let mut misses = 0;

    while work.len() >= 3 {
        let candidate = Triangle::from_nodes(work[0], work[1], work[2]);

        // A full rotation without an ear only happens on degenerate rings
        // (collinear runs); clip anyway so the loop terminates.
        let forced = misses >= work.len();
        if forced {
            warn!(
                "no ear among {} remaining vertices, clipping degenerate triangle",
                work.len()
            );
        }

        if forced || is_ear(shape, &work, &candidate) {
            triangles.push(candidate);
            work.remove(1);
            misses = 0;
        } else {
            work.rotate_left(1);
            misses += 1;
        }
    }

    triangles
}

fn is_ear<F: Float>(
    shape: &SimplePolygon<F>,
    work: &VecDeque<Point2<F>>,
    candidate: &Triangle<F>,
) -> bool {
    if !tolerance::greater_than(candidate.signed_area(), F::zero()) {
        return false;
    }
    if !shape.contains_point_in_area(candidate.a().midpoint(candidate.c())) {
        return false;
    }
    work.iter()
        .skip(3)
        .all(|&p| !candidate.contains_point_in_area(p))
}
