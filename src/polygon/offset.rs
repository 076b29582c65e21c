//! Polygon offsetting (expanding/shrinking by a fixed distance).
//!
//! Each edge is pushed out along its perpendicular by the outset and kept
//! at its original slope. Consecutive offset edges are then intersected as
//! infinite lines to produce the new vertices, giving mitred corners.
//!
//! # Example
//!
//! ```
//! use sightline::polygon::Polygon;
//! use sightline::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ])
//! .unwrap();
//!
//! let grown = square.expanded(1.0).unwrap();
//! assert!((grown.area() - 9.0).abs() < 1e-9);
//!
//! let shrunk = square.expanded(-0.25).unwrap();
//! assert!((shrunk.area() - 0.25).abs() < 1e-9);
//! ```

use super::obstacle::Polygon;
use crate::error::SightlineError;
use crate::primitives::{Point2, Segment2};
use crate::tolerance;
use num_traits::Float;

/// A point on an offset edge together with that edge's slope.
#[derive(Debug, Clone, Copy)]
struct OffsetLine<F> {
    anchor: Point2<F>,
    slope: F,
}

impl<F: Float> Polygon<F> {
    /// Returns a copy of this polygon with every edge moved outward by
    /// `outset` (inward when negative).
    ///
    /// Fails with [`SightlineError::ParallelLines`] when two adjacent edges
    /// share a slope, e.g. a collinear vertex.
    pub fn expanded(&self, outset: F) -> Result<Polygon<F>, SightlineError> {
        let lines: Vec<OffsetLine<F>> = self.edges().iter().map(|e| offset_line(*e, outset)).collect();

        let n = lines.len();
        let nodes = (0..n)
            .map(|i| intersect_lines(lines[i], lines[(i + 1) % n]))
            .collect::<Result<Vec<_>, _>>()?;

        Polygon::new(nodes)
    }
}

/// Moves `edge` of a CCW ring outward by `outset`.
fn offset_line<F: Float>(edge: Segment2<F>, outset: F) -> OffsetLine<F> {
    // The perpendicular points right (or up, when vertical); for a CCW
    // ring that is outward unless the edge heads downward.
    let distance = if tolerance::less_than(edge.delta_y(), F::zero()) {
        -outset
    } else {
        outset
    };
    let normal = Segment2::from_point_slope(edge.midpoint(), edge.perpendicular_slope(), distance);

    OffsetLine {
        anchor: normal.end,
        slope: edge.slope(),
    }
}

/// Intersects two infinite lines given in point/slope form.
fn intersect_lines<F: Float>(a: OffsetLine<F>, b: OffsetLine<F>) -> Result<Point2<F>, SightlineError> {
    let a_vertical = a.slope.is_infinite();
    let b_vertical = b.slope.is_infinite();

    if (a_vertical && b_vertical) || tolerance::equal(a.slope, b.slope) {
        return Err(SightlineError::ParallelLines);
    }
    if a_vertical {
        return Ok(vertical_crossing(a.anchor, b));
    }
    if b_vertical {
        return Ok(vertical_crossing(b.anchor, a));
    }

    let intercept_a = a.anchor.y - a.anchor.x * a.slope;
    let intercept_b = b.anchor.y - b.anchor.x * b.slope;
    let x = (intercept_b - intercept_a) / (a.slope - b.slope);
    Ok(Point2::new(x, a.slope * x + intercept_a))
}

/// Where the vertical line through `on_vertical` meets `other`.
fn vertical_crossing<F: Float>(on_vertical: Point2<F>, other: OffsetLine<F>) -> Point2<F> {
    Point2::new(
        on_vertical.x,
        (on_vertical.x - other.anchor.x) * other.slope + other.anchor.y,
    )
}
