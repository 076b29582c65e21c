//! Obstacle polygons: CCW rings with a cached triangulation.

use super::core::SimplePolygon;
use super::triangle::Triangle;
use super::triangulate::ear_clip;
use crate::error::SightlineError;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::cell::OnceCell;

/// A simple (possibly concave) polygon used as an obstacle.
///
/// Vertices are normalized to counter-clockwise order on construction.
/// The ear-clipping triangulation and the set of internal diagonals are
/// computed on first use and cached.
///
/// # Example
///
/// ```
/// use sightline::polygon::Polygon;
/// use sightline::{Point2, Segment2};
///
/// let square = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ])
/// .unwrap();
///
/// assert_eq!(square.triangles().len(), 2);
/// assert!(square.does_intersect_line(Segment2::from_coords(-1.0, 1.0, 3.0, 1.0)));
/// assert!(!square.does_intersect_line(Segment2::from_coords(-1.0, 3.0, 3.0, 3.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Polygon<F> {
    shape: SimplePolygon<F>,
    triangles: OnceCell<Vec<Triangle<F>>>,
    diagonals: OnceCell<Vec<Segment2<F>>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from an ordered vertex list, auto-closing it if
    /// the first vertex is repeated at the end.
    ///
    /// Clockwise input is reversed so the stored ring is CCW.
    pub fn new(nodes: Vec<Point2<F>>) -> Result<Self, SightlineError> {
        let shape = SimplePolygon::new(nodes)?;
        let shape = if shape.signed_area() < F::zero() {
            let mut reversed = shape.nodes().to_vec();
            reversed.reverse();
            SimplePolygon::from_ring(reversed)
        } else {
            shape
        };

        Ok(Self {
            shape,
            triangles: OnceCell::new(),
            diagonals: OnceCell::new(),
        })
    }

    /// The vertices, in CCW order.
    #[inline]
    pub fn nodes(&self) -> &[Point2<F>] {
        self.shape.nodes()
    }

    /// See [`SimplePolygon::edges`].
    #[inline]
    pub fn edges(&self) -> &[Segment2<F>] {
        self.shape.edges()
    }

    /// See [`SimplePolygon::perimeter`].
    #[inline]
    pub fn perimeter(&self) -> F {
        self.shape.perimeter()
    }

    /// See [`SimplePolygon::centroid`].
    #[inline]
    pub fn centroid(&self) -> Point2<F> {
        self.shape.centroid()
    }

    /// Enclosed area.
    #[inline]
    pub fn area(&self) -> F {
        self.shape.area()
    }

    /// See [`SimplePolygon::contains_point_in_area`].
    #[inline]
    pub fn contains_point_in_area(&self, p: Point2<F>) -> bool {
        self.shape.contains_point_in_area(p)
    }

    /// The underlying vertex ring.
    #[inline]
    pub fn as_simple(&self) -> &SimplePolygon<F> {
        &self.shape
    }

    /// Ear-clipping triangulation; `n - 2` triangles for an n-gon.
    pub fn triangles(&self) -> &[Triangle<F>] {
        self.triangles.get_or_init(|| ear_clip(&self.shape))
    }

    /// Triangle edges that are not boundary edges.
    pub fn diagonal_edges(&self) -> &[Segment2<F>] {
        self.diagonals.get_or_init(|| {
            let boundary = self.shape.edges();
            let mut diagonals: Vec<Segment2<F>> = Vec::new();
            for edge in self.triangles().iter().flat_map(|t| t.edges()) {
                let on_boundary = boundary.iter().any(|b| b.approx_eq(*edge));
                let seen = diagonals.iter().any(|d| d.approx_eq(*edge));
                if !on_boundary && !seen {
                    diagonals.push(*edge);
                }
            }
            diagonals
        })
    }

    /// Does this polygon block `segment`?
    ///
    /// Equivalent to `does_intersect_line_with(segment, false)`: a segment
    /// joining two of this polygon's own vertices without crossing its
    /// boundary is treated as non-blocking.
    pub fn does_intersect_line(&self, segment: Segment2<F>) -> bool {
        self.does_intersect_line_with(segment, false)
    }

    /// Does this polygon block `segment`?
    ///
    /// Shared endpoints with boundary edges never count as crossings. When
    /// `force_colinearity_test` is set, segments between two of the
    /// polygon's own vertices are tested against the interior as well.
    pub fn does_intersect_line_with(&self, segment: Segment2<F>, force_colinearity_test: bool) -> bool {
        if self
            .shape
            .edges()
            .iter()
            .any(|edge| edge.intersects(segment, false))
        {
            return true;
        }

        if !force_colinearity_test
            && self.shape.has_node(segment.start)
            && self.shape.has_node(segment.end)
        {
            return false;
        }

        if self.diagonal_edges().iter().any(|d| d.approx_eq(segment)) {
            return true;
        }

        // No proper crossing is left, so the segment is either inside or
        // outside; a segment running along the outline is neither.
        let mid = segment.midpoint();
        if self.shape.is_on_boundary(mid) {
            return false;
        }

        // Enclosed by a single triangle without touching its edges
        if self
            .triangles()
            .iter()
            .any(|t| t.does_intersect_line(segment) && t.contains_point_in_area(mid))
        {
            return true;
        }

        self.shape.contains_point_in_area(mid)
    }
}

impl<F: Float> PartialEq for Polygon<F> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
    }
}

impl<F: Float> AsRef<SimplePolygon<F>> for Polygon<F> {
    fn as_ref(&self) -> &SimplePolygon<F> {
        &self.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap()
    }

    fn l_shape() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_clockwise_input_is_reversed() {
        let cw = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
        ])
        .unwrap();
        assert!(cw.as_simple().signed_area() > 0.0);
        assert_eq!(cw.nodes()[0], Point2::new(2.0, 0.0));
        assert_eq!(cw.triangles().len(), 2);
    }

    #[test]
    fn test_auto_close() {
        let closed = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(closed.nodes().len(), 3);
        assert_eq!(closed.triangles().len(), 1);
        assert!(closed.diagonal_edges().is_empty());
    }

    #[test]
    fn test_diagonal_edges() {
        let sq = square();
        let diagonals = sq.diagonal_edges();
        assert_eq!(diagonals.len(), 1);
        assert!(diagonals[0].approx_eq(Segment2::from_coords(0.0, 0.0, 2.0, 2.0)));

        // n-gon: n - 3 diagonals
        assert_eq!(l_shape().diagonal_edges().len(), 3);
    }

    #[test]
    fn test_crossing_segment_blocked() {
        let sq = square();
        assert!(sq.does_intersect_line(Segment2::from_coords(-1.0, 1.0, 3.0, 1.0)));
        assert!(sq.does_intersect_line(Segment2::from_coords(1.0, -1.0, 1.0, 3.0)));
        // Entering from outside and ending inside
        assert!(sq.does_intersect_line(Segment2::from_coords(-1.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_distant_segment_not_blocked() {
        let sq = square();
        assert!(!sq.does_intersect_line(Segment2::from_coords(-5.0, -5.0, -5.0, 5.0)));
        assert!(!sq.does_intersect_line(Segment2::from_coords(3.0, 0.0, 4.0, 5.0)));
    }

    #[test]
    fn test_segment_to_vertex() {
        let sq = square();
        assert!(!sq.does_intersect_line(Segment2::from_coords(-1.0, 1.0, 0.0, 0.0)));
        assert!(!sq.does_intersect_line(Segment2::from_coords(2.0, 0.0, 3.0, 1.0)));
        // From a vertex straight into the interior
        assert!(sq.does_intersect_line(Segment2::from_coords(0.0, 0.0, 1.0, 0.5)));
    }

    #[test]
    fn test_segment_inside_single_triangle() {
        let sq = square();
        assert!(sq.does_intersect_line(Segment2::from_coords(1.5, 0.2, 1.8, 0.5)));
        assert!(sq.does_intersect_line(Segment2::from_coords(0.5, 1.0, 1.5, 1.0)));
    }

    #[test]
    fn test_own_vertices_colinearity() {
        let sq = square();
        let diagonal = Segment2::from_coords(0.0, 0.0, 2.0, 2.0);
        let other_diagonal = Segment2::from_coords(2.0, 0.0, 0.0, 2.0);
        let side = Segment2::from_coords(0.0, 0.0, 2.0, 0.0);

        assert!(!sq.does_intersect_line(diagonal));
        assert!(!sq.does_intersect_line(other_diagonal));
        assert!(!sq.does_intersect_line(side));

        assert!(sq.does_intersect_line_with(diagonal, true));
        assert!(sq.does_intersect_line_with(other_diagonal, true));
        assert!(!sq.does_intersect_line_with(side, true));
    }

    #[test]
    fn test_concave_notch() {
        let l = l_shape();
        // Chord across the notch lies outside the L
        let chord = Segment2::from_coords(2.0, 1.0, 1.0, 2.0);
        assert!(!l.does_intersect_line_with(chord, true));
        // Through the arm
        assert!(l.does_intersect_line(Segment2::from_coords(1.5, 1.5, 1.5, -0.5)));
        // Inside the notch only
        assert!(!l.does_intersect_line(Segment2::from_coords(1.5, 1.5, 3.0, 3.0)));
    }

    #[test]
    fn test_grazing_edge_from_outside() {
        let sq = square();
        assert!(sq.does_intersect_line(Segment2::from_coords(-1.0, 0.0, 3.0, 0.0)));
        assert!(!sq.does_intersect_line(Segment2::from_coords(0.5, 0.0, 1.5, 0.0)));
    }
}
