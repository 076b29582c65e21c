//! The vertex ring shared by every polygon kind.

use crate::error::SightlineError;
use crate::primitives::{Point2, Segment2};
use crate::tolerance;
use num_traits::Float;
use std::cell::OnceCell;

/// An immutable ring of at least three vertices.
///
/// The ring is implicitly closed (the last vertex connects to the first)
/// and is assumed to be simple. Edges, perimeter and centroid are derived
/// on first access and cached for the lifetime of the value.
#[derive(Debug, Clone)]
pub struct SimplePolygon<F> {
    nodes: Vec<Point2<F>>,
    edges: OnceCell<Vec<Segment2<F>>>,
    perimeter: OnceCell<F>,
    centroid: OnceCell<Point2<F>>,
}

impl<F: Float> SimplePolygon<F> {
    /// Creates a ring from an ordered list of vertices.
    ///
    /// A trailing vertex that repeats the first is dropped, as are
    /// consecutive duplicates. Fails with
    /// [`SightlineError::DegenerateInput`] if fewer than three vertices
    /// remain.
    pub fn new(nodes: Vec<Point2<F>>) -> Result<Self, SightlineError> {
        let mut ring: Vec<Point2<F>> = Vec::with_capacity(nodes.len());
        for p in nodes {
            if ring.last().map_or(true, |last| !last.approx_eq(p)) {
                ring.push(p);
            }
        }
        while ring.len() > 1 && ring[0].approx_eq(ring[ring.len() - 1]) {
            ring.pop();
        }

        if ring.len() < 3 {
            return Err(SightlineError::DegenerateInput {
                vertices: ring.len(),
            });
        }
        Ok(Self::from_ring(ring))
    }

    /// Wraps a ring already known to hold three or more distinct vertices.
    pub(crate) fn from_ring(nodes: Vec<Point2<F>>) -> Self {
        debug_assert!(nodes.len() >= 3);
        Self {
            nodes,
            edges: OnceCell::new(),
            perimeter: OnceCell::new(),
            centroid: OnceCell::new(),
        }
    }

    /// The vertices, in stored order.
    #[inline]
    pub fn nodes(&self) -> &[Point2<F>] {
        &self.nodes
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; a ring has at least three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edges `(node[i], node[(i + 1) % n])`, in order.
    pub fn edges(&self) -> &[Segment2<F>] {
        self.edges.get_or_init(|| {
            let n = self.nodes.len();
            (0..n)
                .map(|i| Segment2::new(self.nodes[i], self.nodes[(i + 1) % n]))
                .collect()
        })
    }

    /// Sum of edge lengths.
    pub fn perimeter(&self) -> F {
        *self.perimeter.get_or_init(|| {
            self.edges()
                .iter()
                .fold(F::zero(), |acc, e| acc + e.length())
        })
    }

    /// Arithmetic mean of the vertices (not area-weighted).
    pub fn centroid(&self) -> Point2<F> {
        *self.centroid.get_or_init(|| {
            let (sx, sy) = self
                .nodes
                .iter()
                .fold((F::zero(), F::zero()), |(sx, sy), p| (sx + p.x, sy + p.y));
            let n = F::from(self.nodes.len()).unwrap();
            Point2::new(sx / n, sy / n)
        })
    }

    /// Signed area using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        signed_area(&self.nodes)
    }

    /// Returns the absolute area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns `true` if `p` tolerantly equals one of the vertices.
    pub fn has_node(&self, p: Point2<F>) -> bool {
        self.nodes.iter().any(|n| n.approx_eq(p))
    }

    /// Returns `true` if `p` lies on any edge.
    pub fn is_on_boundary(&self, p: Point2<F>) -> bool {
        self.edges().iter().any(|e| e.contains_point(p))
    }

    /// Point-in-polygon test by casting a ray in the positive x direction.
    ///
    /// Vertices and points on the boundary are contained.
    pub fn contains_point_in_area(&self, p: Point2<F>) -> bool {
        let n = self.nodes.len();
        let mut inside = false;

        for i in 1..=n {
            let p1 = self.nodes[i % n];
            let p2 = self.nodes[i - 1];

            if tolerance::less_than(p1.x, p.x) && tolerance::less_than(p2.x, p.x) {
                // Entirely left of p, cannot meet the ray
                continue;
            }
            if p2.approx_eq(p) {
                return true;
            }
            if tolerance::equal(p1.y, p.y) && tolerance::equal(p2.y, p.y) {
                // Horizontal and level with p
                if p.x >= p1.x.min(p2.x) && p.x <= p1.x.max(p2.x) {
                    return true;
                }
            } else if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
                // Upward edges include their start, downward edges their end
                let mut det = (p1.x - p.x) * (p2.y - p.y) - (p1.y - p.y) * (p2.x - p.x);
                if tolerance::is_zero(det) {
                    return true;
                }
                if p2.y < p1.y {
                    det = -det;
                }
                if det > F::zero() {
                    inside = !inside;
                }
            }
        }

        inside
    }

    /// Returns `true` if any pair of edges intersects, endpoints counted.
    pub fn does_intersect_polygon(&self, other: &SimplePolygon<F>) -> bool {
        self.edges()
            .iter()
            .any(|a| other.edges().iter().any(|b| a.intersects(*b, true)))
    }
}

impl<F: Float> PartialEq for SimplePolygon<F> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<F: Float> AsRef<SimplePolygon<F>> for SimplePolygon<F> {
    fn as_ref(&self) -> &SimplePolygon<F> {
        self
    }
}

/// Shoelace signed area of a vertex ring.
pub(crate) fn signed_area<F: Float>(nodes: &[Point2<F>]) -> F {
    let n = nodes.len();
    if n < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        area = area + nodes[i].x * nodes[j].y - nodes[j].x * nodes[i].y;
    }

    area / F::from(2.0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn square(side: f64) -> SimplePolygon<f64> {
        SimplePolygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(side, 0.0),
            Point2::new(side, side),
            Point2::new(0.0, side),
        ])
        .unwrap()
    }

    #[test]
    fn test_closing_duplicate_dropped() {
        let poly = SimplePolygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(poly.len(), 3);
        assert_eq!(poly.edges().len(), 3);
    }

    #[test]
    fn test_degenerate_rejected() {
        let err = SimplePolygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
        ])
        .unwrap_err();
        assert_eq!(err, SightlineError::DegenerateInput { vertices: 2 });

        assert!(SimplePolygon::<f64>::new(vec![]).is_err());
    }

    #[test]
    fn test_edges_wrap_around() {
        let poly = square(2.0);
        let edges = poly.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].start, Point2::new(0.0, 2.0));
        assert_eq!(edges[3].end, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_perimeter_and_centroid() {
        let poly = square(2.0);
        assert_relative_eq!(poly.perimeter(), 8.0);
        assert_eq!(poly.centroid(), Point2::new(1.0, 1.0));
        assert_relative_eq!(poly.area(), 4.0);
        assert!(poly.signed_area() > 0.0);
    }

    #[test]
    fn test_centroid_is_vertex_mean() {
        // Area-weighted centroid would be (4/3, 1/3); the vertex mean is not.
        let poly = SimplePolygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.5),
        ])
        .unwrap();
        let c = poly.centroid();
        assert_relative_eq!(c.x, 1.6);
        assert_relative_eq!(c.y, 0.5);
    }

    #[test]
    fn test_contains_inside_outside() {
        let poly = square(2.0);
        assert!(poly.contains_point_in_area(Point2::new(1.0, 1.0)));
        assert!(poly.contains_point_in_area(Point2::new(0.1, 1.9)));
        assert!(!poly.contains_point_in_area(Point2::new(3.0, 1.0)));
        assert!(!poly.contains_point_in_area(Point2::new(-1.0, 1.0)));
        assert!(!poly.contains_point_in_area(Point2::new(1.0, -0.5)));
    }

    #[test]
    fn test_contains_boundary_and_vertices() {
        let poly = square(2.0);
        for v in poly.nodes() {
            assert!(poly.contains_point_in_area(*v));
        }
        // Horizontal edges level with the point
        assert!(poly.contains_point_in_area(Point2::new(1.0, 0.0)));
        assert!(poly.contains_point_in_area(Point2::new(1.0, 2.0)));
        // Vertical edges, via the zero determinant
        assert!(poly.contains_point_in_area(Point2::new(2.0, 1.0)));
        assert!(poly.contains_point_in_area(Point2::new(0.0, 0.5)));
    }

    #[test]
    fn test_contains_concave() {
        let l_shape = SimplePolygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap();
        assert!(l_shape.contains_point_in_area(Point2::new(0.5, 1.5)));
        assert!(l_shape.contains_point_in_area(Point2::new(1.5, 0.5)));
        assert!(!l_shape.contains_point_in_area(Point2::new(1.5, 1.5)));
    }

    #[test]
    fn test_contains_independent_of_winding() {
        let cw = SimplePolygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
        ])
        .unwrap();
        assert!(cw.signed_area() < 0.0);
        assert!(cw.contains_point_in_area(Point2::new(1.0, 1.0)));
        assert!(!cw.contains_point_in_area(Point2::new(3.0, 1.0)));
    }

    #[test]
    fn test_boundary_and_nodes() {
        let poly = square(2.0);
        assert!(poly.is_on_boundary(Point2::new(2.0, 1.5)));
        assert!(!poly.is_on_boundary(Point2::new(1.0, 1.0)));
        assert!(poly.has_node(Point2::new(2.0, 2.0 + 1e-9)));
        assert!(!poly.has_node(Point2::new(1.0, 2.0)));
    }

    #[test]
    fn test_does_intersect_polygon() {
        let a = square(2.0);
        let overlapping = SimplePolygon::new(vec![
            Point2::new(1.0_f64, 1.0),
            Point2::new(3.0, 1.0),
            Point2::new(3.0, 3.0),
            Point2::new(1.0, 3.0),
        ])
        .unwrap();
        let far = SimplePolygon::new(vec![
            Point2::new(5.0_f64, 5.0),
            Point2::new(6.0, 5.0),
            Point2::new(6.0, 6.0),
        ])
        .unwrap();
        assert!(a.does_intersect_polygon(&overlapping));
        assert!(overlapping.does_intersect_polygon(&a));
        assert!(!a.does_intersect_polygon(&far));
    }

    proptest! {
        #[test]
        fn regular_polygon_contains_centroid_not_far_point(
            sides in 3usize..12,
            radius in 0.5f64..50.0,
            cx in -100.0f64..100.0,
            cy in -100.0f64..100.0,
        ) {
            let nodes: Vec<Point2<f64>> = (0..sides)
                .map(|i| {
                    let a = i as f64 / sides as f64 * std::f64::consts::TAU;
                    Point2::new(cx + radius * a.cos(), cy + radius * a.sin())
                })
                .collect();
            let poly = SimplePolygon::new(nodes).unwrap();
            prop_assert!(poly.contains_point_in_area(poly.centroid()));
            prop_assert!(!poly.contains_point_in_area(Point2::new(cx + 3.0 * radius, cy + 3.0 * radius)));
            for v in poly.nodes() {
                prop_assert!(poly.contains_point_in_area(*v));
            }
        }
    }
}
