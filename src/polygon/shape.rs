//! A closed set of the polygon kinds that can act as obstacles.

use super::core::SimplePolygon;
use super::obstacle::Polygon;
use super::triangle::Triangle;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Either a bare triangle or a full obstacle polygon.
///
/// Dispatches the intersection queries to the variant's own semantics:
/// [`Triangle::does_intersect_line`] keeps its inverted polarity, and
/// [`Polygon::does_intersect_line`] reports blocking.
///
/// This is a convenience for callers holding mixed shapes. A
/// [`Board`](crate::Board) stores [`Polygon`]s directly and blocks with
/// [`Polygon::does_intersect_line_with`], so it does not go through here.
#[derive(Debug, Clone)]
pub enum Shape<F> {
    Triangle(Triangle<F>),
    Polygon(Polygon<F>),
}

impl<F: Float> Shape<F> {
    /// The variant's own `does_intersect_line`.
    pub fn does_intersect_line(&self, segment: Segment2<F>) -> bool {
        match self {
            Shape::Triangle(t) => t.does_intersect_line(segment),
            Shape::Polygon(p) => p.does_intersect_line(segment),
        }
    }

    /// See [`SimplePolygon::contains_point_in_area`].
    pub fn contains_point_in_area(&self, p: Point2<F>) -> bool {
        self.as_simple().contains_point_in_area(p)
    }

    /// The underlying vertex ring.
    pub fn as_simple(&self) -> &SimplePolygon<F> {
        match self {
            Shape::Triangle(t) => t.as_simple(),
            Shape::Polygon(p) => p.as_simple(),
        }
    }

    /// Returns `true` if any edge of `self` touches any edge of `other`.
    pub fn does_intersect_shape(&self, other: &Shape<F>) -> bool {
        self.as_simple().does_intersect_polygon(other.as_simple())
    }
}

impl<F: Float> PartialEq for Shape<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Shape::Triangle(a), Shape::Triangle(b)) => a == b,
            (Shape::Polygon(a), Shape::Polygon(b)) => a == b,
            _ => false,
        }
    }
}

impl<F> From<Triangle<F>> for Shape<F> {
    fn from(t: Triangle<F>) -> Self {
        Shape::Triangle(t)
    }
}

impl<F> From<Polygon<F>> for Shape<F> {
    fn from(p: Polygon<F>) -> Self {
        Shape::Polygon(p)
    }
}

impl<F: Float> AsRef<SimplePolygon<F>> for Shape<F> {
    fn as_ref(&self) -> &SimplePolygon<F> {
        self.as_simple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_at(x: f64, y: f64) -> Shape<f64> {
        Polygon::new(vec![
            Point2::new(x, y),
            Point2::new(x + 2.0, y),
            Point2::new(x + 2.0, y + 2.0),
            Point2::new(x, y + 2.0),
        ])
        .unwrap()
        .into()
    }

    fn triangle() -> Shape<f64> {
        Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        )
        .unwrap()
        .into()
    }

    #[test]
    fn test_dispatch_keeps_variant_semantics() {
        let crossing = Segment2::from_coords(-1.0, 1.0, 1.0, 1.0);
        assert!(square_at(0.0, 0.0).does_intersect_line(crossing));
        assert!(!triangle().does_intersect_line(crossing));
    }

    #[test]
    fn test_contains_point() {
        assert!(square_at(0.0, 0.0).contains_point_in_area(Point2::new(1.0, 1.0)));
        assert!(triangle().contains_point_in_area(Point2::new(1.0, 1.0)));
        assert!(!triangle().contains_point_in_area(Point2::new(3.0, 3.0)));
    }

    #[test]
    fn test_does_intersect_shape() {
        let a = square_at(0.0, 0.0);
        assert!(a.does_intersect_shape(&square_at(1.0, 1.0)));
        assert!(a.does_intersect_shape(&triangle()));
        assert!(!a.does_intersect_shape(&square_at(5.0, 5.0)));
        // Touching corners count
        assert!(a.does_intersect_shape(&square_at(2.0, 2.0)));
    }

    #[test]
    fn test_as_simple() {
        assert_eq!(triangle().as_simple().len(), 3);
        assert_eq!(square_at(0.0, 0.0).as_ref().len(), 4);
    }
}
