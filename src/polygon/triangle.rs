//! Three-vertex polygons produced by triangulation.

use super::core::SimplePolygon;
use crate::error::SightlineError;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::cell::OnceCell;

/// A triangle, stored in the vertex order it was given.
#[derive(Debug, Clone)]
pub struct Triangle<F> {
    shape: SimplePolygon<F>,
    // (absolute area, is_ccw), computed together
    area: OnceCell<(F, bool)>,
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle from three vertices.
    ///
    /// Fails with [`SightlineError::DegenerateInput`] if two of them
    /// coincide.
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Result<Self, SightlineError> {
        Ok(Self::from_shape(SimplePolygon::new(vec![a, b, c])?))
    }

    /// Builds a triangle from vertices already known to be distinct.
    pub(crate) fn from_nodes(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self::from_shape(SimplePolygon::from_ring(vec![a, b, c]))
    }

    fn from_shape(shape: SimplePolygon<F>) -> Self {
        Self {
            shape,
            area: OnceCell::new(),
        }
    }

    #[inline]
    pub fn a(&self) -> Point2<F> {
        self.shape.nodes()[0]
    }

    #[inline]
    pub fn b(&self) -> Point2<F> {
        self.shape.nodes()[1]
    }

    #[inline]
    pub fn c(&self) -> Point2<F> {
        self.shape.nodes()[2]
    }

    fn area_and_orientation(&self) -> (F, bool) {
        *self.area.get_or_init(|| {
            let signed = self.shape.signed_area();
            (signed.abs(), signed >= F::zero())
        })
    }

    /// Signed area in stored vertex order; positive for CCW.
    pub fn signed_area(&self) -> F {
        let (area, ccw) = self.area_and_orientation();
        if ccw {
            area
        } else {
            -area
        }
    }

    /// Absolute area.
    pub fn area(&self) -> F {
        self.area_and_orientation().0
    }

    /// Returns `true` if the stored vertex order is counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        self.area_and_orientation().1
    }

    /// Returns `true` if **no** edge of the triangle touches `segment`.
    ///
    /// Any edge intersection (endpoints counted) yields `false`. Combined
    /// with a containment check this means "the segment's course through
    /// this triangle never crosses the triangle's boundary".
    pub fn does_intersect_line(&self, segment: Segment2<F>) -> bool {
        !self
            .shape
            .edges()
            .iter()
            .any(|edge| edge.intersects(segment, true))
    }

    /// See [`SimplePolygon::contains_point_in_area`].
    pub fn contains_point_in_area(&self, p: Point2<F>) -> bool {
        self.shape.contains_point_in_area(p)
    }

    /// See [`SimplePolygon::edges`].
    pub fn edges(&self) -> &[Segment2<F>] {
        self.shape.edges()
    }

    /// The underlying vertex ring.
    #[inline]
    pub fn as_simple(&self) -> &SimplePolygon<F> {
        &self.shape
    }
}

impl<F: Float> PartialEq for Triangle<F> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
    }
}

impl<F: Float> AsRef<SimplePolygon<F>> for Triangle<F> {
    fn as_ref(&self) -> &SimplePolygon<F> {
        &self.shape
    }
}
