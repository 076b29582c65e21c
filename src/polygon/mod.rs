//! Polygon geometry used for obstacles.
//!
//! This module provides:
//! - [`SimplePolygon`]: the vertex ring with cached edges, perimeter,
//!   centroid and a tolerant point-in-polygon test
//! - [`Triangle`]: the output of ear clipping
//! - [`Polygon`]: a CCW obstacle with a cached triangulation, concave
//!   line blocking and offsetting
//! - [`Shape`]: either of the last two
//!
//! # Example
//!
//! ```
//! use sightline::polygon::Polygon;
//! use sightline::{Point2, Segment2};
//!
//! let l_shape = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(l_shape.triangles().len(), 4);
//!
//! // Across the notch: outside the L, not blocked
//! let chord = Segment2::from_coords(2.0, 1.0, 1.0, 2.0);
//! assert!(!l_shape.does_intersect_line_with(chord, true));
//! ```

mod core;
mod obstacle;
mod offset;
mod shape;
mod triangle;
mod triangulate;

pub use core::SimplePolygon;
pub use obstacle::Polygon;
pub use shape::Shape;
pub use triangle::Triangle;
