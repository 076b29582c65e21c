//! sightline - Line of sight and shortest paths around polygonal obstacles
//!
//! A [`Board`] holds a set of obstacle [`Polygon`]s and answers two
//! questions: can one point see another, and what is the shortest route
//! between two points that never enters an obstacle. Visibility results
//! are cached in a navigation mesh that is rebuilt whenever the board
//! changes.
//!
//! All comparisons are tolerant, using the absolute epsilon in
//! [`tolerance::EPSILON`].
//!
//! # Example
//!
//! ```
//! use sightline::{Board, Point2, Polygon};
//!
//! let mut board = Board::new();
//! board.add(
//!     Polygon::new(vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(2.0, 0.0),
//!         Point2::new(2.0, 2.0),
//!         Point2::new(0.0, 2.0),
//!     ])
//!     .unwrap(),
//! );
//!
//! let a = Point2::new(-1.0, 1.0);
//! let b = Point2::new(3.0, 1.0);
//! let path = board.shortest_path(a, b).unwrap();
//! assert_eq!(path, vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), b]);
//! ```

pub mod board;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

#[cfg(test)]
mod test_support;

pub use board::{Board, BoardStats};
pub use error::SightlineError;
pub use polygon::{Polygon, Shape, SimplePolygon, Triangle};
pub use primitives::{Point2, Segment2, Vec2};
pub use tolerance::{orient2d, Orientation, EPSILON};
