//! Boards: sets of obstacle polygons with cached line-of-sight queries.
//!
//! A [`Board`] owns its polygons and derives, on demand, the deduplicated
//! obstacle edges and nodes plus a navigation mesh of visibility results.
//! Any mutation drops everything derived; the next query rebuilds it.
//!
//! # Example
//!
//! ```
//! use sightline::polygon::Polygon;
//! use sightline::{Board, Point2};
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ])
//! .unwrap();
//!
//! let mut board = Board::from_polygons([square]);
//! let a = Point2::new(-1.0, 1.0);
//! let b = Point2::new(3.0, 1.0);
//!
//! assert!(!board.is_visible(a, b));
//!
//! let path = board.shortest_path(a, b).unwrap();
//! assert_eq!(path.last(), Some(&b));
//! assert_eq!(path.len(), 3);
//! ```

mod mesh;
mod path;

use crate::error::SightlineError;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Segment2};
use log::debug;
use mesh::{NavigationMesh, NodeKey};
use num_traits::Float;
use std::cell::OnceCell;
use std::collections::HashSet;

/// Counters for visibility work done by a [`Board`].
///
/// They are cumulative over the board's lifetime and are not reset when
/// caches are invalidated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    /// Number of uncached visibility tests run against the polygons.
    pub visibility_tests: u64,
    /// Number of visibility queries answered from the navigation mesh.
    pub cache_hits: u64,
}

#[derive(Debug, Clone)]
struct Derived<F> {
    edges: Vec<Segment2<F>>,
    nodes: Vec<Point2<F>>,
}

impl<F: Float> Derived<F> {
    fn build(polygons: &[Polygon<F>]) -> Self {
        let mut seen_nodes = HashSet::new();
        let mut seen_edges = HashSet::new();
        let mut nodes = Vec::new();
        let mut edges = Vec::new();

        for polygon in polygons {
            for &node in polygon.nodes() {
                if seen_nodes.insert(NodeKey::of(node)) {
                    nodes.push(node);
                }
            }
            for &edge in polygon.edges() {
                if seen_edges.insert(edge_key(edge)) {
                    edges.push(edge);
                }
            }
        }

        debug!(
            "rebuilt board geometry: {} polygons, {} nodes, {} edges",
            polygons.len(),
            nodes.len(),
            edges.len()
        );
        Self { edges, nodes }
    }
}

/// Order-insensitive key for an edge.
fn edge_key<F: Float>(edge: Segment2<F>) -> (NodeKey, NodeKey) {
    let (s, e) = (NodeKey::of(edge.start), NodeKey::of(edge.end));
    (s.min(e), s.max(e))
}

/// A set of obstacle polygons supporting visibility and shortest-path
/// queries.
///
/// Queries take `&mut self` because they fill the navigation mesh. For
/// use from several threads wrap the board in a lock.
#[derive(Debug, Clone)]
pub struct Board<F> {
    polygons: Vec<Polygon<F>>,
    derived: OnceCell<Derived<F>>,
    mesh: Option<NavigationMesh>,
    unowned_limit: Option<usize>,
    stats: BoardStats,
}

impl<F: Float> Default for Board<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Board<F> {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
            derived: OnceCell::new(),
            mesh: None,
            unowned_limit: None,
            stats: BoardStats::default(),
        }
    }

    /// Creates a board holding `polygons`; duplicates are kept once.
    pub fn from_polygons<I>(polygons: I) -> Self
    where
        I: IntoIterator<Item = Polygon<F>>,
    {
        let mut board = Self::new();
        board.add_all(polygons);
        board
    }

    /// Bounds the number of unowned mesh entries.
    ///
    /// When a new entry for a non-node point would exceed `limit`, all
    /// unowned entries are dropped first. Results between board nodes are
    /// never evicted.
    pub fn with_unowned_mesh_limit(mut self, limit: usize) -> Self {
        self.unowned_limit = Some(limit);
        self.invalidate();
        self
    }

    fn invalidate(&mut self) {
        self.derived.take();
        self.mesh = None;
    }

    /// Adds `polygon`, returning `false` if an equal one is already present.
    pub fn add(&mut self, polygon: Polygon<F>) -> bool {
        self.invalidate();
        if self.polygons.contains(&polygon) {
            return false;
        }
        self.polygons.push(polygon);
        true
    }

    /// Adds every polygon in `polygons`, skipping ones already present.
    pub fn add_all<I>(&mut self, polygons: I)
    where
        I: IntoIterator<Item = Polygon<F>>,
    {
        for polygon in polygons {
            self.add(polygon);
        }
    }

    /// Removes `polygon`, returning `true` if it was present.
    pub fn remove(&mut self, polygon: &Polygon<F>) -> bool {
        self.invalidate();
        match self.polygons.iter().position(|p| p == polygon) {
            Some(i) => {
                self.polygons.remove(i);
                true
            }
            None => false,
        }
    }

    /// Removes every polygon.
    pub fn clear(&mut self) {
        self.invalidate();
        self.polygons.clear();
    }

    /// Number of polygons on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if the board holds no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The polygons, in insertion order.
    #[inline]
    pub fn polygons(&self) -> &[Polygon<F>] {
        &self.polygons
    }

    /// Returns `true` if an equal polygon is on the board.
    pub fn contains_polygon(&self, polygon: &Polygon<F>) -> bool {
        self.polygons.contains(polygon)
    }

    /// Returns `true` if `p` tolerantly equals a vertex of some polygon.
    pub fn contains_node(&self, p: Point2<F>) -> bool {
        self.nodes().iter().any(|n| n.approx_eq(p))
    }

    /// Returns `true` if `edge` matches an edge of some polygon, in either
    /// direction.
    pub fn contains_edge(&self, edge: Segment2<F>) -> bool {
        self.edges().iter().any(|e| e.approx_eq(edge))
    }

    fn derived(&self) -> &Derived<F> {
        self.derived.get_or_init(|| Derived::build(&self.polygons))
    }

    /// All polygon edges, deduplicated.
    pub fn edges(&self) -> &[Segment2<F>] {
        &self.derived().edges
    }

    /// All polygon vertices, deduplicated, in polygon order.
    pub fn nodes(&self) -> &[Point2<F>] {
        &self.derived().nodes
    }

    /// Board nodes are "owned"; any other point is a transient query point.
    pub fn is_owned(&self, p: Point2<F>) -> bool {
        self.contains_node(p)
    }

    /// Visibility counters accumulated so far.
    pub fn stats(&self) -> BoardStats {
        self.stats
    }

    fn mesh_mut(&mut self) -> &mut NavigationMesh {
        let mesh = match self.mesh.take() {
            Some(mesh) => mesh,
            None => {
                let nodes = self.nodes().iter().map(|&n| NodeKey::of(n));
                let mesh = NavigationMesh::seeded(nodes, self.unowned_limit);
                debug!("seeded navigation mesh with {} owned nodes", self.nodes().len());
                mesh
            }
        };
        self.mesh.insert(mesh)
    }

    /// Uncached line-of-sight test: `true` unless some polygon blocks the
    /// segment from `a` to `b`.
    ///
    /// Chords between two vertices of the same polygon are tested against
    /// its interior too, so a path can never cut through an obstacle.
    pub fn visibility_test(&self, a: Point2<F>, b: Point2<F>) -> bool {
        let segment = Segment2::new(a, b);
        !self
            .polygons
            .iter()
            .any(|p| p.does_intersect_line_with(segment, true))
    }

    /// Cached line-of-sight query. A point is always visible to itself.
    pub fn is_visible(&mut self, a: Point2<F>, b: Point2<F>) -> bool {
        if a.approx_eq(b) {
            return true;
        }

        let (ka, kb) = (NodeKey::of(a), NodeKey::of(b));
        if let Some(visible) = self.mesh_mut().lookup(ka, kb) {
            self.stats.cache_hits += 1;
            return visible;
        }

        let visible = self.visibility_test(a, b);
        self.stats.visibility_tests += 1;
        self.mesh_mut().record(ka, kb, visible);
        visible
    }

    /// Board nodes and `extras` visible from `pov`, each listed once.
    ///
    /// Computed from [`Board::is_visible`] for every candidate, so results
    /// are cached but the set itself is not.
    pub fn get_visible(&mut self, pov: Point2<F>, extras: &[Point2<F>]) -> Vec<Point2<F>> {
        let mut seen = HashSet::new();
        let candidates: Vec<Point2<F>> = self
            .nodes()
            .iter()
            .chain(extras)
            .copied()
            .filter(|&p| seen.insert(NodeKey::of(p)))
            .collect();

        candidates
            .into_iter()
            .filter(|&p| self.is_visible(pov, p))
            .collect()
    }

    /// A new board with every polygon offset by `outset`.
    ///
    /// The unowned mesh bound carries over; caches start empty.
    pub fn expanded(&self, outset: F) -> Result<Board<F>, SightlineError> {
        let polygons = self
            .polygons
            .iter()
            .map(|p| p.expanded(outset))
            .collect::<Result<Vec<_>, _>>()?;

        let mut board = Board::from_polygons(polygons);
        board.unowned_limit = self.unowned_limit;
        Ok(board)
    }
}
