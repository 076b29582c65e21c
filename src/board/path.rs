//! Shortest paths around obstacles.
//!
//! # Algorithm
//!
//! Dijkstra over the visibility graph whose vertices are the board nodes
//! plus the destination. The graph is never built up front: each round
//! asks the navigation mesh which candidates are visible from the current
//! frontier and relaxes only those, so only edges leaving settled points
//! are ever tested.
//!
//! # Complexity
//!
//! - Time: O(n²) visibility queries for n board nodes
//! - Space: O(n)

use super::mesh::NodeKey;
use super::Board;
use crate::primitives::Point2;
use log::debug;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Best known way to reach a point.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PathRecord<F> {
    via: Point2<F>,
    cost: F,
    settled: bool,
}

impl<F: Float> Board<F> {
    /// The shortest obstacle-free route from `a` to `b`.
    ///
    /// The returned points exclude `a` and end with `b`; a directly
    /// visible `b` gives `[b]`. Returns `None` when no chain of mutually
    /// visible points connects the two.
    pub fn shortest_path(&mut self, a: Point2<F>, b: Point2<F>) -> Option<Vec<Point2<F>>> {
        if self.is_visible(a, b) {
            debug!("path: destination directly visible");
            return Some(vec![b]);
        }

        let start = NodeKey::of(a);
        let target = NodeKey::of(b);

        let mut seen = HashSet::from([start]);
        let candidates: Vec<Point2<F>> = self
            .nodes()
            .iter()
            .copied()
            .chain(std::iter::once(b))
            .filter(|&p| seen.insert(NodeKey::of(p)))
            .collect();

        let mut records: HashMap<NodeKey, PathRecord<F>> = HashMap::new();
        let mut frontier = a;
        let mut frontier_cost = F::zero();

        loop {
            for &candidate in &candidates {
                let key = NodeKey::of(candidate);
                let known = records.get(&key).copied();
                if known.map_or(false, |r| r.settled) || !self.is_visible(frontier, candidate) {
                    continue;
                }

                let cost = frontier_cost + frontier.distance(candidate);
                if known.map_or(true, |r| cost < r.cost) {
                    records.insert(
                        key,
                        PathRecord {
                            via: frontier,
                            cost,
                            settled: false,
                        },
                    );
                }
            }

            // First minimum wins, keeping ties in candidate order
            let next = candidates
                .iter()
                .filter_map(|&p| {
                    let key = NodeKey::of(p);
                    records
                        .get(&key)
                        .filter(|r| !r.settled)
                        .map(|r| (p, key, *r))
                })
                .min_by(|x, y| x.2.cost.partial_cmp(&y.2.cost).unwrap_or(Ordering::Equal));

            let Some((point, key, record)) = next else {
                debug!(
                    "path: destination unreachable after settling {} points",
                    records.len()
                );
                return None;
            };

            records.insert(
                key,
                PathRecord {
                    settled: true,
                    ..record
                },
            );

            if key == target {
                let path = unwind(&records, b);
                debug!("path: {} hops, cost {:?}", path.len(), record.cost.to_f64());
                return Some(path);
            }

            frontier = point;
            frontier_cost = record.cost;
        }
    }
}

/// Follows `via` links back from `end` until reaching the start point,
/// which never has a record.
fn unwind<F: Float>(records: &HashMap<NodeKey, PathRecord<F>>, end: Point2<F>) -> Vec<Point2<F>> {
    let mut path = vec![end];
    let mut cursor = end;
    while let Some(record) = records.get(&NodeKey::of(cursor)) {
        cursor = record.via;
        path.push(cursor);
    }
    // The last pushed point is the start
    path.pop();
    path.reverse();
    path
}
