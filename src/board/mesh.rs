//! The navigation mesh: cached pairwise visibility between points.
//!
//! Points are keyed by [`NodeKey`], their coordinates quantized to the
//! tolerance grid. The mesh has two tiers:
//! - the *owned* tier has one entry per board node, seeded empty when the
//!   mesh is built, and lives until the board changes
//! - the *unowned* tier holds entries for arbitrary query points, created
//!   on demand and evicted wholesale once a configured bound is reached
//!
//! Eviction only costs recomputation. Every answer the unowned tier holds
//! can be rebuilt from the board's polygons.

use crate::primitives::Point2;
use crate::tolerance;
use log::debug;
use num_traits::Float;
use std::collections::HashMap;

/// A point quantized to the tolerance grid, usable as a hash key.
///
/// Each coordinate is stored as the bit pattern of its rounded grid
/// index, so distinct points stay distinct at any magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeKey(u64, u64);

impl NodeKey {
    pub(crate) fn of<F: Float>(p: Point2<F>) -> Self {
        let scale = F::from(tolerance::EPSILON).unwrap();
        NodeKey(quantize(p.x / scale), quantize(p.y / scale))
    }
}

fn quantize<F: Float>(v: F) -> u64 {
    let index = v.round();
    // -0.0 and 0.0 must share a key
    let index = if index == F::zero() { F::zero() } else { index };
    index.to_f64().unwrap_or(f64::NAN).to_bits()
}

type Adjacency = HashMap<NodeKey, bool>;

/// Where a freshly computed visibility result is stored, as
/// `(in_a_entry, in_b_entry)`.
///
/// A pair of owned nodes is stored on both sides, as is a pair of
/// unowned points. A mixed pair is stored only under the unowned point,
/// so owned entries never reference points that come and go.
pub(crate) fn storage_policy(a_owned: bool, b_owned: bool) -> (bool, bool) {
    (!a_owned || b_owned, !b_owned || a_owned)
}

#[derive(Debug, Clone, Default)]
pub(crate) struct NavigationMesh {
    owned: HashMap<NodeKey, Adjacency>,
    unowned: HashMap<NodeKey, Adjacency>,
    unowned_limit: Option<usize>,
}

impl NavigationMesh {
    /// Builds a mesh with one empty owned entry per board node.
    pub(crate) fn seeded<I>(nodes: I, unowned_limit: Option<usize>) -> Self
    where
        I: IntoIterator<Item = NodeKey>,
    {
        Self {
            owned: nodes.into_iter().map(|k| (k, Adjacency::new())).collect(),
            unowned: HashMap::new(),
            unowned_limit,
        }
    }

    #[inline]
    pub(crate) fn is_owned(&self, key: NodeKey) -> bool {
        self.owned.contains_key(&key)
    }

    pub(crate) fn entry(&self, key: NodeKey) -> Option<&Adjacency> {
        self.owned.get(&key).or_else(|| self.unowned.get(&key))
    }

    /// Cached visibility between `a` and `b`, checking `a`'s entry first.
    pub(crate) fn lookup(&self, a: NodeKey, b: NodeKey) -> Option<bool> {
        self.entry(a)
            .and_then(|adj| adj.get(&b))
            .or_else(|| self.entry(b).and_then(|adj| adj.get(&a)))
            .copied()
    }

    /// Stores a visibility result according to [`storage_policy`].
    pub(crate) fn record(&mut self, a: NodeKey, b: NodeKey, visible: bool) {
        let (in_a, in_b) = storage_policy(self.is_owned(a), self.is_owned(b));
        if in_a {
            self.entry_mut(a).insert(b, visible);
        }
        if in_b {
            self.entry_mut(b).insert(a, visible);
        }
    }

    #[inline]
    pub(crate) fn unowned_len(&self) -> usize {
        self.unowned.len()
    }

    fn entry_mut(&mut self, key: NodeKey) -> &mut Adjacency {
        if self.owned.contains_key(&key) {
            return self.owned.entry(key).or_default();
        }

        if !self.unowned.contains_key(&key) {
            if let Some(limit) = self.unowned_limit {
                if self.unowned.len() >= limit {
                    debug!("evicting {} unowned mesh entries", self.unowned.len());
                    self.unowned.clear();
                }
            }
        }
        self.unowned.entry(key).or_default()
    }
}
