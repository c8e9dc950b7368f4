//! The city graph: undirected weighted route segments between locations.
//!
//! Adjacency is a dense arena indexed by [`LocationId`] -- locations are
//! plain integers, so per-location state lives in `Vec`s rather than a
//! keyed map. The graph grows to fit whatever edges are added and is never
//! mutated back down; topology changes build a fresh graph and swap it in.

use crate::id::LocationId;
use serde::{Deserialize, Serialize};

/// Weight of a single route segment. Strictly positive for every recorded
/// edge; `0` is reserved by the topology document to mean "no direct route".
pub type Weight = u32;

// ---------------------------------------------------------------------------
// CityGraph
// ---------------------------------------------------------------------------

/// Undirected weighted adjacency arena.
///
/// Every `add_edge(u, v, w)` records `(v, w)` on `u`'s list and `(u, w)` on
/// `v`'s list, in insertion order. Parallel edges between the same pair are
/// all retained; the relaxation engine simply never improves through the
/// heavier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityGraph {
    /// `adjacency[u]` holds `(v, w)` pairs in insertion order.
    adjacency: Vec<Vec<(LocationId, Weight)>>,
    /// One past the highest location seen across all edges. Grows
    /// monotonically, never shrinks.
    num_locations: usize,
    /// Undirected edge count (each `add_edge` call counts once).
    edge_count: usize,
}

impl CityGraph {
    /// Create a new, empty city graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an undirected route segment between `u` and `v`.
    ///
    /// The graph grows to fit both endpoints; there is no prior bound to
    /// validate against. Contract: `weight > 0`.
    pub fn add_edge(&mut self, u: LocationId, v: LocationId, weight: Weight) {
        debug_assert!(weight > 0, "route segments have positive weight");

        let needed = u.index().max(v.index()) + 1;
        if needed > self.num_locations {
            self.num_locations = needed;
            self.adjacency.resize_with(needed, Vec::new);
        }

        self.adjacency[u.index()].push((v, weight));
        self.adjacency[v.index()].push((u, weight));
        self.edge_count += 1;
    }

    /// The `(neighbor, weight)` pairs recorded for `loc`, in insertion
    /// order. Empty for any location without edges, in or out of range;
    /// never errors.
    pub fn neighbors(&self, loc: LocationId) -> &[(LocationId, Weight)] {
        self.adjacency
            .get(loc.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// One past the highest location seen across all edges.
    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    /// Whether `loc` falls inside the dense location range.
    pub fn contains(&self, loc: LocationId) -> bool {
        loc.index() < self.num_locations
    }

    /// Whether any edge has been recorded.
    pub fn is_empty(&self) -> bool {
        self.num_locations == 0
    }

    /// Number of undirected segments recorded, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate over every location in the dense range.
    pub fn locations(&self) -> impl Iterator<Item = LocationId> {
        (0..self.num_locations as u32).map(LocationId)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
