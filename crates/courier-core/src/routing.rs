//! The shortest-path engine: queue-driven label-correcting relaxation.
//!
//! This is an SPFA-style variant, not Dijkstra: there is no priority queue
//! and no location is ever finalized. A location re-enters the FIFO work
//! queue every time its best-known distance improves, which re-relaxes its
//! neighbors. Duplicates in the queue are allowed and harmless. With
//! non-negative weights every relaxation strictly decreases a finite
//! distance bounded below by zero, so the drain terminates; the worst case
//! exceeds a binary-heap Dijkstra's, which is acceptable at city scale.
//!
//! Negative weights are unrepresentable here ([`Weight`] is unsigned), so
//! the non-negative-only contract holds by construction.

use crate::graph::{CityGraph, Weight};
use crate::id::LocationId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Accumulated route distance. Wider than a single segment [`Weight`] so
/// long paths cannot overflow.
pub type Distance = u64;

// ---------------------------------------------------------------------------
// RouteTable
// ---------------------------------------------------------------------------

/// Minimal distances and predecessors from one source location.
///
/// Produced by [`RouteTable::compute`]; sized to the graph's location count
/// at computation time. `None` in the distance table means unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    source: LocationId,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<LocationId>>,
}

/// A reconstructed route: the full source-to-target location sequence,
/// inclusive of both endpoints, and its total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<LocationId>,
    pub distance: Distance,
}

impl RouteTable {
    /// Run the label-correcting relaxation from `source` over `graph`.
    ///
    /// Neighbors are relaxed in insertion order. An out-of-range source
    /// yields an all-unreachable table sized to the graph.
    pub fn compute(graph: &CityGraph, source: LocationId) -> RouteTable {
        let len = graph.num_locations();
        let mut distances: Vec<Option<Distance>> = vec![None; len];
        let mut predecessors: Vec<Option<LocationId>> = vec![None; len];
        let mut queue: VecDeque<LocationId> = VecDeque::new();

        if source.index() < len {
            distances[source.index()] = Some(0);
            queue.push_back(source);
        }

        while let Some(current) = queue.pop_front() {
            // Queued locations always have a finite label; re-read it at pop
            // time so stale duplicates relax with the latest improvement.
            let Some(through) = distances[current.index()] else {
                continue;
            };

            for &(neighbor, weight) in graph.neighbors(current) {
                let candidate = through + Distance::from(weight);
                if distances[neighbor.index()].is_none_or(|best| candidate < best) {
                    distances[neighbor.index()] = Some(candidate);
                    predecessors[neighbor.index()] = Some(current);
                    queue.push_back(neighbor);
                }
            }
        }

        RouteTable {
            source,
            distances,
            predecessors,
        }
    }

    /// The source location this table was computed from.
    pub fn source(&self) -> LocationId {
        self.source
    }

    /// Number of locations covered by the table.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether the table covers no locations at all (empty graph).
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Minimal distance from the source, or `None` when `loc` is
    /// unreachable or outside the table.
    pub fn distance(&self, loc: LocationId) -> Option<Distance> {
        self.distances.get(loc.index()).copied().flatten()
    }

    /// Whether a route from the source to `loc` exists.
    pub fn is_reachable(&self, loc: LocationId) -> bool {
        self.distance(loc).is_some()
    }

    /// The location `loc` was best reached through. `None` for the source
    /// itself and for unreachable locations.
    pub fn predecessor(&self, loc: LocationId) -> Option<LocationId> {
        self.predecessors.get(loc.index()).copied().flatten()
    }

    /// Reconstruct the minimal source-to-target path by walking the
    /// predecessor table backwards. `None` when `target` is unreachable;
    /// the source's own path is `[source]`.
    pub fn path_to(&self, target: LocationId) -> Option<Vec<LocationId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }

    /// Path and total distance together, the shape `deliver_all` consumes.
    pub fn route_to(&self, target: LocationId) -> Option<Route> {
        Some(Route {
            distance: self.distance(target)?,
            path: self.path_to(target)?,
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(i: u32) -> LocationId {
        LocationId(i)
    }

    /// A–B(4), B–C(3), A–C(10): the two-hop route wins over the direct one.
    fn triangle() -> CityGraph {
        let mut graph = CityGraph::new();
        graph.add_edge(loc(0), loc(1), 4);
        graph.add_edge(loc(1), loc(2), 3);
        graph.add_edge(loc(0), loc(2), 10);
        graph
    }

    #[test]
    fn source_distance_is_zero() {
        let table = RouteTable::compute(&triangle(), loc(0));
        assert_eq!(table.distance(loc(0)), Some(0));
        assert_eq!(table.predecessor(loc(0)), None);
    }

    #[test]
    fn two_hop_route_beats_heavier_direct_edge() {
        let table = RouteTable::compute(&triangle(), loc(0));
        assert_eq!(table.distance(loc(2)), Some(7));
        assert_eq!(table.path_to(loc(2)), Some(vec![loc(0), loc(1), loc(2)]));
    }

    #[test]
    fn source_path_is_single_location() {
        let table = RouteTable::compute(&triangle(), loc(0));
        assert_eq!(table.path_to(loc(0)), Some(vec![loc(0)]));
    }

    #[test]
    fn disconnected_location_is_unreachable() {
        let mut graph = triangle();
        graph.add_edge(loc(3), loc(4), 1); // separate component

        let table = RouteTable::compute(&graph, loc(0));
        assert_eq!(table.distance(loc(3)), None);
        assert!(!table.is_reachable(loc(4)));
        assert_eq!(table.path_to(loc(3)), None);
    }

    #[test]
    fn relaxation_corrects_early_labels() {
        // 0-1(1), 1-2(1) gives 2 a label of 2 through 1, but the direct
        // 0-2(5) edge is relaxed first; the label must be corrected down.
        let mut graph = CityGraph::new();
        graph.add_edge(loc(0), loc(2), 5);
        graph.add_edge(loc(0), loc(1), 1);
        graph.add_edge(loc(1), loc(2), 1);

        let table = RouteTable::compute(&graph, loc(0));
        assert_eq!(table.distance(loc(2)), Some(2));
        assert_eq!(table.path_to(loc(2)), Some(vec![loc(0), loc(1), loc(2)]));
    }

    #[test]
    fn parallel_edges_route_through_the_lightest() {
        let mut graph = CityGraph::new();
        graph.add_edge(loc(0), loc(1), 9);
        graph.add_edge(loc(0), loc(1), 3);
        graph.add_edge(loc(0), loc(1), 7);

        let table = RouteTable::compute(&graph, loc(0));
        assert_eq!(table.distance(loc(1)), Some(3));
    }

    #[test]
    fn equal_weight_routes_keep_the_first_relaxer() {
        // 0-1(2), 0-2(2), 1-3(2), 2-3(2): both routes to 3 cost 4. Strict
        // improvement means the first finite label sticks, and location 1
        // relaxes 3 first because it entered the queue first.
        let mut graph = CityGraph::new();
        graph.add_edge(loc(0), loc(1), 2);
        graph.add_edge(loc(0), loc(2), 2);
        graph.add_edge(loc(1), loc(3), 2);
        graph.add_edge(loc(2), loc(3), 2);

        let table = RouteTable::compute(&graph, loc(0));
        assert_eq!(table.distance(loc(3)), Some(4));
        assert_eq!(table.predecessor(loc(3)), Some(loc(1)));
    }

    #[test]
    fn out_of_range_source_yields_all_unreachable() {
        let table = RouteTable::compute(&triangle(), loc(40));
        assert_eq!(table.len(), 3);
        assert!(!table.is_reachable(loc(0)));
        assert!(!table.is_reachable(loc(40)));
    }

    #[test]
    fn empty_graph_yields_empty_table() {
        let table = RouteTable::compute(&CityGraph::new(), loc(0));
        assert!(table.is_empty());
        assert_eq!(table.distance(loc(0)), None);
    }

    #[test]
    fn recompute_on_unmodified_graph_is_identical() {
        let graph = triangle();
        let first = RouteTable::compute(&graph, loc(0));
        let second = RouteTable::compute(&graph, loc(0));
        assert_eq!(first, second);
    }

    #[test]
    fn route_to_pairs_path_with_distance() {
        let table = RouteTable::compute(&triangle(), loc(0));
        let route = table.route_to(loc(2)).unwrap();
        assert_eq!(route.path, vec![loc(0), loc(1), loc(2)]);
        assert_eq!(route.distance, 7);
        assert_eq!(table.route_to(loc(9)), None);
    }
}
