//! Single-source shortest travel times (Dijkstra).
//!
//! Binary-heap frontier with lazy deletion: a relaxed stop is pushed again
//! with its new distance, and entries whose distance no longer matches the
//! table are skipped when popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};
use serde::Serialize;

use crate::types::GraphResult;

use super::TransitGraph;

/// Shortest travel times from one stop to every stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// Starting stop.
    pub start: usize,
    /// Minimum total travel time per stop; `None` if unreachable.
    pub distances: Vec<Option<u64>>,
    /// Previous stop on a shortest route; `None` for the start and unreachable stops.
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Minimum travel time to `stop`, or `None` if it is unreachable or unknown.
    pub fn distance(&self, stop: usize) -> Option<u64> {
        self.distances.get(stop).copied().flatten()
    }

    /// Whether `stop` can be reached from the start.
    pub fn is_reachable(&self, stop: usize) -> bool {
        self.distance(stop).is_some()
    }

    /// Stops along a shortest route from the start to `target`, both included.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's single-source shortest paths.
///
/// Time: O((V + E) log V)
pub fn dijkstra(graph: &TransitGraph, start: usize) -> GraphResult<ShortestPaths> {
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut distances: Vec<Option<u64>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    distances[start] = Some(0);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0u64, start)));

    while let Some(Reverse((dist, u))) = heap.pop() {
        // Stale entry: a shorter distance was already settled
        if distances[u].is_some_and(|best| dist > best) {
            continue;
        }

        for link in graph.neighbors(u) {
            let candidate = dist + u64::from(link.travel_time);
            if distances[link.to].map_or(true, |current| candidate < current) {
                trace!("dijkstra: relax {} via {} to {}", link.to, u, candidate);
                distances[link.to] = Some(candidate);
                predecessors[link.to] = Some(u);
                heap.push(Reverse((candidate, link.to)));
            }
        }
    }

    debug!(
        "dijkstra from {} reached {}/{} stops",
        start,
        distances.iter().filter(|d| d.is_some()).count(),
        n
    );

    Ok(ShortestPaths {
        start,
        distances,
        predecessors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> TransitGraph {
        TransitGraph::new(4, [(0, 1, 10), (0, 2, 3), (2, 1, 4)], None).unwrap()
    }

    #[test]
    fn prefers_cheaper_indirect_route() {
        let paths = dijkstra(&triangle(), 0).unwrap();
        assert_eq!(paths.distance(0), Some(0));
        assert_eq!(paths.distance(1), Some(7));
        assert_eq!(paths.distance(2), Some(3));
        assert_eq!(paths.path_to(1), Some(vec![0, 2, 1]));
    }

    #[test]
    fn unreachable_is_none() {
        let paths = dijkstra(&triangle(), 0).unwrap();
        assert_eq!(paths.distance(3), None);
        assert!(!paths.is_reachable(3));
        assert_eq!(paths.path_to(3), None);
        assert_eq!(paths.predecessors[3], None);
    }

    #[test]
    fn path_to_start_is_single_stop() {
        let paths = dijkstra(&triangle(), 2).unwrap();
        assert_eq!(paths.path_to(2), Some(vec![2]));
    }

    #[test]
    fn zero_weight_routes() {
        let graph = TransitGraph::new(3, [(0, 1, 0), (1, 2, 0)], None).unwrap();
        let paths = dijkstra(&graph, 2).unwrap();
        assert_eq!(paths.distances, vec![Some(0), Some(0), Some(0)]);
    }
}
