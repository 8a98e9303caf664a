//! Minimum spanning tree via Prim's algorithm.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};
use serde::Serialize;

use crate::types::{GraphResult, TravelTime};

use super::TransitGraph;

/// A route selected into the spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    /// Stop already in the tree.
    pub parent: usize,
    /// Stop added to the tree by this edge.
    pub child: usize,
    /// Travel time of the route.
    pub travel_time: TravelTime,
}

/// Minimum spanning tree of the component containing `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    /// Stop the tree was grown from.
    pub root: usize,
    /// Selected routes, in selection order.
    pub edges: Vec<TreeEdge>,
    /// Sum of the selected travel times.
    pub total_travel_time: u64,
}

impl SpanningTree {
    /// Stops covered by the tree, including the root.
    pub fn stop_count(&self) -> usize {
        self.edges.len() + 1
    }

    /// Whether `stop` belongs to the tree.
    pub fn contains(&self, stop: usize) -> bool {
        stop == self.root || self.edges.iter().any(|e| e.child == stop)
    }
}

/// Prim's algorithm from `start`.
///
/// Candidates are ordered by `(travel_time, parent, child)`; the seed has no
/// parent so it always sorts first. A candidate whose child is already in
/// the tree is stale and dropped. Stops outside `start`'s component are
/// never reached.
pub fn prim(graph: &TransitGraph, start: usize) -> GraphResult<SpanningTree> {
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut min_weight: Vec<Option<TravelTime>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut edges = Vec::new();
    let mut total_travel_time = 0u64;

    let mut frontier: BinaryHeap<Reverse<(TravelTime, Option<usize>, usize)>> = BinaryHeap::new();
    min_weight[start] = Some(0);
    frontier.push(Reverse((0, None, start)));

    while let Some(Reverse((weight, from, u))) = frontier.pop() {
        if in_tree[u] {
            continue;
        }
        in_tree[u] = true;
        parent[u] = from;

        if let Some(p) = from {
            trace!("prim: select {} -> {} ({})", p, u, weight);
            edges.push(TreeEdge {
                parent: p,
                child: u,
                travel_time: weight,
            });
            total_travel_time += u64::from(weight);
        }

        for link in graph.neighbors(u) {
            if in_tree[link.to] {
                continue;
            }
            if min_weight[link.to].map_or(true, |w| link.travel_time < w) {
                min_weight[link.to] = Some(link.travel_time);
                frontier.push(Reverse((link.travel_time, Some(u), link.to)));
            }
        }
    }

    debug!(
        "prim from {} selected {} edges, total {}",
        start,
        edges.len(),
        total_travel_time
    );

    Ok(SpanningTree {
        root: start,
        edges,
        total_travel_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphError;

    #[test]
    fn picks_cheapest_edges() {
        // Square with a heavy diagonal
        let graph = TransitGraph::new(
            4,
            [(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 9)],
            None,
        )
        .unwrap();
        let tree = prim(&graph, 0).unwrap();
        assert_eq!(tree.edges.len(), 3);
        assert_eq!(tree.total_travel_time, 6);
        assert_eq!(
            tree.edges[0],
            TreeEdge {
                parent: 0,
                child: 1,
                travel_time: 1
            }
        );
    }

    #[test]
    fn other_component_excluded() {
        let graph = TransitGraph::new(5, [(0, 1, 2), (3, 4, 1)], None).unwrap();
        let tree = prim(&graph, 0).unwrap();
        assert_eq!(tree.stop_count(), 2);
        assert!(tree.contains(1));
        assert!(!tree.contains(3));
        assert!(!tree.contains(2));
    }

    #[test]
    fn single_stop_tree() {
        let graph = TransitGraph::new(1, Vec::<(usize, usize, TravelTime)>::new(), None).unwrap();
        let tree = prim(&graph, 0).unwrap();
        assert!(tree.edges.is_empty());
        assert_eq!(tree.total_travel_time, 0);
    }

    #[test]
    fn empty_graph_has_no_root() {
        let graph = TransitGraph::new(0, Vec::<(usize, usize, TravelTime)>::new(), None).unwrap();
        assert!(matches!(
            graph.minimum_spanning_tree(),
            Err(GraphError::InvalidVertex { vertex: 0, .. })
        ));
    }
}
