//! Core graph structure — stops + routes as an insertion-ordered adjacency list.

use log::debug;

use crate::types::{GraphError, GraphResult, Link, Route, DEFAULT_TREE_ROOT};

use super::shortest_path::{dijkstra, ShortestPaths};
use super::spanning_tree::{prim, SpanningTree};
use super::traversal::{bfs, dfs, Traversal};

/// An immutable, undirected, weighted transit network.
///
/// Every route contributes one [`Link`] to each endpoint's adjacency list, in
/// the order routes were supplied. That order is what the traversals follow.
#[derive(Debug, Clone)]
pub struct TransitGraph {
    /// Adjacency lists, indexed by stop.
    adjacency: Vec<Vec<Link>>,
    /// Display labels, one per stop.
    labels: Vec<String>,
    /// Routes in insertion order.
    routes: Vec<Route>,
}

impl TransitGraph {
    /// Build a graph of `vertex_count` stops from a list of routes.
    ///
    /// Fails with [`GraphError::InvalidEdge`] if a route endpoint is out of
    /// range and with [`GraphError::LabelCountMismatch`] if labels are given
    /// but do not number exactly `vertex_count`. Without labels each stop is
    /// labelled by its index.
    pub fn new<I>(
        vertex_count: usize,
        routes: I,
        labels: Option<Vec<String>>,
    ) -> GraphResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Route>,
    {
        let labels = match labels {
            Some(labels) if labels.len() != vertex_count => {
                return Err(GraphError::LabelCountMismatch {
                    expected: vertex_count,
                    got: labels.len(),
                });
            }
            Some(labels) => labels,
            None => (0..vertex_count).map(|i| i.to_string()).collect(),
        };

        let mut adjacency: Vec<Vec<Link>> = vec![Vec::new(); vertex_count];
        let mut kept = Vec::new();

        for route in routes.into_iter().map(Into::into) {
            let Route {
                src,
                dest,
                travel_time,
            } = route;
            if src >= vertex_count || dest >= vertex_count {
                return Err(GraphError::InvalidEdge {
                    src,
                    dest,
                    vertex_count,
                });
            }
            adjacency[src].push(Link {
                to: dest,
                travel_time,
            });
            adjacency[dest].push(Link {
                to: src,
                travel_time,
            });
            kept.push(route);
        }

        debug!(
            "built transit graph: {} stops, {} routes",
            vertex_count,
            kept.len()
        );

        Ok(Self {
            adjacency,
            labels,
            routes: kept,
        })
    }

    /// Number of stops.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of routes (undirected edges).
    pub fn edge_count(&self) -> usize {
        self.routes.len()
    }

    /// Routes in the order they were supplied.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Adjacency list of a stop, or an empty slice for an unknown stop.
    pub fn neighbors(&self, stop: usize) -> &[Link] {
        self.adjacency.get(stop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Display label of a stop.
    pub fn label(&self, stop: usize) -> Option<&str> {
        self.labels.get(stop).map(String::as_str)
    }

    /// All labels, indexed by stop.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Check that `stop` is a valid index.
    pub fn check_vertex(&self, stop: usize) -> GraphResult<usize> {
        if stop < self.vertex_count() {
            Ok(stop)
        } else {
            Err(GraphError::InvalidVertex {
                vertex: i64::try_from(stop).unwrap_or(i64::MAX),
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Validate a signed, caller-supplied stop index (e.g. from the command line).
    pub fn resolve_vertex(&self, raw: i64) -> GraphResult<usize> {
        usize::try_from(raw)
            .ok()
            .filter(|&stop| stop < self.vertex_count())
            .ok_or(GraphError::InvalidVertex {
                vertex: raw,
                vertex_count: self.vertex_count(),
            })
    }

    /// Depth-first traversal from `start`.
    pub fn depth_first(&self, start: usize) -> GraphResult<Traversal> {
        dfs(self, start)
    }

    /// Breadth-first traversal from `start`.
    pub fn breadth_first(&self, start: usize) -> GraphResult<Traversal> {
        bfs(self, start)
    }

    /// Shortest travel times from `start` to every stop.
    pub fn shortest_paths(&self, start: usize) -> GraphResult<ShortestPaths> {
        dijkstra(self, start)
    }

    /// Minimum spanning tree of the component containing stop 0.
    pub fn minimum_spanning_tree(&self) -> GraphResult<SpanningTree> {
        prim(self, DEFAULT_TREE_ROOT)
    }

    /// Minimum spanning tree of the component containing `start`.
    pub fn minimum_spanning_tree_from(&self, start: usize) -> GraphResult<SpanningTree> {
        prim(self, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_keeps_insertion_order() {
        let graph = TransitGraph::new(3, [(0, 2, 4), (0, 1, 7), (1, 2, 1)], None).unwrap();
        let order: Vec<usize> = graph.neighbors(0).iter().map(|l| l.to).collect();
        assert_eq!(order, vec![2, 1]);
        let order: Vec<usize> = graph.neighbors(2).iter().map(|l| l.to).collect();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn out_of_range_route_rejected() {
        let err = TransitGraph::new(2, [(0, 1, 1), (1, 2, 1)], None).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidEdge {
                src: 1,
                dest: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn default_labels_are_indices() {
        let graph = TransitGraph::new(2, Vec::<Route>::new(), None).unwrap();
        assert_eq!(graph.label(1), Some("1"));
        assert_eq!(graph.label(2), None);
    }

    #[test]
    fn resolve_vertex_bounds() {
        let graph = TransitGraph::new(3, Vec::<Route>::new(), None).unwrap();
        assert_eq!(graph.resolve_vertex(2), Ok(2));
        assert!(graph.resolve_vertex(-1).is_err());
        assert!(graph.resolve_vertex(3).is_err());
        assert!(graph.check_vertex(3).is_err());
    }
}
