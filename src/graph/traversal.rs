//! Graph traversal algorithms (DFS and BFS).

use std::collections::VecDeque;

use log::{debug, trace};
use serde::Serialize;

use crate::types::{GraphResult, TravelTime};

use super::TransitGraph;

/// Traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalKind {
    /// Descend into the first unvisited neighbour before trying the next one.
    DepthFirst,
    /// Visit stops in layers of increasing hop distance.
    BreadthFirst,
}

/// How a stop was reached during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discovery {
    /// The already-visited stop the traversal came from.
    pub from: usize,
    /// Travel time of the route used.
    pub travel_time: TravelTime,
}

/// A single visited stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Visit {
    /// The visited stop.
    pub stop: usize,
    /// `None` for the start stop.
    pub via: Option<Discovery>,
    /// Depth in the traversal tree. For BFS this is the hop distance.
    pub depth: u32,
}

/// Result of a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    /// Which traversal produced this result.
    pub kind: TraversalKind,
    /// Starting stop.
    pub start: usize,
    /// Visited stops in visitation order.
    pub visits: Vec<Visit>,
}

impl Traversal {
    /// Visited stop indexes, in order.
    pub fn order(&self) -> Vec<usize> {
        self.visits.iter().map(|v| v.stop).collect()
    }

    /// Number of visited stops.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// True if nothing was visited (never the case for a successful traversal).
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Whether `stop` was reached.
    pub fn contains(&self, stop: usize) -> bool {
        self.visits.iter().any(|v| v.stop == stop)
    }
}

/// A DFS stack frame: the stop and the next adjacency index to try.
struct Frame {
    stop: usize,
    next: usize,
    depth: u32,
}

/// Pre-order depth-first traversal with an explicit stack.
///
/// Produces the same order as the recursive formulation: from each stop the
/// first unvisited neighbour in adjacency order is entered before the rest.
pub fn dfs(graph: &TransitGraph, start: usize) -> GraphResult<Traversal> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut visits = Vec::new();
    let mut stack = vec![Frame {
        stop: start,
        next: 0,
        depth: 0,
    }];

    visited[start] = true;
    visits.push(Visit {
        stop: start,
        via: None,
        depth: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let links = graph.neighbors(frame.stop);
        let Some(link) = links.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        if visited[link.to] {
            continue;
        }

        let (from, depth) = (frame.stop, frame.depth + 1);
        trace!("dfs: {} -> {} ({})", from, link.to, link.travel_time);
        visited[link.to] = true;
        visits.push(Visit {
            stop: link.to,
            via: Some(Discovery {
                from,
                travel_time: link.travel_time,
            }),
            depth,
        });
        stack.push(Frame {
            stop: link.to,
            next: 0,
            depth,
        });
    }

    debug!("dfs from {} visited {} stops", start, visits.len());

    Ok(Traversal {
        kind: TraversalKind::DepthFirst,
        start,
        visits,
    })
}

/// Breadth-first traversal. Stops are marked visited when enqueued.
pub fn bfs(graph: &TransitGraph, start: usize) -> GraphResult<Traversal> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut visits = Vec::new();
    let mut queue: VecDeque<(usize, u32)> = VecDeque::new();

    visited[start] = true;
    visits.push(Visit {
        stop: start,
        via: None,
        depth: 0,
    });
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for link in graph.neighbors(current) {
            if visited[link.to] {
                continue;
            }
            trace!("bfs: {} -> {} ({})", current, link.to, link.travel_time);
            visited[link.to] = true;
            visits.push(Visit {
                stop: link.to,
                via: Some(Discovery {
                    from: current,
                    travel_time: link.travel_time,
                }),
                depth: depth + 1,
            });
            queue.push_back((link.to, depth + 1));
        }
    }

    debug!("bfs from {} visited {} stops", start, visits.len());

    Ok(Traversal {
        kind: TraversalKind::BreadthFirst,
        start,
        visits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphError;

    /// Reference recursive DFS, used to pin the explicit-stack order.
    fn recursive(
        graph: &TransitGraph,
        stop: usize,
        visited: &mut [bool],
        out: &mut Vec<usize>,
    ) {
        visited[stop] = true;
        out.push(stop);
        for link in graph.neighbors(stop) {
            if !visited[link.to] {
                recursive(graph, link.to, visited, out);
            }
        }
    }

    fn diamond() -> TransitGraph {
        // 0 - 1 - 3
        //  \     /
        //   2 --
        TransitGraph::new(5, [(0, 1, 1), (0, 2, 2), (1, 3, 3), (2, 3, 4)], None).unwrap()
    }

    #[test]
    fn dfs_matches_recursive_order() {
        let graph = diamond();
        let mut visited = vec![false; graph.vertex_count()];
        let mut expected = Vec::new();
        recursive(&graph, 0, &mut visited, &mut expected);

        let result = dfs(&graph, 0).unwrap();
        assert_eq!(result.order(), expected);
        assert_eq!(result.order(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn dfs_records_discovery_edges() {
        let result = dfs(&diamond(), 0).unwrap();
        assert_eq!(result.visits[0].via, None);
        assert_eq!(
            result.visits[3].via,
            Some(Discovery {
                from: 3,
                travel_time: 4
            })
        );
        assert_eq!(result.visits[3].depth, 3);
    }

    #[test]
    fn bfs_layers() {
        let result = bfs(&diamond(), 0).unwrap();
        assert_eq!(result.order(), vec![0, 1, 2, 3]);
        let depths: Vec<u32> = result.visits.iter().map(|v| v.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 2]);
    }

    #[test]
    fn isolated_stop_not_visited() {
        let graph = diamond();
        assert!(!dfs(&graph, 0).unwrap().contains(4));
        assert!(!bfs(&graph, 0).unwrap().contains(4));
        assert_eq!(bfs(&graph, 4).unwrap().order(), vec![4]);
    }

    #[test]
    fn invalid_start() {
        let graph = diamond();
        assert!(matches!(
            dfs(&graph, 5),
            Err(GraphError::InvalidVertex { vertex: 5, .. })
        ));
        assert!(matches!(
            bfs(&graph, 5),
            Err(GraphError::InvalidVertex { vertex: 5, .. })
        ));
    }
}
