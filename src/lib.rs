//! transit-graph — a small weighted transit network and classic graph queries over it.
//!
//! Stops are vertices, routes are undirected edges weighted by travel time.
//! The graph answers depth-first and breadth-first traversals, single-source
//! shortest travel times (Dijkstra) and minimum spanning trees (Prim), each
//! returned as a structured result that the `cli` module renders.

pub mod cli;
pub mod graph;
pub mod sample;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    Discovery, GraphBuilder, ShortestPaths, SpanningTree, TransitGraph, Traversal, TraversalKind,
    TreeEdge, Visit,
};
pub use sample::downtown_network;
pub use types::{GraphError, GraphResult, Link, Route, TravelTime, DEFAULT_TREE_ROOT};
