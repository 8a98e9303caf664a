//! In-memory transit graph and the queries that run over it.

pub mod builder;
pub mod shortest_path;
pub mod spanning_tree;
pub mod transit_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use shortest_path::{dijkstra, ShortestPaths};
pub use spanning_tree::{prim, SpanningTree, TreeEdge};
pub use transit_graph::TransitGraph;
pub use traversal::{bfs, dfs, Discovery, Traversal, TraversalKind, Visit};
