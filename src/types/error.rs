//! Error types for the transit-graph library.

use thiserror::Error;

/// All errors that can occur while building or querying a transit graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A route references a stop outside `[0, vertex_count)`.
    #[error("Route {src} -> {dest} references a stop outside 0..{vertex_count}")]
    InvalidEdge {
        src: usize,
        dest: usize,
        vertex_count: usize,
    },

    /// Number of supplied labels differs from the vertex count.
    #[error("Label count mismatch: expected {expected}, got {got}")]
    LabelCountMismatch { expected: usize, got: usize },

    /// A query was started from a stop outside `[0, vertex_count)`.
    #[error("Stop {vertex} is not in 0..{vertex_count}")]
    InvalidVertex { vertex: i64, vertex_count: usize },
}

/// Convenience result type for transit-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
