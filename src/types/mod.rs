//! All data types for the transit-graph library.

pub mod error;
pub mod route;

pub use error::{GraphError, GraphResult};
pub use route::{Link, Route, TravelTime};

/// Stop from which spanning trees grow when no start is given.
pub const DEFAULT_TREE_ROOT: usize = 0;
