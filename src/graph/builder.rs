//! Fluent API for building TransitGraph instances.

use crate::types::{GraphResult, Route, TravelTime};

use super::TransitGraph;

/// Fluent builder for constructing a TransitGraph.
///
/// Stops get consecutive indexes in the order they are added.
pub struct GraphBuilder {
    labels: Vec<String>,
    routes: Vec<Route>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            routes: Vec::new(),
        }
    }

    /// Add a named stop, returns its index.
    pub fn add_stop(&mut self, label: impl Into<String>) -> usize {
        self.labels.push(label.into());
        self.labels.len() - 1
    }

    /// Add a route between two stops. Endpoints are checked by [`build`](Self::build).
    pub fn link(&mut self, src: usize, dest: usize, travel_time: TravelTime) -> &mut Self {
        self.routes.push(Route::new(src, dest, travel_time));
        self
    }

    /// Build the final TransitGraph.
    pub fn build(self) -> GraphResult<TransitGraph> {
        TransitGraph::new(self.labels.len(), self.routes, Some(self.labels))
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
