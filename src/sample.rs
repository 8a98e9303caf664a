//! The fixed nine-stop downtown network used by the `transit` demo.

use crate::graph::TransitGraph;
use crate::types::{GraphResult, TravelTime};

/// Stop names, indexed by stop.
pub const SAMPLE_STOPS: [&str; 9] = [
    "Stop A (Downtown Terminal)",
    "Stop B (Central Station)",
    "Stop C (Uptown Hub)",
    "Stop D (Market St)",
    "Stop E (City Hall)",
    "Stop F (Airport Terminal)",
    "Stop G (Industrial Park)",
    "Stop H (Suburban Plaza)",
    "Stop I (Metro Center)",
];

/// Routes as `(src, dest, minutes)`.
pub const SAMPLE_ROUTES: [(usize, usize, TravelTime); 13] = [
    (0, 1, 8),
    (0, 2, 21),
    (1, 2, 6),
    (1, 3, 5),
    (1, 4, 4),
    (2, 7, 11),
    (2, 8, 8),
    (3, 4, 9),
    (5, 6, 10),
    (5, 7, 15),
    (5, 8, 5),
    (6, 7, 3),
    (6, 8, 7),
];

/// Build the sample network.
pub fn downtown_network() -> GraphResult<TransitGraph> {
    TransitGraph::new(
        SAMPLE_STOPS.len(),
        SAMPLE_ROUTES,
        Some(SAMPLE_STOPS.iter().map(|s| s.to_string()).collect()),
    )
}
