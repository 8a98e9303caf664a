//! Routes (weighted undirected edges) and adjacency entries.

use serde::Serialize;

/// Travel time between two adjacent stops, in minutes.
pub type TravelTime = u32;

/// An undirected route between two stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    /// One endpoint.
    pub src: usize,
    /// The other endpoint.
    pub dest: usize,
    /// Travel time in minutes.
    pub travel_time: TravelTime,
}

impl Route {
    /// Create a new route.
    pub fn new(src: usize, dest: usize, travel_time: TravelTime) -> Self {
        Self {
            src,
            dest,
            travel_time,
        }
    }
}

impl From<(usize, usize, TravelTime)> for Route {
    fn from((src, dest, travel_time): (usize, usize, TravelTime)) -> Self {
        Self::new(src, dest, travel_time)
    }
}

/// One entry of a stop's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    /// The neighbouring stop.
    pub to: usize,
    /// Travel time to the neighbour.
    pub travel_time: TravelTime,
}
