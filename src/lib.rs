//! Skyroute - Minimum-cost flight routing over undirected airport networks
//!
//! This library computes single-source shortest paths over a weighted,
//! undirected flight network using a Fibonacci heap for the frontier and a
//! dense bit set for settled-vertex tracking, giving the classic
//! O(E + V log V) bound for Dijkstra's algorithm.
//!
//! Edge weights are unsigned integers and are expected to already include any
//! fixed per-airport surcharge; [`graph::FlightNetwork`] applies the surcharge
//! while building the graph from `(from, to, cost)` route triples.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, Cost, ShortestPathAlgorithm, ShortestPathResult};
pub use data_structures::{DenseBitSet, FibonacciHeap, NodeHandle};
/// Re-export main types for convenient use
pub use graph::{network::Route, FlightNetwork, UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("extract from an empty priority queue")]
    EmptyHeap,

    #[error("decrease_key with a key that is not strictly smaller than the current key")]
    KeyNotDecreased,

    #[error("stale or invalid heap handle: {0}")]
    InvalidHandle(usize),

    #[error("source vertex not found in graph")]
    SourceNotFound,

    #[error("unknown airport: {0}")]
    UnknownAirport(String),

    #[error("malformed route on line {0}: {1:?}")]
    MalformedRoute(usize, String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
