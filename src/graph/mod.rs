pub mod generators;
pub mod network;
pub mod traits;
pub mod undirected;

pub use network::{FlightNetwork, Route};
pub use traits::{Graph, MutableGraph};
pub use undirected::UndirectedGraph;
