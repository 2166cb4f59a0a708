pub mod dijkstra;
pub mod traits;

pub use traits::{Cost, ShortestPathAlgorithm, ShortestPathResult};
