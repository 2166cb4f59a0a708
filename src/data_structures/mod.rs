pub mod bit_set;
pub mod fibonacci;

pub use bit_set::DenseBitSet;
pub use fibonacci::{FibonacciHeap, NodeHandle};
