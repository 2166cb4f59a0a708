use crate::graph::Graph;
use crate::Result;
use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

/// A tentative path cost: either a finite total or "not yet reached".
///
/// `Infinite` orders above every finite cost, so it can seed a frontier
/// entry without a raw `MAX` sentinel that would silently overflow when a
/// finite weight is added to it. Arithmetic is only ever performed on
/// `Finite` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cost<W> {
    Finite(W),
    Infinite,
}

impl<W> Cost<W> {
    /// The finite total, or `None` for an unreached vertex.
    pub fn finite(self) -> Option<W> {
        match self {
            Cost::Finite(total) => Some(total),
            Cost::Infinite => None,
        }
    }
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W> {
    /// Distance from the source to each vertex, `None` where unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W> {
    /// Reconstructs the path from the source to `target` as a vertex
    /// sequence, by walking the predecessor chain backwards and reversing.
    ///
    /// Returns `None` when `target` is out of range or unreachable; a path
    /// is never fabricated for an unreached vertex.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.distances.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        while current != self.source {
            path.push(current);
            current = self.predecessors[current]?;
        }
        path.push(self.source);
        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
