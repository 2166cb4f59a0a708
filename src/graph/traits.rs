use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

/// Trait representing a weighted undirected graph with dense 0-based
/// vertex ids.
///
/// Weights are nonnegative integers; whatever surcharge policy applies has
/// already been folded into the stored weights by the graph builder.
pub trait Graph<W>: Debug
where
    W: PrimInt + Unsigned + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the neighbors of a vertex with edge weights
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if an edge connects the two vertices
    fn has_edge(&self, a: usize, b: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, a: usize, b: usize) -> Option<W>;
}

/// Trait for graphs that can be built up vertex by vertex and edge by edge
pub trait MutableGraph<W>: Graph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds an undirected edge between vertices with the given weight.
    ///
    /// Both endpoints must already exist and must be distinct. Adding an
    /// edge that is already present updates its weight on both endpoints.
    /// Returns false if the edge was rejected.
    fn add_edge(&mut self, a: usize, b: usize, weight: W) -> bool;

    /// Removes an edge from the graph, from both endpoints
    fn remove_edge(&mut self, a: usize, b: usize) -> bool;
}
