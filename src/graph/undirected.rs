use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{PrimInt, Unsigned};
use std::collections::HashMap;
use std::fmt::Debug;

/// An undirected graph implementation using adjacency lists
///
/// Every edge is mirrored on both endpoints, so `neighbors(a)` yields `b`
/// exactly when `neighbors(b)` yields `a`, with the same weight.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Adjacency for each vertex: vertex_id -> [(neighbor, weight)]
    adjacency: HashMap<usize, Vec<(usize, W)>>,
}

impl<W> UndirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            vertex_count: 0,
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new undirected graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        let mut graph = UndirectedGraph {
            vertex_count: vertices,
            adjacency: HashMap::with_capacity(vertices),
        };

        for v in 0..vertices {
            graph.adjacency.insert(v, Vec::new());
        }

        graph
    }
}

impl<W> Default for UndirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        // Each undirected edge is stored on both endpoints.
        self.adjacency.values().map(|edges| edges.len()).sum::<usize>() / 2
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, a: usize, b: usize) -> bool {
        if let Some(edges) = self.adjacency.get(&a) {
            edges.iter().any(|(neighbor, _)| *neighbor == b)
        } else {
            false
        }
    }

    fn edge_weight(&self, a: usize, b: usize) -> Option<W> {
        self.adjacency
            .get(&a)?
            .iter()
            .find(|(neighbor, _)| *neighbor == b)
            .map(|(_, weight)| *weight)
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.vertex_count;
        self.adjacency.insert(new_id, Vec::new());
        self.vertex_count += 1;
        new_id
    }

    fn add_edge(&mut self, a: usize, b: usize, weight: W) -> bool {
        if !self.has_vertex(a) || !self.has_vertex(b) || a == b {
            return false;
        }

        // Update in place if the edge already exists, on both endpoints.
        if self.has_edge(a, b) {
            for (from, to) in [(a, b), (b, a)] {
                if let Some(edges) = self.adjacency.get_mut(&from) {
                    for edge in edges.iter_mut() {
                        if edge.0 == to {
                            edge.1 = weight;
                        }
                    }
                }
            }
            return true;
        }

        self.adjacency.entry(a).or_default().push((b, weight));
        self.adjacency.entry(b).or_default().push((a, weight));
        true
    }

    fn remove_edge(&mut self, a: usize, b: usize) -> bool {
        let mut removed = false;
        for (from, to) in [(a, b), (b, a)] {
            if let Some(edges) = self.adjacency.get_mut(&from) {
                let len_before = edges.len();
                edges.retain(|(neighbor, _)| *neighbor != to);
                removed |= len_before > edges.len();
            }
        }
        removed
    }
}
