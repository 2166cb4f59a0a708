use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::undirected::UndirectedGraph;
use rand::prelude::*;

/// Generates a connected random undirected network with n vertices.
///
/// A random spanning tree keeps the network connected; `extra_edges`
/// additional distinct edges are then added on top (capped at the number of
/// edges a simple graph can still take). Costs are uniform in
/// `1..=max_cost`.
pub fn generate_random_network(n: usize, extra_edges: usize, max_cost: u64) -> UndirectedGraph<u64> {
    assert!(n > 0, "network needs at least one vertex");
    assert!(max_cost > 0, "max_cost must be positive");

    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = rand::thread_rng();

    for v in 1..n {
        let u = rng.gen_range(0..v);
        graph.add_edge(u, v, rng.gen_range(1..=max_cost));
    }

    let capacity_left = n * (n - 1) / 2 - n.saturating_sub(1);
    let mut remaining = extra_edges.min(capacity_left);
    while remaining > 0 {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v && !graph.has_edge(u, v) {
            graph.add_edge(u, v, rng.gen_range(1..=max_cost));
            remaining -= 1;
        }
    }

    graph
}

/// Generates a width x height grid network with unit edge costs
/// (4-connectivity).
pub fn generate_grid_network(width: usize, height: usize) -> UndirectedGraph<u64> {
    let mut graph = UndirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, 1);
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, 1);
            }
        }
    }

    graph
}
