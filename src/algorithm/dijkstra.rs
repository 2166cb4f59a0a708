use log::{debug, trace};
use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

use crate::algorithm::{Cost, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{DenseBitSet, FibonacciHeap};
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic label-setting Dijkstra over a Fibonacci heap frontier.
///
/// Every vertex is inserted into the heap up front (the source at cost zero,
/// everything else at [`Cost::Infinite`]); the loop then extracts the
/// cheapest frontier vertex, settles it in a [`DenseBitSet`], and relaxes
/// its unsettled neighbors through the heap's `decrease_key`. With O(1)
/// amortized decrease_key this is the textbook O(E + V log V) bound.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut tentative: Vec<Cost<W>> = vec![Cost::Infinite; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        tentative[source] = Cost::Finite(W::zero());

        // Seed the frontier with every vertex, keeping each handle for
        // decrease_key. The heap caches keys; `tentative` mirrors them and
        // is the driver's source of truth between relaxations.
        let mut heap = FibonacciHeap::with_capacity(n);
        let mut handles = Vec::with_capacity(n);
        for v in 0..n {
            handles.push(heap.insert(v, tentative[v]));
        }
        debug!("seeded {} vertices, source {}", n, source);

        let mut settled = DenseBitSet::new(n - 1);
        while !heap.is_empty() {
            let (key, x) = heap.extract_min()?;
            settled.add(x);

            // A vertex extracted at infinite cost has no connection to the
            // source; settle it without relaxing anything.
            let Cost::Finite(cost_x) = key else {
                continue;
            };
            trace!("settled vertex {} at cost {:?}", x, cost_x);

            for (v, weight) in graph.neighbors(x) {
                if settled.contains(v) {
                    continue;
                }
                let candidate = Cost::Finite(cost_x + weight);
                if candidate < tentative[v] {
                    tentative[v] = candidate;
                    predecessors[v] = Some(x);
                    heap.decrease_key(handles[v], candidate)?;
                }
            }
        }
        debug!("traversal settled {} vertices", settled.cardinality());

        Ok(ShortestPathResult {
            distances: tentative.into_iter().map(Cost::finite).collect(),
            predecessors,
            source,
        })
    }
}
