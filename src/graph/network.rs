use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::undirected::UndirectedGraph;
use crate::{Error, Result};
use log::debug;
use num_traits::{PrimInt, Unsigned};
use std::collections::HashMap;
use std::fmt::Debug;
use std::io::BufRead;
use std::str::FromStr;

/// A flight network: an undirected weighted graph over named airports.
///
/// Airport names are interned to dense 0-based vertex ids on first use.
/// Every stored edge weight is the route's base cost plus twice the
/// per-airport surcharge (the cost to leave one airport and arrive at the
/// other), so the shortest-path driver can treat weights as opaque additive
/// costs.
#[derive(Debug, Clone)]
pub struct FlightNetwork<W>
where
    W: PrimInt + Unsigned + Debug,
{
    graph: UndirectedGraph<W>,
    ids: HashMap<String, usize>,
    names: Vec<String>,
    surcharge: W,
}

/// Outcome of a routing query: the minimum total cost and the airport
/// sequence from source to destination. An unreachable destination yields
/// `None` cost and an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<W> {
    pub cost: Option<W>,
    pub path: Vec<String>,
}

impl<W> FlightNetwork<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates an empty network with the given per-airport surcharge.
    pub fn new(surcharge: W) -> Self {
        FlightNetwork {
            graph: UndirectedGraph::new(),
            ids: HashMap::new(),
            names: Vec::new(),
            surcharge,
        }
    }

    /// Reads a network from whitespace-delimited `from to cost` triples,
    /// one route per line. Blank lines are skipped; anything else that is
    /// not a triple with an unsigned cost is a [`Error::MalformedRoute`].
    pub fn from_reader<R: BufRead>(reader: R, surcharge: W) -> Result<Self>
    where
        W: FromStr,
    {
        let mut network = FlightNetwork::new(surcharge);
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let (Some(from), Some(to), Some(cost), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                if line.trim().is_empty() {
                    continue;
                }
                return Err(Error::MalformedRoute(index + 1, line.clone()));
            };
            let cost = cost
                .parse::<W>()
                .map_err(|_| Error::MalformedRoute(index + 1, line.clone()))?;
            network.add_route(from, to, cost);
        }
        debug!(
            "loaded flight network: {} airports, {} routes",
            network.airport_count(),
            network.graph.edge_count()
        );
        Ok(network)
    }

    /// Adds a route between two airports, interning both names.
    ///
    /// The stored edge weight is `base_cost + 2 * surcharge`. Adding an
    /// existing route updates its cost. Returns false if the route was
    /// rejected (the two names are the same airport).
    pub fn add_route(&mut self, from: &str, to: &str, base_cost: W) -> bool {
        let a = self.intern(from);
        let b = self.intern(to);
        let total = base_cost + self.surcharge + self.surcharge;
        self.graph.add_edge(a, b, total)
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.graph.add_vertex();
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    /// Number of distinct airports seen so far.
    pub fn airport_count(&self) -> usize {
        self.names.len()
    }

    /// Resolves an airport name to its dense vertex id.
    pub fn airport_id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Resolves a vertex id back to its airport name.
    pub fn airport_name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Iterates over all airport names in id order.
    pub fn airports(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The per-airport surcharge this network was built with.
    pub fn surcharge(&self) -> W {
        self.surcharge
    }

    /// The underlying weighted graph.
    pub fn graph(&self) -> &UndirectedGraph<W> {
        &self.graph
    }

    /// Computes the minimum-cost route between two named airports.
    ///
    /// Fails with [`Error::UnknownAirport`] if either name was never seen.
    /// A destination with no connection to the source yields a `Route` with
    /// `None` cost and an empty path.
    pub fn route(&self, from: &str, to: &str) -> Result<Route<W>> {
        let source = self
            .airport_id(from)
            .ok_or_else(|| Error::UnknownAirport(from.to_string()))?;
        let target = self
            .airport_id(to)
            .ok_or_else(|| Error::UnknownAirport(to.to_string()))?;

        let result = Dijkstra::new().compute_shortest_paths(&self.graph, source)?;
        let path = result
            .path_to(target)
            .unwrap_or_default()
            .into_iter()
            .map(|id| self.names[id].clone())
            .collect();
        Ok(Route {
            cost: result.distances[target],
            path,
        })
    }
}
