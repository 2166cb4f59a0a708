use skyroute::graph::{Graph, MutableGraph};
use skyroute::{Dijkstra, FlightNetwork, ShortestPathAlgorithm, UndirectedGraph};

fn main() {
    // Named-airport layer: routes carry a base cost, and every stored edge
    // absorbs 2 x the per-airport surcharge.
    let mut network = FlightNetwork::new(3u64);
    network.add_route("SEA", "DEN", 120);
    network.add_route("DEN", "ATL", 90);
    network.add_route("SEA", "ATL", 400);
    network.add_route("ATL", "JFK", 110);

    println!("--- Flight network ---");
    println!(
        "{} airports, {} routes, surcharge {}",
        network.airport_count(),
        network.graph().edge_count(),
        network.surcharge()
    );

    let route = network.route("SEA", "JFK").unwrap();
    match route.cost {
        Some(cost) => println!("SEA --> JFK costs {}: {}", cost, route.path.join(" --> ")),
        None => println!("JFK is unreachable from SEA"),
    }

    // Raw graph layer: anonymous vertices, weights supplied directly.
    let mut graph: UndirectedGraph<u64> = UndirectedGraph::new();
    for _ in 0..5 {
        graph.add_vertex();
    }
    graph.add_edge(0, 1, 10);
    graph.add_edge(0, 2, 5);
    graph.add_edge(1, 3, 1);
    graph.add_edge(2, 1, 3);
    graph.add_edge(2, 3, 9);
    graph.add_edge(2, 4, 2);
    graph.add_edge(3, 4, 4);

    let source = 0;
    let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();

    println!("\n--- Raw graph, source {} ---", source);
    for v in 0..graph.vertex_count() {
        match result.distances[v] {
            Some(distance) => println!(
                "Vertex {}: distance = {}, path = {:?}",
                v,
                distance,
                result.path_to(v).unwrap()
            ),
            None => println!("Vertex {}: unreachable", v),
        }
    }
}
