use bidirectional_paths::{
    graphs::{
        graph_functions::{add_edge_bidirectional, validate_path},
        path::{PathFinding, ShortestPathRequest, ShortestPathTestCase},
        reversible_hash_graph::ReversibleHashGraph,
    },
    search::{
        bidirectional::BidirectionalDijkstra, collections::dijkstra_data::DijkstraData,
        dijkstra::single_source,
    },
};

fn get_small_graph() -> ReversibleHashGraph<u32> {
    // https://jlazarsfeld.github.io/ch.150.project/img/contraction/contract-full-1.png
    let mut graph = ReversibleHashGraph::new();
    add_edge_bidirectional(&mut graph, 0, 1, 3.0).unwrap();
    add_edge_bidirectional(&mut graph, 0, 2, 5.0).unwrap();
    add_edge_bidirectional(&mut graph, 0, 10, 3.0).unwrap();
    add_edge_bidirectional(&mut graph, 1, 2, 3.0).unwrap();
    add_edge_bidirectional(&mut graph, 1, 3, 5.0).unwrap();
    add_edge_bidirectional(&mut graph, 2, 3, 2.0).unwrap();
    add_edge_bidirectional(&mut graph, 2, 9, 2.0).unwrap();
    add_edge_bidirectional(&mut graph, 3, 4, 7.0).unwrap();
    add_edge_bidirectional(&mut graph, 3, 9, 4.0).unwrap();
    add_edge_bidirectional(&mut graph, 4, 5, 6.0).unwrap();
    add_edge_bidirectional(&mut graph, 4, 9, 3.0).unwrap();
    add_edge_bidirectional(&mut graph, 5, 6, 4.0).unwrap();
    add_edge_bidirectional(&mut graph, 5, 7, 2.0).unwrap();
    add_edge_bidirectional(&mut graph, 6, 7, 3.0).unwrap();
    add_edge_bidirectional(&mut graph, 6, 8, 5.0).unwrap();
    add_edge_bidirectional(&mut graph, 7, 8, 3.0).unwrap();
    add_edge_bidirectional(&mut graph, 7, 9, 2.0).unwrap();
    add_edge_bidirectional(&mut graph, 8, 9, 4.0).unwrap();
    add_edge_bidirectional(&mut graph, 8, 10, 6.0).unwrap();
    add_edge_bidirectional(&mut graph, 9, 10, 3.0).unwrap();
    graph
}

#[test]
fn small_graph_matches_single_source_dijkstra() {
    let graph = get_small_graph();
    let pathfinder = BidirectionalDijkstra { graph: &graph };

    for source in 0..=10 {
        let data = single_source(&graph, &source);
        for target in 0..=10 {
            let test_case = ShortestPathTestCase {
                request: ShortestPathRequest::new(source, target),
                distance: data.get_distance(&target),
            };
            let path = pathfinder.shortest_path(&test_case.request);
            validate_path(&graph, &test_case, &path).unwrap();
        }
    }
}

#[test]
fn small_graph_is_symmetric() {
    let graph = get_small_graph();
    let pathfinder = BidirectionalDijkstra { graph: &graph };

    for source in 0..=10 {
        for target in 0..=10 {
            let there = ShortestPathRequest::new(source, target);
            let back = ShortestPathRequest::new(target, source);
            let there = pathfinder.shortest_path_distance(&there);
            let back = pathfinder.shortest_path_distance(&back);
            assert_eq!(there, back);
            assert!(there.is_some());
        }
    }
}

#[test]
fn small_graph_known_distances() {
    let graph = get_small_graph();
    let pathfinder = BidirectionalDijkstra { graph: &graph };

    // 0 -> 10 -> 9 -> 7 -> 5
    assert_eq!(
        pathfinder.shortest_path_distance(&ShortestPathRequest::new(0, 5)),
        Some(10.0)
    );
    // 1 -> 2 -> 9 -> 4
    assert_eq!(
        pathfinder.shortest_path_distance(&ShortestPathRequest::new(1, 4)),
        Some(8.0)
    );
}
