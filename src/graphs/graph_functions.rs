use std::time::{Duration, Instant};

use indicatif::ProgressIterator;
use itertools::Itertools;
use rand::Rng;

use super::{
    path::{PathFinding, ShortestPath, ShortestPathRequest, ShortestPathTestCase},
    reversible_hash_graph::ReversibleHashGraph,
    Graph, Vertex, Weight,
};
use crate::{
    error::{GraphError, ValidationError},
    search::dijkstra::shortest_path_distance,
    utility::get_progressbar,
};

pub const DISTANCE_TOLERANCE: Weight = 1e-9;

/// Check if a path is correct for a given test case.
///
/// The reported distance must equal the edge weights summed in path order
/// exactly. Against the expected distance a relative error of
/// [`DISTANCE_TOLERANCE`] is accepted, since two optimal paths may round
/// differently.
pub fn validate_path<V: Vertex>(
    graph: &dyn Graph<V>,
    test_case: &ShortestPathTestCase<V>,
    path: &ShortestPath<V>,
) -> Result<(), ValidationError> {
    let request = &test_case.request;

    let Some(expected_distance) = test_case.distance else {
        if path.is_reachable() || path.distance != Weight::INFINITY {
            return Err(ValidationError::UnexpectedPath);
        }
        return Ok(());
    };

    // Ensure fist and last vertex of path are source and target of request.
    let (Some(first_vertex), Some(last_vertex)) = (path.vertices.first(), path.vertices.last())
    else {
        return Err(ValidationError::MissingPath);
    };
    if first_vertex != request.source() {
        return Err(ValidationError::WrongSource {
            expected: format!("{:?}", request.source()),
            found: format!("{:?}", first_vertex),
        });
    }
    if last_vertex != request.target() {
        return Err(ValidationError::WrongTarget {
            expected: format!("{:?}", request.target()),
            found: format!("{:?}", last_vertex),
        });
    }

    // check if there is an edge between consecutive path vertices.
    let mut true_distance = 0.0;
    for (tail, head) in path.vertices.iter().tuple_windows() {
        let weight = graph
            .get_edge_weight(tail, head)
            .ok_or_else(|| ValidationError::MissingEdge {
                tail: format!("{:?}", tail),
                head: format!("{:?}", head),
            })?;
        true_distance += weight;
    }

    // check if total distance of path is correct.
    if path.distance != true_distance {
        return Err(ValidationError::WrongDistance {
            expected: true_distance,
            found: path.distance,
        });
    }
    let tolerance = DISTANCE_TOLERANCE * expected_distance.max(1.0);
    if (path.distance - expected_distance).abs() > tolerance {
        return Err(ValidationError::WrongDistance {
            expected: expected_distance,
            found: path.distance,
        });
    }

    Ok(())
}

/// Sum of the edge weights along `vertices`, added from the first vertex to
/// the last. `None` if two consecutive vertices are not joined by an edge.
pub fn path_weight<V: Vertex>(graph: &dyn Graph<V>, vertices: &[V]) -> Option<Weight> {
    vertices
        .iter()
        .tuple_windows()
        .map(|(tail, head)| graph.get_edge_weight(tail, head))
        .fold_options(0.0, |distance, weight| distance + weight)
}

pub fn add_edge_bidirectional<V: Vertex>(
    graph: &mut ReversibleHashGraph<V>,
    tail: V,
    head: V,
    weight: Weight,
) -> Result<(), GraphError> {
    graph.add_edge(tail.clone(), head.clone(), weight)?;
    graph.add_edge(head, tail, weight)
}

/// Random graph on the vertices `0..number_of_vertices` with integral
/// weights in `0..=max_weight`. Repeated vertex pairs overwrite each other,
/// so the graph may end up with fewer than `number_of_edges` edges.
pub fn generate_random_graph<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: u32,
) -> Result<ReversibleHashGraph<u32>, GraphError> {
    let mut graph = ReversibleHashGraph::new();
    if number_of_vertices == 0 {
        return Ok(graph);
    }

    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        let weight = rng.gen_range(0..=max_weight);
        graph.add_edge(tail, head, weight as Weight)?;
    }

    Ok(graph)
}

pub fn random_request<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
) -> Option<ShortestPathRequest<u32>> {
    if number_of_vertices <= 1 {
        // not enough vertices to get a request with source != target
        return None;
    }

    // guarantee that source != target
    let source = rng.gen_range(0..number_of_vertices);
    let mut target = rng.gen_range(0..number_of_vertices - 1);
    if target >= source {
        target += 1;
    }

    Some(ShortestPathRequest::new(source, target))
}

/// Random requests on `0..number_of_vertices`, answered with the one
/// directional Dijkstra.
pub fn generate_random_pair_test_cases<R: Rng>(
    rng: &mut R,
    graph: &dyn Graph<u32>,
    number_of_vertices: u32,
    number_of_test_cases: u32,
) -> Vec<ShortestPathTestCase<u32>> {
    (0..number_of_test_cases)
        .map_while(|_| random_request(rng, number_of_vertices))
        .map(|request| ShortestPathTestCase {
            distance: shortest_path_distance(graph, &request),
            request,
        })
        .collect_vec()
}

/// Answers every test case with `path_finder`, validates the answers and
/// returns the time each query took.
pub fn validate_path_and_time<V: Vertex>(
    test_cases: &[ShortestPathTestCase<V>],
    path_finder: &dyn PathFinding<V>,
    graph: &dyn Graph<V>,
) -> Result<Vec<Duration>, ValidationError> {
    let mut times = Vec::with_capacity(test_cases.len());

    let bar = get_progressbar("Timing", test_cases.len() as u64);
    for test_case in test_cases.iter().progress_with(bar) {
        let start = Instant::now();
        let path = path_finder.shortest_path(&test_case.request);
        times.push(start.elapsed());

        validate_path(graph, test_case, &path)?;
    }

    Ok(times)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn line_graph() -> ReversibleHashGraph<&'static str> {
        let mut graph = ReversibleHashGraph::new();
        graph.add_edge("a", "b", 1.0).unwrap();
        graph.add_edge("b", "c", 2.0).unwrap();
        graph
    }

    fn test_case(distance: Option<Weight>) -> ShortestPathTestCase<&'static str> {
        ShortestPathTestCase {
            request: ShortestPathRequest::new("a", "c"),
            distance,
        }
    }

    fn path(vertices: Vec<&'static str>, distance: Weight) -> ShortestPath<&'static str> {
        ShortestPath { vertices, distance }
    }

    #[test]
    fn accepts_correct_paths() {
        let graph = line_graph();
        assert_eq!(
            validate_path(&graph, &test_case(Some(3.0)), &path(vec!["a", "b", "c"], 3.0)),
            Ok(())
        );
        assert_eq!(
            validate_path(&graph, &test_case(None), &ShortestPath::unreachable()),
            Ok(())
        );
    }

    #[test]
    fn rejects_broken_paths() {
        let graph = line_graph();
        let case = test_case(Some(3.0));

        assert_eq!(
            validate_path(&graph, &case, &ShortestPath::unreachable()),
            Err(ValidationError::MissingPath)
        );
        assert_eq!(
            validate_path(&graph, &case, &path(Vec::new(), 3.0)),
            Err(ValidationError::MissingPath)
        );
        assert!(matches!(
            validate_path(&graph, &case, &path(vec!["b", "c"], 2.0)),
            Err(ValidationError::WrongSource { .. })
        ));
        assert!(matches!(
            validate_path(&graph, &case, &path(vec!["a", "b"], 1.0)),
            Err(ValidationError::WrongTarget { .. })
        ));
        assert!(matches!(
            validate_path(&graph, &case, &path(vec!["a", "c"], 3.0)),
            Err(ValidationError::MissingEdge { .. })
        ));
        assert!(matches!(
            validate_path(&graph, &case, &path(vec!["a", "b", "c"], 4.0)),
            Err(ValidationError::WrongDistance { .. })
        ));
        assert_eq!(
            validate_path(&graph, &test_case(None), &path(vec!["a", "b", "c"], 3.0)),
            Err(ValidationError::UnexpectedPath)
        );
    }

    #[test]
    fn distance_must_match_edge_sum_exactly() {
        let mut graph = ReversibleHashGraph::new();
        graph.add_edge("a", "b", 0.1).unwrap();
        graph.add_edge("b", "c", 0.2).unwrap();
        let edge_sum = 0.1 + 0.2;
        assert_eq!(path_weight(&graph, &["a", "b", "c"]), Some(edge_sum));
        assert_eq!(path_weight(&graph, &["a", "c"]), None);
        assert_eq!(path_weight(&graph, &["a"]), Some(0.0));

        // 0.3 is within tolerance of the expected distance but not the sum
        let case = test_case(Some(0.3));
        assert_eq!(
            validate_path(&graph, &case, &path(vec!["a", "b", "c"], edge_sum)),
            Ok(())
        );
        assert!(matches!(
            validate_path(&graph, &case, &path(vec!["a", "b", "c"], 0.3)),
            Err(ValidationError::WrongDistance { .. })
        ));
    }

    #[test]
    fn random_requests_have_distinct_endpoints() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_request(&mut rng, 1).is_none());
        for _ in 0..100 {
            let request = random_request(&mut rng, 3).unwrap();
            assert_ne!(request.source(), request.target());
            assert!(*request.target() < 3);
        }
    }

    #[test]
    fn random_graph_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let graph = generate_random_graph(&mut rng, 10, 40, 5).unwrap();

        assert!(graph.number_of_edges() <= 40);
        assert!(graph.vertices().all(|&vertex| vertex < 10));
        for &vertex in graph.vertices() {
            assert!(graph.out_edges(&vertex).all(|edge| edge.weight() <= 5.0));
        }
    }

    #[test]
    fn bidirectional_edges() {
        let mut graph = ReversibleHashGraph::new();
        add_edge_bidirectional(&mut graph, 1, 2, 4.0).unwrap();

        assert_eq!(graph.get_edge_weight(&1, &2), Some(4.0));
        assert_eq!(graph.get_edge_weight(&2, &1), Some(4.0));
    }
}
