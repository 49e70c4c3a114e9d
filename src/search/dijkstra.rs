use ahash::{HashSet, HashSetExt};

use super::collections::{
    dijkstra_data::{DijkstraData, DijkstraDataHashMap},
    vertex_distance_queue::{
        DijkstraQueueElement, VertexDistanceQueue, VertexDistanceQueueBinaryHeap,
    },
};
use crate::graphs::{
    path::{PathFinding, ShortestPath, ShortestPathRequest},
    Graph, Vertex, Weight,
};

/// Classical one directional Dijkstra. Mostly useful as a reference for the
/// bidirectional search.
pub struct Dijkstra<'a, V: Vertex> {
    pub graph: &'a dyn Graph<V>,
}

impl<'a, V: Vertex> PathFinding<V> for Dijkstra<'a, V> {
    fn shortest_path(&self, request: &ShortestPathRequest<V>) -> ShortestPath<V> {
        shortest_path(self.graph, request)
    }
}

pub fn shortest_path<V: Vertex>(
    graph: &dyn Graph<V>,
    request: &ShortestPathRequest<V>,
) -> ShortestPath<V> {
    let data = single_pair(graph, request.source(), request.target());
    data.get_path(request.target())
        .unwrap_or_else(ShortestPath::unreachable)
}

pub fn shortest_path_distance<V: Vertex>(
    graph: &dyn Graph<V>,
    request: &ShortestPathRequest<V>,
) -> Option<Weight> {
    single_pair(graph, request.source(), request.target()).get_distance(request.target())
}

/// Settles every vertex reachable from `source`.
pub fn single_source<V: Vertex>(graph: &dyn Graph<V>, source: &V) -> DijkstraDataHashMap<V> {
    search(graph, source, None)
}

/// Stops as soon as `target` is settled.
pub fn single_pair<V: Vertex>(
    graph: &dyn Graph<V>,
    source: &V,
    target: &V,
) -> DijkstraDataHashMap<V> {
    search(graph, source, Some(target))
}

fn search<V: Vertex>(
    graph: &dyn Graph<V>,
    source: &V,
    target: Option<&V>,
) -> DijkstraDataHashMap<V> {
    let mut data = DijkstraDataHashMap::new();
    let mut queue = VertexDistanceQueueBinaryHeap::new();
    let mut expanded = HashSet::new();

    data.set_distance(source.clone(), 0.0);
    queue.insert(source.clone(), 0.0);

    while let Some(DijkstraQueueElement {
        vertex: tail,
        distance: distance_tail,
        ..
    }) = queue.pop()
    {
        if !expanded.insert(tail.clone()) {
            continue;
        }
        if target == Some(&tail) {
            break;
        }

        for edge in graph.out_edges(&tail) {
            let current_distance_head =
                data.get_distance(edge.head()).unwrap_or(Weight::INFINITY);
            let alternative_distance_head = distance_tail + edge.weight();
            if alternative_distance_head < current_distance_head {
                data.set_distance(edge.head().clone(), alternative_distance_head);
                data.set_predecessor(edge.head().clone(), tail.clone());
                queue.insert(edge.head().clone(), alternative_distance_head);
            }
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::reversible_hash_graph::ReversibleHashGraph;

    #[test]
    fn prefers_cheaper_detour() {
        let mut graph = ReversibleHashGraph::new();
        graph.add_edge("s", "t", 10.0).unwrap();
        graph.add_edge("s", "a", 2.0).unwrap();
        graph.add_edge("a", "t", 3.0).unwrap();

        let path = shortest_path(&graph, &ShortestPathRequest::new("s", "t"));
        assert_eq!(path.vertices, vec!["s", "a", "t"]);
        assert_eq!(path.distance, 5.0);
    }

    #[test]
    fn single_source_reaches_everything_reachable() {
        let mut graph = ReversibleHashGraph::new();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        graph.add_edge(3, 0, 1.0).unwrap();

        let data = single_source(&graph, &0);
        assert_eq!(data.get_distance(&2), Some(2.0));
        assert_eq!(data.get_distance(&3), None);
        assert_eq!(data.number_of_reached_vertices(), 3);
    }

    #[test]
    fn unreachable_target() {
        let mut graph = ReversibleHashGraph::new();
        graph.add_edge(0, 1, 1.0).unwrap();

        let dijkstra = Dijkstra { graph: &graph };
        let request = ShortestPathRequest::new(1, 0);
        assert_eq!(dijkstra.shortest_path(&request), ShortestPath::unreachable());
        assert_eq!(dijkstra.shortest_path_distance(&request), None);
    }
}
