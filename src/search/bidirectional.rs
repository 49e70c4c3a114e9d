use log::{debug, trace};

use super::{
    bidirectional_helpers::path_from_bidirectional_search,
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataHashMap},
        vertex_distance_queue::{
            DijkstraQueueElement, VertexDistanceQueue, VertexDistanceQueueBinaryHeap,
        },
    },
};
use crate::graphs::{
    graph_functions::path_weight,
    path::{PathFinding, ShortestPath, ShortestPathRequest},
    Graph, Vertex, Weight,
};

/// Which of the two searches is expanding. The backward search walks the
/// graph through its in edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Distances, predecessors and frontier of one search direction.
pub struct SearchState<V: Vertex> {
    pub data: DijkstraDataHashMap<V>,
    pub queue: VertexDistanceQueueBinaryHeap<V>,
    pub expanded_vertices: u32,
}

impl<V: Vertex> SearchState<V> {
    pub fn new(origin: V) -> SearchState<V> {
        let mut data = DijkstraDataHashMap::new();
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        data.set_distance(origin.clone(), 0.0);
        queue.insert(origin, 0.0);

        SearchState {
            data,
            queue,
            expanded_vertices: 0,
        }
    }
}

/// Best connection between the two searches found so far.
#[derive(Clone, Debug, PartialEq)]
pub struct Meeting<V> {
    pub vertex: Option<V>,
    pub distance: Weight,
}

impl<V> Default for Meeting<V> {
    fn default() -> Self {
        Meeting {
            vertex: None,
            distance: Weight::INFINITY,
        }
    }
}

pub struct BidirectionalDijkstra<'a, V: Vertex> {
    pub graph: &'a dyn Graph<V>,
}

impl<'a, V: Vertex> PathFinding<V> for BidirectionalDijkstra<'a, V> {
    fn shortest_path(&self, request: &ShortestPathRequest<V>) -> ShortestPath<V> {
        bidirectional_dijkstra(self.graph, request.source(), request.target())
    }

    fn shortest_path_distance(&self, request: &ShortestPathRequest<V>) -> Option<Weight> {
        bidirectional_dijkstra_distance(self.graph, request.source(), request.target())
    }
}

/// Shortest path from `source` to `target`, searching from both ends at
/// once. Returns an empty path with infinite distance if `target` can not be
/// reached. Unknown vertices are treated as vertices without edges.
pub fn bidirectional_dijkstra<V: Vertex>(
    graph: &dyn Graph<V>,
    source: &V,
    target: &V,
) -> ShortestPath<V> {
    if source == target {
        return ShortestPath::trivial(source.clone());
    }

    let mut forward = SearchState::new(source.clone());
    let mut backward = SearchState::new(target.clone());
    let meeting = search(graph, &mut forward, &mut backward);

    let Some(meeting_vertex) = meeting.vertex else {
        debug!("no path from {:?} to {:?}", source, target);
        return ShortestPath::unreachable();
    };

    let mut path = path_from_bidirectional_search(
        &meeting_vertex,
        meeting.distance,
        &forward.data,
        &backward.data,
    );
    // The meeting distance adds both halves separately. Summing along the
    // path makes the distance agree with its edges to the last bit.
    if let Some(distance) = path_weight(graph, &path.vertices) {
        path.distance = distance;
    }
    debug!(
        "path from {:?} to {:?} has distance {} and {} vertices, met at {:?}",
        source,
        target,
        path.distance,
        path.vertices.len(),
        meeting_vertex
    );
    path
}

/// Like [`bidirectional_dijkstra`] but skips the path reconstruction. The
/// distance is the meeting distance, with fractional weights it may differ
/// from the path's edge sum in the last bit.
pub fn bidirectional_dijkstra_distance<V: Vertex>(
    graph: &dyn Graph<V>,
    source: &V,
    target: &V,
) -> Option<Weight> {
    if source == target {
        return Some(0.0);
    }

    let mut forward = SearchState::new(source.clone());
    let mut backward = SearchState::new(target.clone());
    let meeting = search(graph, &mut forward, &mut backward);

    meeting.vertex.map(|_| meeting.distance)
}

/// Runs both searches until the smallest forward and backward distances
/// together can no longer beat the best meeting.
pub fn search<V: Vertex>(
    graph: &dyn Graph<V>,
    forward: &mut SearchState<V>,
    backward: &mut SearchState<V>,
) -> Meeting<V> {
    let mut meeting = Meeting::default();

    loop {
        let (Some(forward_distance), Some(backward_distance)) =
            (forward.queue.peek_distance(), backward.queue.peek_distance())
        else {
            break;
        };
        if forward_distance + backward_distance >= meeting.distance {
            break;
        }

        if forward_distance <= backward_distance {
            expand(graph, Direction::Forward, forward, backward, &mut meeting);
        } else {
            expand(graph, Direction::Backward, backward, forward, &mut meeting);
        }
    }

    debug!(
        "expanded {} forward and {} backward vertices",
        forward.expanded_vertices, backward.expanded_vertices
    );

    meeting
}

/// Pops the closest vertex of `expanding` and relaxes its edges. Every head
/// the `opposite` search already reached is a candidate meeting vertex.
///
/// Popped entries are not checked for staleness. Relaxing from an outdated
/// distance never improves anything, and the stopping rule in [`search`]
/// keeps the result exact.
fn expand<V: Vertex>(
    graph: &dyn Graph<V>,
    direction: Direction,
    expanding: &mut SearchState<V>,
    opposite: &SearchState<V>,
    meeting: &mut Meeting<V>,
) {
    let Some(DijkstraQueueElement {
        vertex: tail,
        distance: distance_tail,
        ..
    }) = expanding.queue.pop()
    else {
        return;
    };
    expanding.expanded_vertices += 1;

    let edges = match direction {
        Direction::Forward => graph.out_edges(&tail),
        Direction::Backward => graph.in_edges(&tail),
    };

    for edge in edges {
        let head = edge.head();
        let alternative_distance_head = distance_tail + edge.weight();
        let current_distance_head =
            expanding.data.get_distance(head).unwrap_or(Weight::INFINITY);
        if alternative_distance_head < current_distance_head {
            expanding.queue.insert(head.clone(), alternative_distance_head);
            expanding.data.set_predecessor(head.clone(), tail.clone());
            expanding.data.set_distance(head.clone(), alternative_distance_head);
        }

        if let Some(opposite_distance_head) = opposite.data.get_distance(head) {
            let meeting_distance = alternative_distance_head + opposite_distance_head;
            if meeting_distance < meeting.distance {
                trace!(
                    "{:?} search improved meeting to {} at {:?}",
                    direction,
                    meeting_distance,
                    head
                );
                meeting.distance = meeting_distance;
                meeting.vertex = Some(head.clone());
            }
        }
    }
}
