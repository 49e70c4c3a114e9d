use crate::{
    graphs::{path::ShortestPath, Vertex, Weight},
    search::collections::dijkstra_data::DijkstraData,
};

/// Stitches the forward and the backward half of a bidirectional search
/// together at `meeting_vertex`.
///
/// The forward predecessors lead from the meeting vertex back to the source,
/// so that half is reversed. The backward predecessors already lead from the
/// meeting vertex towards the target and are appended as they are.
/// `distance` is taken as is from the search.
pub fn path_from_bidirectional_search<V: Vertex>(
    meeting_vertex: &V,
    distance: Weight,
    forward_data: &dyn DijkstraData<V>,
    backward_data: &dyn DijkstraData<V>,
) -> ShortestPath<V> {
    let mut vertices = predecessor_chain(meeting_vertex, forward_data);
    vertices.reverse();
    vertices.push(meeting_vertex.clone());
    vertices.extend(predecessor_chain(meeting_vertex, backward_data));

    ShortestPath { vertices, distance }
}

/// Predecessors of `vertex`, nearest first. `vertex` itself is not included.
fn predecessor_chain<V: Vertex>(vertex: &V, data: &dyn DijkstraData<V>) -> Vec<V> {
    let mut chain = Vec::new();
    let mut current = vertex;
    while let Some(predecessor) = data.get_predecessor(current) {
        chain.push(predecessor.clone());
        current = predecessor;
    }
    chain
}
