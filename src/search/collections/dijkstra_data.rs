use ahash::{HashMap, HashMapExt};

use crate::graphs::{path::ShortestPath, Vertex, Weight};

/// Trait for handling data access in Dijkstra's algorithm.
pub trait DijkstraData<V: Vertex> {
    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: &V) -> Option<&V>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: V, predecessor: V);

    /// Retrieves the tentative distance of a given vertex, `None` if the
    /// search has not reached it yet.
    fn get_distance(&self, vertex: &V) -> Option<Weight>;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: V, distance: Weight);

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// This function traces back from the target vertex using
    /// predecessor data to build the full path. Returns `None`
    /// if the target vertex is unreachable.
    fn get_path(&self, target: &V) -> Option<ShortestPath<V>> {
        let distance = self.get_distance(target)?;

        let mut vertices = vec![target.clone()];
        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor.clone());
        }

        // Reverse the path to start from the source vertex.
        vertices.reverse();

        Some(ShortestPath { vertices, distance })
    }
}

#[derive(Clone, Debug)]
pub struct DijkstraDataHashMap<V: Vertex> {
    predecessors: HashMap<V, V>,
    distances: HashMap<V, Weight>,
}

impl<V: Vertex> Default for DijkstraDataHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> DijkstraDataHashMap<V> {
    pub fn new() -> Self {
        DijkstraDataHashMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        }
    }

    /// Number of vertices that received a tentative distance.
    pub fn number_of_reached_vertices(&self) -> usize {
        self.distances.len()
    }
}

impl<V: Vertex> DijkstraData<V> for DijkstraDataHashMap<V> {
    fn get_predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex)
    }

    fn set_predecessor(&mut self, vertex: V, predecessor: V) {
        self.predecessors.insert(vertex, predecessor);
    }

    fn get_distance(&self, vertex: &V) -> Option<Weight> {
        self.distances.get(vertex).cloned()
    }

    fn set_distance(&mut self, vertex: V, distance: Weight) {
        self.distances.insert(vertex, distance);
    }
}
