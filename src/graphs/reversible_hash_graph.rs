use std::collections::hash_map::Iter;

use ahash::{HashMap, HashMapExt};

use super::{edge::DirectedWeightedEdge, Graph, Vertex, Weight};
use crate::error::GraphError;

/// Directed graph keeping every edge twice: once in the bucket of its tail
/// (`out_edges`) and once in the bucket of its head (`in_edges`). Both views
/// are written together, so they never disagree.
#[derive(Clone, Debug)]
pub struct ReversibleHashGraph<V: Vertex> {
    out_edges: HashMap<V, HashMap<V, Weight>>,
    in_edges: HashMap<V, HashMap<V, Weight>>,
}

impl<V: Vertex> Default for ReversibleHashGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Yields `(tail, neighbor, weight)` for one adjacency bucket. For out
/// buckets the neighbor is the head of the stored edge, for in buckets it is
/// the tail, which gives the turned around edge.
struct AdjacentEdgeIterator<'a, V> {
    tail: V,
    neighbors: Option<Iter<'a, V, Weight>>,
}

impl<'a, V: Vertex> Iterator for AdjacentEdgeIterator<'a, V> {
    type Item = DirectedWeightedEdge<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let (neighbor, &weight) = self.neighbors.as_mut()?.next()?;
        Some(DirectedWeightedEdge::from_valid_parts(
            self.tail.clone(),
            neighbor.clone(),
            weight,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, V: Vertex> ExactSizeIterator for AdjacentEdgeIterator<'a, V> {
    fn len(&self) -> usize {
        self.neighbors.as_ref().map_or(0, |neighbors| neighbors.len())
    }
}

impl<V: Vertex> Graph<V> for ReversibleHashGraph<V> {
    fn out_edges(
        &self,
        source: &V,
    ) -> Box<dyn ExactSizeIterator<Item = DirectedWeightedEdge<V>> + Send + '_> {
        Box::new(AdjacentEdgeIterator {
            tail: source.clone(),
            neighbors: self.out_edges.get(source).map(|heads| heads.iter()),
        })
    }

    fn in_edges(
        &self,
        target: &V,
    ) -> Box<dyn ExactSizeIterator<Item = DirectedWeightedEdge<V>> + Send + '_> {
        Box::new(AdjacentEdgeIterator {
            tail: target.clone(),
            neighbors: self.in_edges.get(target).map(|tails| tails.iter()),
        })
    }

    fn get_edge_weight(&self, tail: &V, head: &V) -> Option<Weight> {
        self.out_edges.get(tail)?.get(head).cloned()
    }

    fn number_of_vertices(&self) -> usize {
        self.vertices().count()
    }

    fn number_of_edges(&self) -> usize {
        self.out_edges.values().map(HashMap::len).sum()
    }
}

impl<V: Vertex> ReversibleHashGraph<V> {
    pub fn new() -> Self {
        ReversibleHashGraph {
            out_edges: HashMap::new(),
            in_edges: HashMap::new(),
        }
    }

    pub fn from_edges(edges: &[DirectedWeightedEdge<V>]) -> ReversibleHashGraph<V> {
        let mut graph = ReversibleHashGraph::new();
        edges.iter().for_each(|edge| {
            graph.set_edge(edge);
        });
        graph
    }

    /// Inserts the directed edge `tail -> head`. An existing edge between the
    /// same two vertices gets its weight overwritten.
    pub fn add_edge(&mut self, tail: V, head: V, weight: Weight) -> Result<(), GraphError> {
        let edge = DirectedWeightedEdge::new(tail, head, weight)?;
        self.set_edge(&edge);
        Ok(())
    }

    pub fn set_edge(&mut self, edge: &DirectedWeightedEdge<V>) {
        self.out_edges
            .entry(edge.tail().clone())
            .or_default()
            .insert(edge.head().clone(), edge.weight());
        self.in_edges
            .entry(edge.head().clone())
            .or_default()
            .insert(edge.tail().clone(), edge.weight());
    }

    /// Every vertex that is the tail or head of at least one edge.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.out_edges.keys().chain(
            self.in_edges
                .keys()
                .filter(|vertex| !self.out_edges.contains_key(*vertex)),
        )
    }

    /// The transposed graph, every edge `u -> v` becomes `v -> u`.
    pub fn reversed(&self) -> ReversibleHashGraph<V> {
        ReversibleHashGraph {
            out_edges: self.in_edges.clone(),
            in_edges: self.out_edges.clone(),
        }
    }
}
