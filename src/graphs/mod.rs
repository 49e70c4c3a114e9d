use std::{fmt::Debug, hash::Hash};

use edge::DirectedWeightedEdge;

pub mod edge;
pub mod graph_functions;
pub mod path;
pub mod reversible_hash_graph;

pub type Weight = f64;

/// Anything that can name a vertex: labels, integer ids, ...
pub trait Vertex: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync> Vertex for T {}

pub trait Graph<V: Vertex>: Send + Sync {
    /// Edges leaving `source`. Unknown vertices have no edges.
    fn out_edges(
        &self,
        source: &V,
    ) -> Box<dyn ExactSizeIterator<Item = DirectedWeightedEdge<V>> + Send + '_>;

    /// Edges entering `target`, turned around so that every returned edge
    /// has `tail == target` and the original tail as its head. A backward
    /// search can expand these exactly like out edges.
    fn in_edges(
        &self,
        target: &V,
    ) -> Box<dyn ExactSizeIterator<Item = DirectedWeightedEdge<V>> + Send + '_>;

    fn get_edge_weight(&self, tail: &V, head: &V) -> Option<Weight>;

    fn number_of_vertices(&self) -> usize;

    fn number_of_edges(&self) -> usize;
}
