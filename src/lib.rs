//! Shortest paths between two vertices of a directed graph with non-negative
//! edge weights, found by a bidirectional Dijkstra search.
//!
//! ```
//! use bidirectional_paths::{bidirectional_dijkstra, ReversibleHashGraph};
//!
//! let mut graph = ReversibleHashGraph::new();
//! graph.add_edge("a", "b", 1.0).unwrap();
//! graph.add_edge("b", "c", 2.0).unwrap();
//! graph.add_edge("a", "c", 4.0).unwrap();
//!
//! let path = bidirectional_dijkstra(&graph, &"a", &"c");
//! assert_eq!(path.vertices, vec!["a", "b", "c"]);
//! assert_eq!(path.distance, 3.0);
//! ```

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

pub use error::GraphError;
pub use graphs::{path::ShortestPath, reversible_hash_graph::ReversibleHashGraph, Graph};
pub use search::bidirectional::bidirectional_dijkstra;
