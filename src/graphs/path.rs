use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

/// Represents a request for finding a shortest path in a graph.
///
/// This struct is used to encapsulate the information required to find a path
/// from a source vertex to a target vertex in a graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathRequest<V> {
    source: V,
    target: V,
}

impl<V: Vertex> ShortestPathRequest<V> {
    pub fn new(source: V, target: V) -> ShortestPathRequest<V> {
        ShortestPathRequest { source, target }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn target(&self) -> &V {
        &self.target
    }
}

/// Represents a path in a graph.
///
/// The vertices run from source to target, both included. If the target can
/// not be reached, `vertices` is empty and `distance` is infinite. An
/// infinite distance is serialized as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath<V> {
    pub vertices: Vec<V>,
    #[serde(with = "infinite_as_none")]
    pub distance: Weight,
}

mod infinite_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::graphs::Weight;

    pub fn serialize<S: Serializer>(distance: &Weight, serializer: S) -> Result<S::Ok, S::Error> {
        if distance.is_finite() {
            serializer.serialize_f64(*distance)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weight, D::Error> {
        Ok(Option::<Weight>::deserialize(deserializer)?.unwrap_or(Weight::INFINITY))
    }
}

impl<V: Vertex> ShortestPath<V> {
    pub fn unreachable() -> ShortestPath<V> {
        ShortestPath {
            vertices: Vec::new(),
            distance: Weight::INFINITY,
        }
    }

    /// The path from a vertex to itself.
    pub fn trivial(vertex: V) -> ShortestPath<V> {
        ShortestPath {
            vertices: vec![vertex],
            distance: 0.0,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.vertices.is_empty()
    }
}

/// Represents a request for validating a shortest path in a graph.
///
/// This struct is used to encapsulate a shortest path request along with the
/// distance of a shortest path, if there exists one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathTestCase<V> {
    pub request: ShortestPathRequest<V>,
    pub distance: Option<Weight>,
}

pub trait PathFinding<V: Vertex> {
    fn shortest_path(&self, request: &ShortestPathRequest<V>) -> ShortestPath<V>;

    fn shortest_path_distance(&self, request: &ShortestPathRequest<V>) -> Option<Weight> {
        let path = self.shortest_path(request);
        path.is_reachable().then_some(path.distance)
    }
}
