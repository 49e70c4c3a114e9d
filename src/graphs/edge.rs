use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};
use crate::error::GraphError;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DirectedWeightedEdge<V> {
    tail: V,
    head: V,
    weight: Weight,
}

impl<V: Vertex> DirectedWeightedEdge<V> {
    /// Creates a new edge. Negative, NaN and infinite weights are rejected
    /// since Dijkstra's algorithm gives no guarantees for them.
    pub fn new(tail: V, head: V, weight: Weight) -> Result<DirectedWeightedEdge<V>, GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                tail: format!("{:?}", tail),
                head: format!("{:?}", head),
                weight,
            });
        }

        Ok(DirectedWeightedEdge { tail, head, weight })
    }

    /// Only for weights that already passed `new`.
    pub(crate) fn from_valid_parts(tail: V, head: V, weight: Weight) -> DirectedWeightedEdge<V> {
        DirectedWeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> &V {
        &self.tail
    }

    pub fn head(&self) -> &V {
        &self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn reversed(&self) -> DirectedWeightedEdge<V> {
        DirectedWeightedEdge {
            tail: self.head.clone(),
            head: self.tail.clone(),
            weight: self.weight,
        }
    }
}

/// Parses `<tail>,<head>,<weight>`, e.g. `a,b,3.5`.
impl FromStr for DirectedWeightedEdge<String> {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GraphError::MalformedEdge(s.to_string());

        let mut values = s.split(',').map(str::trim);
        let tail = values.next().filter(|tail| !tail.is_empty()).ok_or_else(malformed)?;
        let head = values.next().filter(|head| !head.is_empty()).ok_or_else(malformed)?;
        let weight: Weight = values
            .next()
            .ok_or_else(malformed)?
            .parse()
            .map_err(|_| malformed())?;
        if values.next().is_some() {
            return Err(malformed());
        }

        DirectedWeightedEdge::new(tail.to_string(), head.to_string(), weight)
    }
}
