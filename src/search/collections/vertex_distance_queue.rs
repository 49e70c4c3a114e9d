use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{Vertex, Weight};

/// A tentative distance waiting in a frontier.
#[derive(Clone, Debug)]
pub struct DijkstraQueueElement<V> {
    pub distance: Weight,
    pub vertex: V,
    sequence: u64,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap. Equal distances pop in insertion order, the
// vertex itself never takes part in the comparison.
impl<V> Ord for DijkstraQueueElement<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<V> PartialOrd for DijkstraQueueElement<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> PartialEq for DijkstraQueueElement<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for DijkstraQueueElement<V> {}

/// A trait for a priority queue that manages vertices and their distances.
/// This trait is useful for graph algorithms that need to repeatedly retrieve
/// the vertex with the smallest distance (such as Dijkstra's algorithm).
///
/// Implementations do not need a decrease key operation. A vertex may be
/// inserted several times, stale entries simply stay in the queue.
pub trait VertexDistanceQueue<V: Vertex> {
    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: V, distance: Weight);

    /// Smallest distance currently queued.
    fn peek_distance(&self) -> Option<Weight>;

    /// Removes and returns the entry with the smallest distance from the
    /// priority queue or none if the queue is empty.
    fn pop(&mut self) -> Option<DijkstraQueueElement<V>>;
}

/// A priority queue implementation using a Binary Heap.
#[derive(Clone, Debug)]
pub struct VertexDistanceQueueBinaryHeap<V> {
    heap: BinaryHeap<DijkstraQueueElement<V>>,
    next_sequence: u64,
}

impl<V: Vertex> Default for VertexDistanceQueueBinaryHeap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> VertexDistanceQueueBinaryHeap<V> {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
}

impl<V: Vertex> VertexDistanceQueue<V> for VertexDistanceQueueBinaryHeap<V> {
    fn insert(&mut self, vertex: V, distance: Weight) {
        self.heap.push(DijkstraQueueElement {
            distance,
            vertex,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }

    fn peek_distance(&self) -> Option<Weight> {
        self.heap.peek().map(|element| element.distance)
    }

    fn pop(&mut self) -> Option<DijkstraQueueElement<V>> {
        self.heap.pop()
    }
}
