pub mod bidirectional;
pub mod bidirectional_helpers;
pub mod collections;
pub mod dijkstra;
