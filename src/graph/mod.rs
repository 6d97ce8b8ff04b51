pub use adjacency_matrix::AdjacencyMatrix;
pub use base_graph::{BaseGraph, VertexId, Weight};
pub use hash_map_graph::HashMapGraph;
pub use mutable_graph::MutableGraph;
pub use vertex::Vertex;

mod adjacency_matrix;
mod base_graph;
mod hash_map_graph;
mod mutable_graph;
mod vertex;
