//! An undirected weighted graph whose vertex count, edge count and total weight stay
//! consistent under every mutation, with cycle detection, adjacency-matrix export and
//! Kruskal minimum spanning trees.
//!
//! ```
//! use weighted_graph::graph::{BaseGraph, HashMapGraph, MutableGraph};
//!
//! let mut graph: HashMapGraph<&str, u32> = HashMapGraph::new();
//! graph.add_nodes(vec!["a", "b", "c"]).unwrap();
//! graph.add_edge(&"a", &"b", 5).unwrap();
//! graph.add_edge(&"b", &"c", 3).unwrap();
//! graph.add_edge(&"a", &"c", 7).unwrap();
//! assert!(graph.has_cycle());
//!
//! let tree = graph.minimum_spanning_tree().unwrap();
//! assert_eq!(tree.total_weight(), 8);
//! ```
pub(crate) mod datastructures;

pub mod cycle_detection;
pub mod error;
pub mod graph;
#[cfg(feature = "logging")]
pub mod logging;
pub mod spanning_tree;

pub use error::{GraphError, GraphErrorKind};
pub use spanning_tree::SpanningTreeStrategy;
