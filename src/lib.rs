//! Routegraph
//!
//! A directed, weighted graph with deterministic traversal and single-source
//! shortest paths.
//!
//! # Features
//!
//! - Vertices identified by string labels, created on first use
//! - At most one directed edge per (start, end) pair, kept in label order
//! - Depth-first and breadth-first traversal with caller-supplied closures
//! - Dijkstra shortest paths with predecessor links
//! - Loader for the count-prefixed `start end weight` edge list format
//!
//! ## Example Usage
//!
//! ```rust
//! use routegraph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add("A", "B", 5).unwrap();
//! graph.add("A", "C", 2).unwrap();
//! graph.add("C", "B", 1).unwrap();
//! graph.add("B", "D", 3).unwrap();
//!
//! let mut visited = Vec::new();
//! graph.depth_first_traversal("A", |label| visited.push(label.to_string()));
//! assert_eq!(visited, vec!["A", "B", "D", "C"]);
//!
//! let paths = graph.shortest_paths_from("A");
//! assert_eq!(paths.cost_to("B"), Some(3));
//! assert_eq!(paths.cost_to("D"), Some(6));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod loader;

// Re-export main types for convenience
pub use graph::{
    Edge, Graph, GraphConfig, GraphError, GraphResult, Label, NeighborCursor, Vertex, Weight,
};

pub use algo::{PathResult, ShortestPaths, VisitMarks};

pub use loader::{load_file, load_reader, load_str, LoadConfig, LoadError, LoadResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
