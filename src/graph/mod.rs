//! Core graph implementation
//!
//! This module implements the directed, weighted graph model:
//! - Vertices identified by unique labels
//! - At most one directed edge per (start, end) pair
//! - Outgoing edges kept in label order for deterministic traversal

pub mod edge;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use store::{Graph, GraphConfig, GraphError, GraphResult};
pub use types::{Label, Weight};
pub use vertex::{NeighborCursor, Vertex};
