//! Graph algorithms module
//!
//! Traversal and search algorithms over a borrowed [`Graph`](crate::graph::Graph).
//! All per-run state (visited marks, neighbor cursors, frontier) is local to
//! the call, so algorithms only need `&Graph`.

pub mod common;
pub mod pathfinding;
pub mod traversal;

pub use common::VisitMarks;
pub use pathfinding::{dijkstra, shortest_path, PathResult, ShortestPaths};
pub use traversal::{breadth_first, depth_first};
