//! In-memory graph storage implementation
//!
//! The graph owns every vertex in a label-keyed map, and each vertex owns its
//! outgoing edges. Dropping the graph drops everything.

use super::vertex::Vertex;
use super::types::{Label, Weight};
use crate::algo::{self, PathResult, ShortestPaths};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Self-loop on vertex {0} is not allowed")]
    SelfLoop(Label),

    #[error("Vertex label must not be empty")]
    EmptyLabel,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph behaviour switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Accept edges whose start and end are the same vertex
    pub allow_self_loops: bool,
}

/// Directed, weighted graph
///
/// Uses ordered maps so iteration is deterministic:
/// - vertices: Label -> Vertex
/// - each vertex: destination Label -> Edge
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex storage
    vertices: BTreeMap<Label, Vertex>,

    /// Number of vertices, bumped on creation
    vertex_count: usize,

    /// Number of distinct edges, bumped on new edges only
    edge_count: usize,

    config: GraphConfig,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with the given configuration
    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Get total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add an edge from `start` to `end`, creating either vertex if needed.
    ///
    /// Returns `Ok(true)` for a new edge and `Ok(false)` when an existing edge
    /// was overwritten with `weight`. Overwrites leave the edge count alone.
    pub fn add(
        &mut self,
        start: impl Into<Label>,
        end: impl Into<Label>,
        weight: Weight,
    ) -> GraphResult<bool> {
        let start = start.into();
        let end = end.into();

        // Validate before touching storage so rejected edges leave no vertices
        if start.is_empty() || end.is_empty() {
            warn!(start = %start, end = %end, "rejected edge with empty label");
            return Err(GraphError::EmptyLabel);
        }
        if start == end && !self.config.allow_self_loops {
            warn!(vertex = %start, "rejected self-loop");
            return Err(GraphError::SelfLoop(start));
        }

        self.find_or_create_vertex(&end);
        let previous = self.find_or_create_vertex(&start).connect(end.clone(), weight);

        match previous {
            None => {
                self.edge_count += 1;
                debug!(start = %start, end = %end, weight, "added edge");
                Ok(true)
            }
            Some(old) => {
                debug!(start = %start, end = %end, old, weight, "overwrote edge");
                Ok(false)
            }
        }
    }

    /// Add a zero-weight edge
    pub fn add_unweighted(
        &mut self,
        start: impl Into<Label>,
        end: impl Into<Label>,
    ) -> GraphResult<bool> {
        self.add(start, end, 0)
    }

    /// Remove the edge from `start` to `end`. Both vertices stay.
    pub fn remove_edge(&mut self, start: &str, end: &str) -> bool {
        let removed = self
            .vertices
            .get_mut(start)
            .map(|vertex| vertex.disconnect(end))
            .unwrap_or(false);
        if removed {
            self.edge_count -= 1;
            debug!(start, end, "removed edge");
        }
        removed
    }

    /// Weight of the edge between `start` and `end`.
    ///
    /// `None` if either vertex is missing or they are not connected.
    pub fn edge_weight(&self, start: &str, end: &str) -> Option<Weight> {
        self.find_vertex(start)?.edge_weight(end)
    }

    /// Find a vertex by label
    pub fn find_vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertices.get(label)
    }

    /// Find a vertex, creating it if it does not exist
    pub(crate) fn find_or_create_vertex(&mut self, label: &Label) -> &mut Vertex {
        if !self.vertices.contains_key(label.as_str()) {
            self.vertex_count += 1;
            debug!(vertex = %label, "created vertex");
        }
        self.vertices
            .entry(label.clone())
            .or_insert_with(|| Vertex::new(label.clone()))
    }

    /// Check if a vertex exists
    pub fn contains(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// All labels in label order
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.vertices.keys()
    }

    /// All vertices in label order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Depth-first traversal from `start`, calling `visit` once per reached vertex
    pub fn depth_first_traversal<F>(&self, start: &str, visit: F)
    where
        F: FnMut(&Label),
    {
        algo::depth_first(self, start, visit);
    }

    /// Breadth-first traversal from `start`, calling `visit` once per reached vertex
    pub fn breadth_first_traversal<F>(&self, start: &str, visit: F)
    where
        F: FnMut(&Label),
    {
        algo::breadth_first(self, start, visit);
    }

    /// Labels in depth-first visit order
    pub fn depth_first_order(&self, start: &str) -> Vec<Label> {
        let mut order = Vec::new();
        self.depth_first_traversal(start, |label| order.push(label.clone()));
        order
    }

    /// Labels in breadth-first visit order
    pub fn breadth_first_order(&self, start: &str) -> Vec<Label> {
        let mut order = Vec::new();
        self.breadth_first_traversal(start, |label| order.push(label.clone()));
        order
    }

    /// Lowest cost from `start` to every reachable vertex (Dijkstra)
    pub fn shortest_paths_from(&self, start: &str) -> ShortestPaths {
        algo::dijkstra(self, start)
    }

    /// Cheapest path between two vertices, if `end` is reachable from `start`
    pub fn shortest_path(&self, start: &str, end: &str) -> Option<PathResult> {
        algo::shortest_path(self, start, end)
    }
}
