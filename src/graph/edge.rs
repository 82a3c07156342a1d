//! Edge implementation
//!
//! An edge is a directed, weighted connection owned by its source vertex.
//! The source is implicit (the owning vertex); the edge stores only where it
//! goes and what it costs.

use super::types::{Label, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed edge to `destination` costing `weight`
///
/// Immutable once constructed: replacing an edge means inserting a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Target vertex (edge goes TO this vertex)
    destination: Label,

    /// Cost of travelling along this edge
    weight: Weight,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(destination: impl Into<Label>, weight: Weight) -> Self {
        Edge {
            destination: destination.into(),
            weight,
        }
    }

    /// Vertex this edge connects to
    pub fn destination(&self) -> &Label {
        &self.destination
    }

    /// Cost of travelling via this edge
    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-> {} ({})", self.destination, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new("B", 5);

        assert_eq!(edge.destination(), &Label::new("B"));
        assert_eq!(edge.weight(), 5);
        assert_ne!(edge.destination(), &Label::new("C"));
    }

    #[test]
    fn test_unweighted_edge() {
        let edge = Edge::new(Label::new("D"), 0);
        assert_eq!(edge.weight(), 0);
    }

    #[test]
    fn test_edge_display() {
        let edge = Edge::new("Portland", 173);
        assert_eq!(edge.to_string(), "-> Portland (173)");
    }
}
