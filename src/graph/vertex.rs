//! Vertex implementation
//!
//! A vertex owns its outgoing edges, keyed and ordered by destination label.
//! Label order is what makes traversal order deterministic.
//!
//! Vertices carry no traversal state. Algorithms iterate neighbors through a
//! [`NeighborCursor`] they own, so two traversals over the same vertex never
//! share a position.

use super::edge::Edge;
use super::types::{Label, Weight};
use std::collections::btree_map::{self, BTreeMap};
use std::iter::Peekable;

/// A vertex in the graph
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Unique, immutable label
    label: Label,

    /// Outgoing edges: destination -> edge (at most one per destination)
    outgoing: BTreeMap<Label, Edge>,
}

impl Vertex {
    /// Create a vertex with no outgoing edges
    pub fn new(label: impl Into<Label>) -> Self {
        Vertex {
            label: label.into(),
            outgoing: BTreeMap::new(),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Add or replace the edge to `destination`.
    ///
    /// Returns the previous weight when an existing edge was replaced.
    pub fn connect(&mut self, destination: impl Into<Label>, weight: Weight) -> Option<Weight> {
        let destination = destination.into();
        let edge = Edge::new(destination.clone(), weight);
        self.outgoing
            .insert(destination, edge)
            .map(|previous| previous.weight())
    }

    /// Remove the edge to `destination`, returning whether one existed
    pub fn disconnect(&mut self, destination: &str) -> bool {
        self.outgoing.remove(destination).is_some()
    }

    /// Weight of the edge to `destination`, `None` if not connected
    pub fn edge_weight(&self, destination: &str) -> Option<Weight> {
        self.outgoing.get(destination).map(Edge::weight)
    }

    pub fn is_connected_to(&self, destination: &str) -> bool {
        self.outgoing.contains_key(destination)
    }

    /// Outgoing edges in destination label order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.outgoing.values()
    }

    /// Neighbor labels in label order
    pub fn neighbors(&self) -> impl Iterator<Item = &Label> {
        self.outgoing.keys()
    }

    pub fn number_of_neighbors(&self) -> usize {
        self.outgoing.len()
    }

    /// A fresh cursor positioned at the first neighbor
    pub fn neighbor_cursor(&self) -> NeighborCursor<'_> {
        NeighborCursor::new(&self.outgoing)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Vertex {}

/// Iteration position over a vertex's neighbors, in label order
///
/// `current` peeks, `advance` steps then peeks. Both return `None` once the
/// neighbors are exhausted.
#[derive(Debug, Clone)]
pub struct NeighborCursor<'a> {
    outgoing: &'a BTreeMap<Label, Edge>,
    keys: Peekable<btree_map::Keys<'a, Label, Edge>>,
}

impl<'a> NeighborCursor<'a> {
    fn new(outgoing: &'a BTreeMap<Label, Edge>) -> Self {
        NeighborCursor {
            outgoing,
            keys: outgoing.keys().peekable(),
        }
    }

    /// Move back to the first neighbor
    pub fn reset(&mut self) {
        self.keys = self.outgoing.keys().peekable();
    }

    /// Neighbor at the cursor, without moving
    pub fn current(&mut self) -> Option<&'a Label> {
        self.keys.peek().copied()
    }

    /// Step to the next neighbor and return it
    pub fn advance(&mut self) -> Option<&'a Label> {
        self.keys.next()?;
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_and_weight() {
        let mut v = Vertex::new("A");
        assert_eq!(v.connect("B", 5), None);
        assert_eq!(v.connect("C", 0), None);

        assert_eq!(v.edge_weight("B"), Some(5));
        // Unweighted edge is distinct from a missing one
        assert_eq!(v.edge_weight("C"), Some(0));
        assert_eq!(v.edge_weight("Z"), None);
        assert_eq!(v.number_of_neighbors(), 2);
    }

    #[test]
    fn test_connect_overwrites() {
        let mut v = Vertex::new("A");
        v.connect("B", 5);
        assert_eq!(v.connect("B", 9), Some(5));
        assert_eq!(v.edge_weight("B"), Some(9));
        assert_eq!(v.number_of_neighbors(), 1);
    }

    #[test]
    fn test_disconnect() {
        let mut v = Vertex::new("A");
        v.connect("B", 1);

        assert!(v.disconnect("B"));
        assert!(!v.disconnect("B"));
        assert!(!v.is_connected_to("B"));
        assert_eq!(v.number_of_neighbors(), 0);
    }

    #[test]
    fn test_neighbors_in_label_order() {
        let mut v = Vertex::new("A");
        v.connect("D", 1);
        v.connect("B", 2);
        v.connect("C", 3);

        let order: Vec<&str> = v.neighbors().map(Label::as_str).collect();
        assert_eq!(order, vec!["B", "C", "D"]);
        let weights: Vec<Weight> = v.edges().map(Edge::weight).collect();
        assert_eq!(weights, vec![2, 3, 1]);
    }

    #[test]
    fn test_cursor_walk() {
        let mut v = Vertex::new("A");
        v.connect("C", 1);
        v.connect("B", 1);

        let mut cursor = v.neighbor_cursor();
        assert_eq!(cursor.current().map(Label::as_str), Some("B"));
        // current does not move
        assert_eq!(cursor.current().map(Label::as_str), Some("B"));
        assert_eq!(cursor.advance().map(Label::as_str), Some("C"));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance(), None);

        cursor.reset();
        assert_eq!(cursor.current().map(Label::as_str), Some("B"));
    }

    #[test]
    fn test_cursor_on_isolated_vertex() {
        let v = Vertex::new("A");
        let mut cursor = v.neighbor_cursor();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn test_independent_cursors() {
        let mut v = Vertex::new("A");
        v.connect("B", 1);
        v.connect("C", 1);

        let mut first = v.neighbor_cursor();
        let mut second = v.neighbor_cursor();
        first.advance();
        assert_eq!(first.current().map(Label::as_str), Some("C"));
        assert_eq!(second.current().map(Label::as_str), Some("B"));
    }

    #[test]
    fn test_vertex_identity_is_label() {
        let mut a = Vertex::new("A");
        a.connect("B", 1);
        let bare = Vertex::new("A");
        assert_eq!(a, bare);
        assert_ne!(Vertex::new("A"), Vertex::new("B"));
    }
}
