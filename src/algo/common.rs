//! Shared utilities for graph algorithms
//!
//! Traversal state lives here rather than on the vertices, so every run starts
//! clean and concurrent readers of the same graph never see each other's marks.

use crate::graph::Label;
use rustc_hash::FxHashSet;

/// Visited marks for a single algorithm run
#[derive(Debug, Default, Clone)]
pub struct VisitMarks {
    visited: FxHashSet<Label>,
}

impl VisitMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `label` visited. Returns false if it already was.
    pub fn visit(&mut self, label: &Label) -> bool {
        if self.visited.contains(label) {
            return false;
        }
        self.visited.insert(label.clone())
    }

    pub fn unvisit(&mut self, label: &str) -> bool {
        self.visited.remove(label)
    }

    pub fn is_visited(&self, label: &str) -> bool {
        self.visited.contains(label)
    }

    /// Mark every vertex unvisited
    pub fn clear(&mut self) {
        self.visited.clear();
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_marks() {
        let mut marks = VisitMarks::new();
        let a = Label::new("A");

        assert!(!marks.is_visited("A"));
        assert!(marks.visit(&a));
        assert!(!marks.visit(&a));
        assert!(marks.is_visited("A"));
        assert_eq!(marks.len(), 1);

        assert!(marks.unvisit("A"));
        assert!(!marks.unvisit("A"));
        assert!(marks.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut marks = VisitMarks::new();
        marks.visit(&Label::new("A"));
        marks.visit(&Label::new("B"));

        marks.clear();
        assert!(!marks.is_visited("A"));
        assert!(!marks.is_visited("B"));
    }
}
