//! Traversal algorithms
//!
//! Depth-first (explicit stack) and breadth-first (queue) traversal over the
//! neighbor cursor primitive. Neighbors are scanned in label order, so the
//! visit order for a given graph and start is fixed.

use super::common::VisitMarks;
use crate::graph::{Graph, Label, NeighborCursor};
use std::collections::VecDeque;
use tracing::debug;

/// Move `cursor` to the first neighbor not yet visited and return it.
///
/// Visited neighbors are skipped permanently: marks only ever grow during a
/// run, so a skipped neighbor can never become a candidate again.
fn next_unvisited<'a>(cursor: &mut NeighborCursor<'a>, marks: &VisitMarks) -> Option<&'a Label> {
    let mut candidate = cursor.current();
    while let Some(label) = candidate {
        if !marks.is_visited(label.as_str()) {
            return Some(label);
        }
        candidate = cursor.advance();
    }
    None
}

/// Depth-First Traversal
///
/// Visits `start`, then repeatedly descends into the first unvisited neighbor
/// of the vertex on top of the stack, popping it once it has none left.
/// Does nothing when `start` is not in the graph.
pub fn depth_first<F>(graph: &Graph, start: &str, mut visit: F)
where
    F: FnMut(&Label),
{
    let Some(root) = graph.find_vertex(start) else {
        debug!(start, "depth-first traversal: start vertex not found");
        return;
    };

    let mut marks = VisitMarks::new();
    // One cursor per stack frame; each resumes where it left off
    let mut stack: Vec<NeighborCursor<'_>> = Vec::new();

    marks.visit(root.label());
    visit(root.label());
    stack.push(root.neighbor_cursor());

    loop {
        let next = match stack.last_mut() {
            Some(cursor) => next_unvisited(cursor, &marks),
            None => break,
        };

        match next {
            Some(label) => {
                marks.visit(label);
                visit(label);
                if let Some(vertex) = graph.find_vertex(label.as_str()) {
                    stack.push(vertex.neighbor_cursor());
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(start, visited = marks.len(), "depth-first traversal complete");
}

/// Breadth-First Traversal
///
/// Marks every unvisited neighbor of the front vertex as it is enqueued, then
/// visits the front and dequeues it. Visit order is queue order.
/// Does nothing when `start` is not in the graph.
pub fn breadth_first<F>(graph: &Graph, start: &str, mut visit: F)
where
    F: FnMut(&Label),
{
    let Some(root) = graph.find_vertex(start) else {
        debug!(start, "breadth-first traversal: start vertex not found");
        return;
    };

    let mut marks = VisitMarks::new();
    let mut queue = VecDeque::new();

    marks.visit(root.label());
    queue.push_back(root);

    while let Some(&front) = queue.front() {
        let mut cursor = front.neighbor_cursor();
        while let Some(label) = next_unvisited(&mut cursor, &marks) {
            marks.visit(label);
            if let Some(vertex) = graph.find_vertex(label.as_str()) {
                queue.push_back(vertex);
            }
        }

        visit(front.label());
        queue.pop_front();
    }

    debug!(start, visited = marks.len(), "breadth-first traversal complete");
}
