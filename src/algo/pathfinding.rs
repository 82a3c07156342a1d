//! Pathfinding algorithms
//!
//! Single-source shortest paths (Dijkstra) over non-negative edge weights,
//! plus point-to-point path reconstruction from the predecessor map.

use super::common::VisitMarks;
use crate::graph::{Graph, Label, Weight};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};
use tracing::debug;

/// Result of a single-source shortest path run
///
/// `weight["F"] = 10` means the cheapest route to F costs 10;
/// `previous["F"] = "C"` means that route reaches F via C.
/// The source itself appears in neither map, and unreachable vertices are
/// simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: Label,
    pub weight: BTreeMap<Label, Weight>,
    pub previous: BTreeMap<Label, Label>,
}

impl ShortestPaths {
    fn new(source: Label) -> Self {
        ShortestPaths {
            source,
            weight: BTreeMap::new(),
            previous: BTreeMap::new(),
        }
    }

    pub fn source(&self) -> &Label {
        &self.source
    }

    /// Lowest cost to reach `label`; `None` for the source or unreachable vertices
    pub fn cost_to(&self, label: &str) -> Option<Weight> {
        self.weight.get(label).copied()
    }

    pub fn previous_of(&self, label: &str) -> Option<&Label> {
        self.previous.get(label)
    }

    pub fn is_reachable(&self, label: &str) -> bool {
        self.source == label || self.weight.contains_key(label)
    }

    /// Number of vertices reached, not counting the source
    pub fn len(&self) -> usize {
        self.weight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weight.is_empty()
    }

    /// Vertices from the source to `target`, following predecessor links.
    ///
    /// Returns `Some([source])` for the source itself and `None` when
    /// `target` is unreachable.
    pub fn path_to(&self, target: &str) -> Option<Vec<Label>> {
        if self.source == target {
            return Some(vec![self.source.clone()]);
        }
        if !self.weight.contains_key(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = self.weight.get_key_value(target)?.0;
        // Each step moves to a vertex settled strictly earlier, so the walk is
        // bounded by the number of predecessor entries.
        for _ in 0..=self.previous.len() {
            path.push(current.clone());
            if *current == self.source {
                path.reverse();
                return Some(path);
            }
            current = self.previous.get(current.as_str())?;
        }
        None
    }
}

/// Point-to-point path with its total cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub source: Label,
    pub target: Label,
    pub path: Vec<Label>,
    pub cost: Weight,
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq, Eq)]
struct State<'a> {
    cost: Weight,
    label: &'a Label,
}

impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare reversed for min-heap; equal costs pop in label order
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.label.cmp(self.label))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (single source, all reachable targets)
///
/// Pops the cheapest frontier entry, settles it, and relaxes its edges to
/// unsettled vertices. A candidate replaces the recorded cost and predecessor
/// only when strictly cheaper. Each call starts from fresh state.
pub fn dijkstra(graph: &Graph, source: &str) -> ShortestPaths {
    let Some(root) = graph.find_vertex(source) else {
        debug!(source, "shortest paths: source vertex not found");
        return ShortestPaths::new(Label::new(source));
    };

    let mut result = ShortestPaths::new(root.label().clone());
    let mut settled = VisitMarks::new();
    let mut heap = BinaryHeap::new();

    heap.push(State { cost: 0, label: root.label() });

    while let Some(State { cost, label }) = heap.pop() {
        // Stale entry for a vertex already settled at a lower cost
        if !settled.visit(label) {
            continue;
        }
        if settled.len() == graph.vertex_count() {
            break;
        }

        let Some(vertex) = graph.find_vertex(label.as_str()) else {
            continue;
        };

        // The source is settled first, so it is never relaxed into the maps
        for edge in vertex.edges() {
            let next = edge.destination();
            if settled.is_visited(next.as_str()) {
                continue;
            }

            let next_cost = cost.saturating_add(edge.weight());
            let improves = result
                .weight
                .get(next.as_str())
                .map_or(true, |&known| next_cost < known);

            if improves {
                result.weight.insert(next.clone(), next_cost);
                result.previous.insert(next.clone(), label.clone());
                heap.push(State { cost: next_cost, label: next });
            }
        }
    }

    debug!(source, reached = result.len(), "shortest paths complete");
    result
}

/// Cheapest path from `source` to `target`, if one exists
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> Option<PathResult> {
    if !graph.contains(source) || !graph.contains(target) {
        return None;
    }

    let paths = dijkstra(graph, source);
    let path = paths.path_to(target)?;
    let cost = paths.cost_to(target).unwrap_or(0);

    Some(PathResult {
        source: paths.source.clone(),
        target: Label::new(target),
        path,
        cost,
    })
}
