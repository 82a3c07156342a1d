//! Core type definitions for the graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Cost of travelling along an edge.
///
/// Unsigned, so every weight satisfies the non-negative precondition of
/// Dijkstra's algorithm. A weight of zero denotes an unweighted edge.
pub type Weight = u64;

/// Vertex label (e.g., "A", "Seattle")
///
/// Labels are the identity of a vertex: two vertices with the same label are
/// the same vertex. Ordering is lexicographic, which fixes neighbor order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.to_string())
    }
}

impl From<&Label> for Label {
    fn from(l: &Label) -> Self {
        l.clone()
    }
}

// Ord on Label is the derived String ordering, so map lookups by &str agree.
impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_label() {
        let label = Label::new("Seattle");
        assert_eq!(label.as_str(), "Seattle");
        assert_eq!(format!("{}", label), "Seattle");

        let label2: Label = "Portland".into();
        assert_eq!(label2, "Portland");
        assert!(!label2.is_empty());
        assert!(Label::new("").is_empty());
    }

    #[test]
    fn test_label_ordering() {
        let a = Label::new("A");
        let b = Label::new("B");
        let lower = Label::new("a");
        assert!(a < b);
        // Byte order: uppercase sorts before lowercase
        assert!(b < lower);
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(Label::new("C"), 3);
        map.insert(Label::new("A"), 1);

        assert_eq!(map.get("A"), Some(&1));
        assert_eq!(map.get("Z"), None);
        let keys: Vec<&str> = map.keys().map(Label::as_str).collect();
        assert_eq!(keys, vec!["A", "C"]);
    }

    #[test]
    fn test_label_serializes_as_string() {
        let json = serde_json::to_string(&Label::new("A")).unwrap();
        assert_eq!(json, "\"A\"");
        let back: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Label::new("A"));
    }
}
