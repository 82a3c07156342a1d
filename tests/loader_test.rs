use routegraph::{load_file, Graph, GraphConfig, LoadConfig, LoadError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_edges(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_read_file_then_search() {
    let file = write_edges("4\nA B 5\nA C 2\nC B 1\nB D 3\n");

    let mut graph = Graph::new();
    let loaded = graph.read_file(file.path()).unwrap();

    assert_eq!(loaded, 4);
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 4);

    let paths = graph.shortest_paths_from("A");
    assert_eq!(paths.cost_to("D"), Some(6));
}

#[test]
fn test_read_file_appends_to_existing_graph() {
    let file = write_edges("1\nB C 4");

    let mut graph = Graph::new();
    graph.add("A", "B", 1).unwrap();
    assert_eq!(graph.read_file(file.path()).unwrap(), 1);

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.shortest_paths_from("A").cost_to("C"), Some(5));
}

#[test]
fn test_duplicate_edges_in_file() {
    let file = write_edges("3\nA B 5\nA B 2\nB C 1\n");

    let mut graph = Graph::new();
    let added = graph.read_file(file.path()).unwrap();

    // Last weight wins; overwrite is not a new edge
    assert_eq!(added, 2);
    assert_eq!(graph.edge_weight("A", "B"), Some(2));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_truncated_file_keeps_loaded_edges() {
    let file = write_edges("5\nA B 1\nB C 2\nC");

    let mut graph = Graph::new();
    let err = graph.read_file(file.path()).unwrap_err();

    assert!(matches!(err, LoadError::UnexpectedEof { expected: 5, loaded: 2 }));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.depth_first_order("A").len(), 3);
}

#[test]
fn test_self_loop_file_with_config() {
    let file = write_edges("2\nA A 1\nA B 2\n");

    let mut strict_graph = Graph::new();
    assert!(matches!(
        strict_graph.read_file(file.path()),
        Err(LoadError::Graph { index: 0, .. })
    ));
    assert!(strict_graph.is_empty());

    let mut graph = Graph::with_config(GraphConfig { allow_self_loops: true });
    load_file(&mut graph, file.path(), &LoadConfig::default()).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_weight("A", "A"), Some(1));
}

#[test]
fn test_error_messages() {
    let file = write_edges("1\nA B x");
    let mut graph = Graph::new();
    let err = graph.read_file(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid weight \"x\" for edge 0");
}
