//! Edge list loader
//!
//! Reads the count-prefixed triple format:
//!
//! ```text
//! 4
//! A B 5
//! A C 2
//! C B 1
//! B D 3
//! ```
//!
//! The first token is the number of edges `N`, followed by `N` groups of
//! `start end weight`. Tokens are whitespace separated and may be split across
//! lines freely. Loading stops at the first bad token; edges added before it
//! stay in the graph.

use crate::graph::{Graph, GraphError, Weight};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Loader errors
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Edge count missing or not a non-negative integer
    #[error("Invalid edge count: {0:?}")]
    InvalidCount(String),

    /// Input ended before all announced edges were read; `loaded` counts new edges
    #[error("Unexpected end of input: expected {expected} edges, loaded {loaded}")]
    UnexpectedEof { expected: usize, loaded: usize },

    /// Weight token is not a non-negative integer
    #[error("Invalid weight {token:?} for edge {index}")]
    InvalidWeight { index: usize, token: String },

    /// The graph refused an edge
    #[error("Edge {index} rejected: {source}")]
    Graph {
        index: usize,
        #[source]
        source: GraphError,
    },

    /// Tokens after the last announced edge (strict mode only)
    #[error("Trailing input after {expected} edges: {token:?}")]
    TrailingInput { expected: usize, token: String },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Loader behaviour switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadConfig {
    /// Reject anything after the announced number of edges
    pub strict: bool,
}

/// Load edges from a string into `graph`, returning how many new edges were added
///
/// A triple that overwrites an existing edge counts as read but not as added,
/// matching [`Graph::edge_count`].
pub fn load_str(graph: &mut Graph, input: &str, config: &LoadConfig) -> LoadResult<usize> {
    let mut tokens = input.split_whitespace();

    let count_token = tokens.next().unwrap_or_default();
    let expected: usize = count_token
        .parse()
        .map_err(|_| LoadError::InvalidCount(count_token.to_string()))?;
    debug!(expected, "reading edge list");

    let mut added = 0;
    for index in 0..expected {
        let (Some(start), Some(end), Some(weight_token)) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            warn!(expected, loaded = added, "edge list truncated");
            return Err(LoadError::UnexpectedEof { expected, loaded: added });
        };

        let weight: Weight = weight_token.parse().map_err(|_| LoadError::InvalidWeight {
            index,
            token: weight_token.to_string(),
        })?;

        let is_new = graph
            .add(start, end, weight)
            .map_err(|source| LoadError::Graph { index, source })?;
        if is_new {
            added += 1;
        }
    }

    if config.strict {
        if let Some(token) = tokens.next() {
            return Err(LoadError::TrailingInput {
                expected,
                token: token.to_string(),
            });
        }
    }

    info!(
        triples = expected,
        edges = added,
        vertices = graph.vertex_count(),
        "loaded edge list"
    );
    Ok(added)
}

/// Load edges from any reader
pub fn load_reader<R: Read>(
    graph: &mut Graph,
    reader: R,
    config: &LoadConfig,
) -> LoadResult<usize> {
    let mut input = String::new();
    BufReader::new(reader).read_to_string(&mut input)?;
    load_str(graph, &input, config)
}

/// Load edges from a file
pub fn load_file(
    graph: &mut Graph,
    path: impl AsRef<Path>,
    config: &LoadConfig,
) -> LoadResult<usize> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening edge list");
    let file = File::open(path)?;
    load_reader(graph, file, config)
}

impl Graph {
    /// Read edges from a file into this graph with the default loader settings
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> LoadResult<usize> {
        load_file(self, path, &LoadConfig::default())
    }
}
