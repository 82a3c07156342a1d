//! Routegraph CLI: load an edge list and run traversals or shortest paths
//!
//! The edge list uses the count-prefixed `start end weight` format.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use routegraph::{Graph, GraphConfig, Label, LoadConfig, PathResult, ShortestPaths, Weight};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "routegraph", version, about = "Routegraph edge list CLI")]
struct Cli {
    /// Edge list file
    #[arg(env = "ROUTEGRAPH_FILE")]
    file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    /// Accept edges that start and end at the same vertex
    #[arg(long, global = true)]
    allow_self_loops: bool,

    /// Reject input after the announced number of edges
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex and edge counts
    Stats,
    /// Depth-first traversal order
    Dfs {
        /// Start vertex
        #[arg(long)]
        from: String,
    },
    /// Breadth-first traversal order
    Bfs {
        /// Start vertex
        #[arg(long)]
        from: String,
    },
    /// Shortest path costs from a vertex
    Paths {
        /// Source vertex
        #[arg(long)]
        from: String,

        /// Only show the path to this vertex
        #[arg(long)]
        to: Option<String>,
    },
    /// Weight of a single edge
    Weight {
        start: String,
        end: String,
    },
}

#[derive(Serialize)]
struct Stats {
    vertices: usize,
    edges: usize,
}

#[derive(Serialize)]
struct Traversal<'a> {
    start: &'a str,
    order: &'a [Label],
}

#[derive(Serialize)]
struct EdgeReport<'a> {
    start: &'a str,
    end: &'a str,
    weight: Option<Weight>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let graph = load_graph(cli)?;
    let output = match &cli.command {
        Commands::Stats => render_stats(&graph, cli.format)?,
        Commands::Dfs { from } => {
            render_traversal(from, &graph.depth_first_order(from), cli.format)?
        }
        Commands::Bfs { from } => {
            render_traversal(from, &graph.breadth_first_order(from), cli.format)?
        }
        Commands::Paths { from, to: None } => {
            render_paths(&graph.shortest_paths_from(from), cli.format)?
        }
        Commands::Paths { from, to: Some(to) } => {
            render_path(from, to, graph.shortest_path(from, to).as_ref(), cli.format)?
        }
        Commands::Weight { start, end } => {
            render_weight(start, end, graph.edge_weight(start, end), cli.format)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn load_graph(cli: &Cli) -> Result<Graph> {
    let mut graph = Graph::with_config(GraphConfig {
        allow_self_loops: cli.allow_self_loops,
    });
    let config = LoadConfig { strict: cli.strict };

    let loaded = routegraph::load_file(&mut graph, &cli.file, &config)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;
    debug!(edges = loaded, "edge list ready");
    Ok(graph)
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn render_stats(graph: &Graph, format: OutputFormat) -> Result<String> {
    let stats = Stats {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
    };

    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&stats)?,
        OutputFormat::Csv => format!("vertices,edges\n{},{}", stats.vertices, stats.edges),
        OutputFormat::Table => format!("Vertices: {}\nEdges:    {}", stats.vertices, stats.edges),
    })
}

fn render_traversal(start: &str, order: &[Label], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&Traversal { start, order })?,
        OutputFormat::Csv => {
            let mut out = String::from("step,vertex");
            for (step, label) in order.iter().enumerate() {
                out.push_str(&format!("\n{},{}", step + 1, format_csv_value(label.as_str())));
            }
            out
        }
        OutputFormat::Table => {
            if order.is_empty() {
                return Ok("(no vertices visited)".to_string());
            }
            let mut table = new_table(&["step", "vertex"]);
            for (step, label) in order.iter().enumerate() {
                table.add_row(vec![(step + 1).to_string(), label.to_string()]);
            }
            format!("{}\n{} vertex(es) visited", table, order.len())
        }
    })
}

fn render_paths(paths: &ShortestPaths, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(paths)?,
        OutputFormat::Csv => {
            let mut out = String::from("vertex,cost,previous");
            for (label, cost) in &paths.weight {
                let previous = paths.previous_of(label.as_str()).map(Label::as_str).unwrap_or("");
                out.push_str(&format!(
                    "\n{},{},{}",
                    format_csv_value(label.as_str()),
                    cost,
                    format_csv_value(previous)
                ));
            }
            out
        }
        OutputFormat::Table => {
            if paths.is_empty() {
                return Ok(format!("(nothing reachable from {})", paths.source()));
            }
            let mut table = new_table(&["vertex", "cost", "previous"]);
            for (label, cost) in &paths.weight {
                let previous = paths
                    .previous_of(label.as_str())
                    .map(Label::to_string)
                    .unwrap_or_default();
                table.add_row(vec![label.to_string(), cost.to_string(), previous]);
            }
            format!("{}\n{} vertex(es) reachable from {}", table, paths.len(), paths.source())
        }
    })
}

/// Unreachable targets render as JSON `null`, a header-only CSV or a note
fn render_path(
    from: &str,
    to: &str,
    path: Option<&PathResult>,
    format: OutputFormat,
) -> Result<String> {
    const CSV_HEADER: &str = "source,target,cost,path";

    let Some(path) = path else {
        return Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(&path)?,
            OutputFormat::Csv => CSV_HEADER.to_string(),
            OutputFormat::Table => format!("(no path from {} to {})", from, to),
        });
    };

    let hops: Vec<&str> = path.path.iter().map(Label::as_str).collect();
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(path)?,
        OutputFormat::Csv => format!(
            "{}\n{},{},{},{}",
            CSV_HEADER,
            format_csv_value(path.source.as_str()),
            format_csv_value(path.target.as_str()),
            path.cost,
            format_csv_value(&hops.join(" "))
        ),
        OutputFormat::Table => format!("{}\ncost: {}", hops.join(" -> "), path.cost),
    })
}

fn render_weight(
    start: &str,
    end: &str,
    weight: Option<Weight>,
    format: OutputFormat,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&EdgeReport { start, end, weight })?,
        OutputFormat::Csv => format!(
            "start,end,weight\n{},{},{}",
            format_csv_value(start),
            format_csv_value(end),
            weight.map(|w| w.to_string()).unwrap_or_default()
        ),
        OutputFormat::Table => match weight {
            Some(w) => format!("{} -> {}: {}", start, end, w),
            None => format!("{} -> {}: (no edge)", start, end),
        },
    })
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
