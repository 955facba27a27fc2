//! Astar CLI — shortest paths over edge-list files.
//!
//! Usage:
//!   astar path <graph> <start> <goal> [--pretty] [-v...]
//!   astar nodes <graph>

use astar::{Astar, EdgeList, SearchError};
use clap::{ArgAction, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "astar",
    version,
    about = "Best-first graph search over edge-list files"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a cheapest path between two nodes
    Path {
        /// Edge list file (.json, .yaml or .yml)
        graph: PathBuf,
        /// Start node
        start: String,
        /// Goal node
        goal: String,
        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },
    /// List the distinct nodes of a graph
    Nodes {
        /// Edge list file (.json, .yaml or .yml)
        graph: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_graph(path: &Path) -> Result<EdgeList, String> {
    EdgeList::load(path).map_err(|e| format!("Failed to load graph '{}': {}", path.display(), e))
}

async fn cmd_path(
    graph: &Path,
    start: &str,
    goal: &str,
    pretty: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    let edges = match load_graph(graph) {
        Ok(edges) => edges,
        Err(e) => {
            writeln!(err, "Error: {}", e).ok();
            return 1;
        }
    };
    tracing::info!(edges = edges.len(), "graph loaded");

    let astar = Astar::with_edges(edges);
    match astar.find_path(start, goal).await {
        Ok(result) => {
            let rendered = if pretty {
                serde_json::to_string_pretty(&result)
            } else {
                serde_json::to_string(&result)
            };
            match rendered {
                Ok(json) => {
                    writeln!(out, "{}", json).ok();
                    0
                }
                Err(e) => {
                    writeln!(err, "Error: {}", e).ok();
                    1
                }
            }
        }
        Err(e @ SearchError::NoPathToGoal) => {
            writeln!(err, "Error: {}", e).ok();
            1
        }
        Err(e) => {
            writeln!(err, "Error: search failed: {}", e).ok();
            1
        }
    }
}

fn cmd_nodes(graph: &Path, out: &mut impl Write, err: &mut impl Write) -> i32 {
    match load_graph(graph) {
        Ok(edges) => {
            for node in edges.nodes() {
                writeln!(out, "{}", node).ok();
            }
            0
        }
        Err(e) => {
            writeln!(err, "Error: {}", e).ok();
            1
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();
    let code = match cli.command {
        Commands::Path {
            graph,
            start,
            goal,
            pretty,
        } => cmd_path(&graph, &start, &goal, pretty, &mut out, &mut err).await,
        Commands::Nodes { graph } => cmd_nodes(&graph, &mut out, &mut err),
    };
    out.flush().ok();
    std::process::exit(code);
}
