use std::io::ErrorKind;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use planar_subgraph::error::GraphError;
use planar_subgraph::graph::Graph;
use planar_subgraph::{input, output, search};

#[derive(Parser)]
#[command(name = "planar_subgraph", about = "Find a maximum planar subgraph")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the maximum planar subgraph and write it in DOT format
    Compute {
        /// File that contains the graph
        input: String,
        /// File to write the maximum planar subgraph to
        output: String,
        /// Read the input as a CSV edge list instead of DOT
        #[arg(long)]
        csv: bool,
    },
    /// Convert a CSV edge list to DOT
    ToDot {
        input: String,
        output: String,
    },
    /// Convert a DOT file to a CSV edge list
    ToCsv {
        input: String,
        output: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compute { input, output: out, csv } => {
            let (graph, _) = load(&input, csv)?;
            tracing::info!(
                vertices = graph.vertex_count(),
                edges = graph.edge_count(),
                "loaded {input}"
            );
            let planar = search::maximum_planar_subgraph(&graph);
            tracing::info!(kept = planar.edge_count(), "search finished");
            write(&out, output::write_dot(&planar, false, &out))?;
        }
        Command::ToDot { input, output: out } => {
            let (graph, is_directed) = load(&input, true)?;
            write(&out, output::write_dot(&graph, is_directed, &out))?;
        }
        Command::ToCsv { input, output: out } => {
            let (graph, is_directed) = load(&input, false)?;
            write(&out, output::write_csv(&graph, is_directed, &out))?;
        }
    }
    Ok(())
}

fn load(path: &str, csv: bool) -> Result<(Graph, bool)> {
    let loaded = if csv {
        input::csv_from_file(path)
    } else {
        input::dot_from_file(path)
    };
    match loaded {
        Err(GraphError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            bail!("Cannot find {path}")
        }
        other => Ok(other?),
    }
}

fn write(path: &str, outcome: Result<(), GraphError>) -> Result<()> {
    match outcome {
        Err(GraphError::Io(e)) if e.kind() == ErrorKind::PermissionDenied => {
            bail!("Do not have permission to write {path}")
        }
        other => Ok(other?),
    }
}
