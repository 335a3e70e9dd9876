//! Serializers for the two textual graph formats.
//!
//! Undirected graphs print each edge once in canonical `u < v` order;
//! directed graphs print every ordered pair. Edges come out sorted, so
//! the output is deterministic for a given graph.
//!
//! File writers go through a temporary file in the target directory and
//! rename it into place, so a failed write never leaves a partial file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::GraphError;
use crate::graph::Graph;

/// Renders the graph as a CSV edge list, one `u,v` line per edge.
pub fn to_csv_string(graph: &Graph, is_directed: bool) -> String {
    let mut out = String::new();
    for (u, v) in ordered_edges(graph, is_directed) {
        out.push_str(&format!("{u},{v}\n"));
    }
    out
}

/// Renders the graph in DOT syntax, readable back by the DOT loader and
/// by graphviz.
pub fn to_dot_string(graph: &Graph, is_directed: bool) -> String {
    let (header, arrow) = if is_directed {
        ("digraph planar {\n", "->")
    } else {
        ("graph planar {\n", "--")
    };
    let mut out = String::from(header);
    for (u, v) in ordered_edges(graph, is_directed) {
        out.push_str(&format!("    {u} {arrow} {v};\n"));
    }
    out.push_str("}\n");
    out
}

/// Writes the CSV form of the graph to `path` atomically.
pub fn write_csv(graph: &Graph, is_directed: bool, path: &str) -> Result<(), GraphError> {
    write_atomic(path, &to_csv_string(graph, is_directed))
}

/// Writes the DOT form of the graph to `path` atomically.
pub fn write_dot(graph: &Graph, is_directed: bool, path: &str) -> Result<(), GraphError> {
    write_atomic(path, &to_dot_string(graph, is_directed))
}

fn ordered_edges(graph: &Graph, is_directed: bool) -> Vec<(u32, u32)> {
    if !is_directed {
        return graph.edges();
    }
    let mut out = Vec::new();
    for u in graph.vertices() {
        let mut targets: Vec<u32> = graph
            .neighbors(u)
            .map(|ns| ns.iter().copied().collect())
            .unwrap_or_default();
        radsort::sort(&mut targets);
        for v in targets {
            out.push((u, v));
        }
    }
    out
}

fn write_atomic(path: &str, content: &str) -> Result<(), GraphError> {
    let target = Path::new(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.persist(target).map_err(|e| GraphError::Io(e.error))?;
    Ok(())
}
