//! Loaders for the two textual graph formats.
//!
//! CSV: one edge per line in the format "u,v". The file is treated as
//! directed unless every edge also appears in the reverse orientation.
//!
//! DOT-like: any `u -- v` (or `u -> v` when the content mentions
//! `digraph`) pair of integers found in the content counts as an edge;
//! everything else is ignored, so ordinary graphviz files load fine.
//!
//! Either way the returned [`Graph`] is symmetric (a directed source is
//! symmetrized here, before anything reaches the core) and the flag
//! reports what the source claimed.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

use hashbrown::HashSet;

use crate::error::GraphError;
use crate::graph::Graph;

/// Reads a CSV edge list from a file.
pub fn csv_from_file(path: &str) -> Result<(Graph, bool), GraphError> {
    let file = File::open(path)?;
    parse_csv(BufReader::new(file))
}

/// Equivalent to [`csv_from_file`], but takes a string as input.
pub fn csv_from_str(input: &str) -> Result<(Graph, bool), GraphError> {
    parse_csv(BufReader::new(Cursor::new(input)))
}

fn parse_csv<R: BufRead>(reader: R) -> Result<(Graph, bool), GraphError> {
    let mut edges: Vec<(u32, u32)> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((a, b)) = line.split_once(',') else {
            return Err(GraphError::MalformedInput {
                line: idx + 1,
                reason: format!("expected 'u,v', got {line:?}"),
            });
        };
        let u = parse_vertex(a, idx + 1)?;
        let v = parse_vertex(b, idx + 1)?;
        if u == v {
            return Err(GraphError::InvalidGraph(format!(
                "self-loop {u},{v} on line {}",
                idx + 1
            )));
        }
        edges.push((u, v));
    }

    let seen: HashSet<(u32, u32)> = edges.iter().copied().collect();
    let is_directed = edges.iter().any(|&(u, v)| !seen.contains(&(v, u)));

    let mut graph = Graph::new();
    for &(u, v) in &edges {
        graph.add_edge(u, v);
    }
    Ok((graph, is_directed))
}

fn parse_vertex(field: &str, line: usize) -> Result<u32, GraphError> {
    field
        .trim()
        .parse()
        .map_err(|_| GraphError::MalformedInput {
            line,
            reason: format!("vertex id must be a non-negative integer, got {:?}", field.trim()),
        })
}

/// Reads a DOT-like file.
pub fn dot_from_file(path: &str) -> Result<(Graph, bool), GraphError> {
    let content = std::fs::read_to_string(path)?;
    dot_from_str(&content)
}

/// Equivalent to [`dot_from_file`], but takes the content as input.
pub fn dot_from_str(content: &str) -> Result<(Graph, bool), GraphError> {
    let is_directed = content.contains("digraph");
    let arrow: &[u8] = if is_directed { b"->" } else { b"--" };

    let mut graph = Graph::new();
    for (u, v) in extract_edges(content, arrow)? {
        if u == v {
            return Err(GraphError::InvalidGraph(format!("self-loop {u} -- {v}")));
        }
        graph.add_edge(u, v);
    }
    Ok((graph, is_directed))
}

/// Scans for `<integer> <arrow> <integer>` with optional whitespace around
/// the arrow, skipping anything else.
fn extract_edges(content: &str, arrow: &[u8]) -> Result<Vec<(u32, u32)>, GraphError> {
    let bytes = content.as_bytes();
    let mut edges = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let (u, after_u) = scan_number(content, i)?;
        let mut j = skip_spaces(bytes, after_u);
        if bytes[j..].starts_with(arrow) {
            j = skip_spaces(bytes, j + arrow.len());
            if j < bytes.len() && bytes[j].is_ascii_digit() {
                let (v, after_v) = scan_number(content, j)?;
                edges.push((u, v));
                i = after_v;
                continue;
            }
        }
        i = after_u;
    }
    Ok(edges)
}

fn scan_number(content: &str, start: usize) -> Result<(u32, usize), GraphError> {
    let bytes = content.as_bytes();
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let value = content[start..end]
        .parse()
        .map_err(|_| GraphError::MalformedInput {
            line: 0,
            reason: format!("vertex id {} out of range", &content[start..end]),
        })?;
    Ok((value, end))
}

fn skip_spaces(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_single_orientation_is_directed() {
        let (graph, is_directed) = csv_from_str("0,1\n1,2\n").unwrap();
        assert!(is_directed);
        assert_eq!(graph.edges(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_csv_both_orientations_is_undirected() {
        let (graph, is_directed) = csv_from_str("0,1\n1,0\n2,1\n1,2\n").unwrap();
        assert!(!is_directed);
        assert_eq!(graph.edges(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_csv_tolerates_blank_lines_and_spaces() {
        let (graph, _) = csv_from_str("\n 3 , 4 \n\n4,5\n").unwrap();
        assert_eq!(graph.edges(), vec![(3, 4), (4, 5)]);
    }

    #[test]
    fn test_csv_rejects_malformed_line() {
        assert!(matches!(
            csv_from_str("0,1\nnot an edge\n"),
            Err(GraphError::MalformedInput { line: 2, .. })
        ));
        assert!(matches!(
            csv_from_str("0,1,2\n"),
            Err(GraphError::MalformedInput { line: 1, .. })
        ));
    }

    #[test]
    fn test_csv_rejects_self_loop() {
        assert!(matches!(
            csv_from_str("0,1\n3,3\n"),
            Err(GraphError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_dot_undirected() {
        let input = "graph planar {\n    0 -- 1;\n    1 -- 2;\n}\n";
        let (graph, is_directed) = dot_from_str(input).unwrap();
        assert!(!is_directed);
        assert_eq!(graph.edges(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_dot_directed() {
        let input = "digraph planar {\n    0 -> 1;\n    1 -> 0;\n    1 -> 2;\n}\n";
        let (graph, is_directed) = dot_from_str(input).unwrap();
        assert!(is_directed);
        assert_eq!(graph.edges(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_dot_ignores_decorations() {
        let input = "graph g {\n  node [shape=circle];\n  10--20 ;\n  20 --30;\n}";
        let (graph, _) = dot_from_str(input).unwrap();
        assert_eq!(graph.edges(), vec![(10, 20), (20, 30)]);
    }

    #[test]
    fn test_dot_rejects_self_loop() {
        assert!(matches!(
            dot_from_str("graph { 1 -- 1; }"),
            Err(GraphError::InvalidGraph(_))
        ));
    }
}
