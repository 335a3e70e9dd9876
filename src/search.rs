//! Exhaustive branch-and-bound search for a maximum planar subgraph.
//!
//! The underlying decision problem is NP-hard; this search is exact and
//! meant for small and moderate instances. Viability comes from the oracle
//! being cheap and from the single pruning rule below.

use tracing::debug;

use crate::graph::Graph;
use crate::planarity::is_planar;
use crate::types::Edge;

/// Returns a new graph over the same vertex set containing a
/// maximum-cardinality planar edge subset of `graph`.
///
/// Branch order is fixed by [`Graph::edges`], so the result is
/// deterministic for identical input content. Among equal-size maxima the
/// first one found in that order wins; no further canonical-result
/// guarantee is made.
pub fn maximum_planar_subgraph(graph: &Graph) -> Graph {
    let edges = graph.edges();
    let mut work = Graph::with_vertices(graph.vertices());
    let mut current: Vec<Edge> = Vec::new();
    let mut best: Vec<Edge> = Vec::new();
    debug!(
        vertices = graph.vertex_count(),
        edges = edges.len(),
        "searching for maximum planar subgraph"
    );
    explore(&mut work, &edges, 0, &mut current, &mut best);
    debug!(kept = best.len(), "search finished");

    let mut result = Graph::with_vertices(graph.vertices());
    for &(u, v) in &best {
        result.add_edge(u, v);
    }
    result
}

/// Decides edge `index`: try it in the working graph, keep it if the graph
/// stays planar, and always explore leaving it out. Every tentative
/// addition is undone on every exit path.
fn explore(
    work: &mut Graph,
    all: &[Edge],
    index: usize,
    current: &mut Vec<Edge>,
    best: &mut Vec<Edge>,
) {
    let remaining = all.len() - index;
    if current.len() + remaining <= best.len() {
        // cannot beat the incumbent even if every remaining edge fits
        return;
    }
    if index == all.len() {
        if current.len() > best.len() {
            best.clone_from(current);
        }
        return;
    }

    let (u, v) = all[index];
    work.add_edge(u, v);
    if is_planar(work) {
        current.push((u, v));
        explore(work, all, index + 1, current, best);
        current.pop();
    }
    work.remove_edge(u, v);

    explore(work, all, index + 1, current, best);
}
