//! Brute-force detection of K5 and K3,3 subgraphs.
//!
//! Independent reference oracle: a hit proves non-planarity outright, but
//! absence proves nothing, since a subdivision of either forbidden graph
//! already escapes subgraph detection. Tests use it to cross-validate the
//! left-right oracle on small instances.

use crate::graph::Graph;

fn combinations(items: &[u32], k: usize) -> Vec<Vec<u32>> {
    let mut out = Vec::new();
    let mut chosen = Vec::with_capacity(k);
    fn rec(items: &[u32], k: usize, start: usize, chosen: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
        if chosen.len() == k {
            out.push(chosen.clone());
            return;
        }
        for i in start..items.len() {
            chosen.push(items[i]);
            rec(items, k, i + 1, chosen, out);
            chosen.pop();
        }
    }
    rec(items, k, 0, &mut chosen, &mut out);
    out
}

fn is_clique(graph: &Graph, nodes: &[u32]) -> bool {
    for (i, &u) in nodes.iter().enumerate() {
        for &v in &nodes[i + 1..] {
            if !graph.has_edge(u, v) {
                return false;
            }
        }
    }
    true
}

fn is_biclique(graph: &Graph, a: &[u32], b: &[u32]) -> bool {
    a.iter().all(|&u| b.iter().all(|&v| graph.has_edge(u, v)))
}

/// True if any 5 vertices induce a complete graph.
pub fn contains_k5(graph: &Graph) -> bool {
    let vertices = graph.vertices();
    if vertices.len() < 5 {
        return false;
    }
    combinations(&vertices, 5)
        .iter()
        .any(|nodes| is_clique(graph, nodes))
}

/// True if any 6 vertices split into two triples forming a complete
/// bipartite graph.
pub fn contains_k33(graph: &Graph) -> bool {
    let vertices = graph.vertices();
    if vertices.len() < 6 {
        return false;
    }
    for nodes in combinations(&vertices, 6) {
        for a in combinations(&nodes, 3) {
            let b: Vec<u32> = nodes.iter().copied().filter(|v| !a.contains(v)).collect();
            if is_biclique(graph, &a, &b) {
                return true;
            }
        }
    }
    false
}

/// True if the graph holds either forbidden subgraph.
pub fn has_kuratowski_subgraph(graph: &Graph) -> bool {
    contains_k5(graph) || contains_k33(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planarity::is_planar;
    use crate::testing::graph_enumerator::GraphEnumeratorState;
    use crate::testing::random_graphs::random_graph;

    fn complete(n: u32) -> Graph {
        let mut g = Graph::new();
        for u in 0..n {
            for v in (u + 1)..n {
                g.add_edge(u, v);
            }
        }
        g
    }

    fn k33() -> Graph {
        let mut g = Graph::new();
        for u in 0..3 {
            for v in 3..6 {
                g.add_edge(u, v);
            }
        }
        g
    }

    #[test]
    fn test_detects_forbidden_subgraphs() {
        assert!(contains_k5(&complete(5)));
        assert!(contains_k5(&complete(7)));
        assert!(contains_k33(&k33()));
        assert!(contains_k33(&complete(6)));
        assert!(has_kuratowski_subgraph(&complete(5)));
    }

    #[test]
    fn test_near_misses_are_not_detected() {
        let mut g = complete(5);
        g.remove_edge(0, 1);
        assert!(!contains_k5(&g));
        let mut h = k33();
        h.remove_edge(0, 3);
        assert!(!contains_k33(&h));
    }

    #[test]
    fn test_subdivision_escapes_subgraph_detection() {
        // the known blind spot: still non-planar, but no K5 subgraph
        let mut g = complete(5);
        g.remove_edge(0, 1);
        g.add_edge(0, 5);
        g.add_edge(5, 1);
        assert!(!has_kuratowski_subgraph(&g));
        assert!(!is_planar(&g));
    }

    #[test]
    fn test_agrees_with_oracle_on_five_vertices() {
        // on 5 vertices the only non-planar graph is K5 itself, so the
        // subgraph check is exact there
        let enumerator = GraphEnumeratorState::new(5);
        for g in enumerator {
            assert_eq!(is_planar(&g), !has_kuratowski_subgraph(&g));
        }
    }

    #[test]
    fn test_hit_implies_non_planar_on_random_graphs() {
        for seed in 0..200 {
            let g = random_graph(9, 16, seed);
            if has_kuratowski_subgraph(&g) {
                assert!(!is_planar(&g), "seed {seed}");
            }
        }
    }
}
