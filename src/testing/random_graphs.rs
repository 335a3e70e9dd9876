use crate::graph::Graph;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded random connected graph: a random spanning tree on `n` vertices
/// plus extra random edges up to roughly `m` total. Deterministic per seed.
#[allow(dead_code)]
pub fn random_graph(n: u32, m: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_vertices(0..n);

    for i in 1..n {
        let j = rng.random_range(0..i);
        graph.add_edge(i, j);
    }

    for _ in (n as usize - 1)..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        if s != t {
            graph.add_edge(s, t);
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_graph_is_deterministic_per_seed() {
        let a = random_graph(8, 14, 7);
        let b = random_graph(8, 14, 7);
        assert_eq!(a.edges(), b.edges());
        assert_eq!(a.vertex_count(), 8);
        assert!(a.edge_count() >= 7);
    }
}
