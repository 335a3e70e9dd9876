use hashbrown::{HashMap, HashSet};
use radsort::sort_by_key;

use crate::types::Edge;

/// Undirected graph stored as a vertex-to-neighbor-set map.
///
/// Adjacency is kept symmetric at all times and self-loops are not
/// representable through the public interface. Vertex ids are arbitrary
/// integers; membership, insertion and removal of a neighbor are all
/// average O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adj: HashMap<u32, HashSet<u32>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph with the given vertices and no edges.
    pub fn with_vertices<I: IntoIterator<Item = u32>>(vertices: I) -> Self {
        let mut g = Self::new();
        for v in vertices {
            g.add_vertex(v);
        }
        g
    }

    /// Builds a graph from an edge list, creating endpoints as needed.
    pub fn from_edges<I: IntoIterator<Item = Edge>>(edges: I) -> Self {
        let mut g = Self::new();
        for (u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    pub fn add_vertex(&mut self, v: u32) {
        self.adj.entry(v).or_default();
    }

    /// Inserts the edge in both directions. Idempotent.
    pub fn add_edge(&mut self, u: u32, v: u32) {
        debug_assert_ne!(u, v, "self-loops are not supported");
        self.adj.entry(u).or_default().insert(v);
        self.adj.entry(v).or_default().insert(u);
    }

    /// Removes the edge in both directions. The edge must be present.
    pub fn remove_edge(&mut self, u: u32, v: u32) {
        let fwd = self.adj.get_mut(&u).is_some_and(|n| n.remove(&v));
        let bwd = self.adj.get_mut(&v).is_some_and(|n| n.remove(&u));
        debug_assert!(fwd && bwd, "removing absent edge ({u}, {v})");
    }

    pub fn has_edge(&self, u: u32, v: u32) -> bool {
        self.adj.get(&u).is_some_and(|n| n.contains(&v))
    }

    pub fn neighbors(&self, v: u32) -> Option<&HashSet<u32>> {
        self.adj.get(&v)
    }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> Vec<u32> {
        let mut vs: Vec<u32> = self.adj.keys().copied().collect();
        radsort::sort(&mut vs);
        vs
    }

    /// All edges as canonical `u < v` pairs, sorted ascending by `(u, v)`.
    ///
    /// The enumeration is stable for identical graph content; the search
    /// relies on it to fix its branch order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut es: Vec<Edge> = Vec::with_capacity(self.edge_count());
        for (&u, nbrs) in &self.adj {
            for &v in nbrs {
                if u < v {
                    es.push((u, v));
                }
            }
        }
        sort_by_key(&mut es, |&(u, v)| ((u as u64) << 32) | v as u64);
        es
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(HashSet::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub fn contains_vertex(&self, v: u32) -> bool {
        self.adj.contains_key(&v)
    }
}

impl FromIterator<Edge> for Graph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
