use crate::graph::Graph;

/// Enumerates every labeled graph on `n` vertices by interpreting a bit
/// mask over the `n * (n - 1) / 2` possible edges.
#[allow(dead_code)]
pub struct GraphEnumeratorState {
    pub n: u32,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    #[allow(dead_code)]
    pub fn new(n: u32) -> Self {
        GraphEnumeratorState {
            n,
            mask: 0,
            last_mask: 1 << (n * (n - 1) / 2),
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = Graph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = Graph::with_vertices(0..self.n);
        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_edge(i, j);
                }
                check += 1;
            }
        }

        self.mask = self.mask.wrapping_add(1);
        Some(graph)
    }
}
