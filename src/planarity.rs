//! Left-right planarity oracle.
//!
//! Reference:
//! [The Left-Right Planarity Test](https://acm.math.spbu.ru/~sk1/download/papers/planar//brandes2010-planarity.pdf)

use hashbrown::HashMap;

use crate::fringe::Fringe;
use crate::graph::Graph;

const UNVISITED: usize = usize::MAX;

/// Checks whether a (possibly disconnected) graph is planar.
///
/// Fails closed: any unresolved left-right constraint counts as non-planar.
/// Small graphs are resolved without traversal: fewer than 5 vertices or
/// fewer than 9 edges is always planar, more than `3|V| - 6` edges never is.
pub fn is_planar(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    let m = graph.edge_count();
    if n < 5 || m < 9 {
        return true;
    }
    if m > 3 * n - 6 {
        return false;
    }
    tracing::trace!(vertices = n, edges = m, "running left-right test");
    lr_test(graph)
}

fn lr_test(graph: &Graph) -> bool {
    let vertices = graph.vertices();
    let mut height: HashMap<u32, usize> =
        vertices.iter().map(|&v| (v, UNVISITED)).collect();
    for &root in &vertices {
        if height[&root] != UNVISITED {
            continue;
        }
        height.insert(root, 0);
        if !test_component(graph, root, &mut height) {
            return false;
        }
    }
    true
}

/// One DFS frame: the vertex, its sorted neighbor list with a cursor, and
/// the fringes collected from its back edges and finished children.
struct Frame {
    vertex: u32,
    parent: Option<u32>,
    neighbors: Vec<u32>,
    next: usize,
    fringes: Vec<Fringe>,
}

impl Frame {
    fn new(graph: &Graph, vertex: u32, parent: Option<u32>) -> Self {
        let mut neighbors: Vec<u32> = graph
            .neighbors(vertex)
            .map(|n| n.iter().copied().collect())
            .unwrap_or_default();
        radsort::sort(&mut neighbors);
        Frame {
            vertex,
            parent,
            neighbors,
            next: 0,
            fringes: Vec::new(),
        }
    }
}

/// Explicit-stack DFS over one connected component. Recursion depth would
/// equal the component's diameter, so the frames live on the heap instead.
fn test_component(graph: &Graph, root: u32, height: &mut HashMap<u32, usize>) -> bool {
    let mut stack = vec![Frame::new(graph, root, None)];
    while let Some(top) = stack.last_mut() {
        let v = top.vertex;
        let h = height[&v];
        let mut child = None;
        while top.next < top.neighbors.len() {
            let w = top.neighbors[top.next];
            top.next += 1;
            if top.parent == Some(w) {
                continue;
            }
            let hw = height[&w];
            if hw == UNVISITED {
                child = Some(w);
                break;
            }
            if hw < h {
                top.fringes.push(Fringe::single(hw));
            }
        }
        if let Some(w) = child {
            height.insert(w, h + 1);
            stack.push(Frame::new(graph, w, Some(v)));
            continue;
        }

        let frame = stack.pop().expect("loop guard keeps the stack non-empty");
        let mut fringes = frame.fringes;
        fringes.sort_unstable_by_key(|f| (f.low(), f.high(), f.size()));
        let mut iter = fringes.into_iter();
        let Some(mut merged) = iter.next() else {
            continue;
        };
        for other in iter {
            if merged.merge(other).is_err() {
                return false;
            }
        }
        if let Some(parent) = stack.last_mut() {
            merged.prune(height[&parent.vertex]);
            if !merged.is_empty() {
                parent.fringes.push(merged);
            }
        }
        // at a component root the remaining constraints are all satisfied
    }
    true
}
