use sssp_core::{Graph, Weight};

/// Minimal search interface: dense vertices and weighted successors.
pub trait Adjacency {
    type Weight: Weight;

    /// Number of vertices; valid indices are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Append `(successor, edge weight)` pairs of `u` into `buf`. The caller
    /// clears `buf` before calling.
    fn successors(&self, u: usize, buf: &mut Vec<(usize, Self::Weight)>);
}

impl<W: Weight> Adjacency for Graph<W> {
    type Weight = W;

    #[inline]
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    #[inline]
    fn successors(&self, u: usize, buf: &mut Vec<(usize, W)>) {
        buf.extend(self.out_edges(u).iter().map(|e| (e.to, e.weight)));
    }
}

/// Estimate of the remaining cost from a vertex to the goal.
///
/// Must be admissible (never overestimate) and consistent
/// (`h(u) <= w(u, v) + h(v)` for every edge) for A* to return optimal
/// distances. Neither property is checked.
pub trait Heuristic<W> {
    fn estimate(&self, v: usize) -> W;
}

impl<W: Weight> Heuristic<W> for [W] {
    #[inline]
    fn estimate(&self, v: usize) -> W {
        self[v]
    }
}

impl<W: Weight> Heuristic<W> for Vec<W> {
    #[inline]
    fn estimate(&self, v: usize) -> W {
        self[v]
    }
}

/// The zero heuristic. A* with it expands vertices exactly like Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<W: Weight> Heuristic<W> for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _v: usize) -> W {
        W::ZERO
    }
}

/// Adapter turning a closure `Fn(usize) -> W` into a [`Heuristic`].
#[derive(Debug, Clone, Copy)]
pub struct HeuristicFn<F>(pub F);

impl<W, F: Fn(usize) -> W> Heuristic<W> for HeuristicFn<F> {
    #[inline]
    fn estimate(&self, v: usize) -> W {
        (self.0)(v)
    }
}
