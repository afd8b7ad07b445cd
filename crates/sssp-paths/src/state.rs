use sssp_core::Weight;

use crate::path::{self, Predecessors};

/// Distance and predecessor arrays produced by a single-source search.
///
/// `dist[v]` is the best known cost from the source ([`Weight::INFINITY`]
/// when `v` was never reached) and `parent[v]` the vertex `v` was last
/// relaxed from. A fresh state is built for every search and handed to the
/// caller; nothing is shared between calls.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchState<W> {
    source: usize,
    dist: Vec<W>,
    parent: Vec<Option<usize>>,
}

impl<W: Weight> SearchState<W> {
    /// Fresh state over `n` vertices with `dist[source] = 0`.
    ///
    /// # Panics
    ///
    /// Panics if `source >= n`.
    pub(crate) fn new(n: usize, source: usize) -> Self {
        assert!(source < n, "source {source} out of range for {n} vertices");
        let mut dist = vec![W::INFINITY; n];
        dist[source] = W::ZERO;
        Self {
            source,
            dist,
            parent: vec![None; n],
        }
    }

    /// Try to improve `dist[v]` through the edge `u -> v` of weight `w`.
    ///
    /// Returns the new distance if it is strictly better. `dist[u]` must be
    /// finite. A sum that saturates at [`Weight::INFINITY`] never improves.
    #[inline]
    pub(crate) fn relax(&mut self, u: usize, v: usize, w: W) -> Option<W> {
        let candidate = self.dist[u].saturating_add(w);
        if candidate < self.dist[v] {
            self.dist[v] = candidate;
            self.parent[v] = Some(u);
            Some(candidate)
        } else {
            None
        }
    }

    /// The source vertex.
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Whether the state covers no vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// The raw distance array. Unreached vertices hold [`Weight::INFINITY`].
    #[inline]
    pub fn dist(&self) -> &[W] {
        &self.dist
    }

    /// The raw predecessor array.
    #[inline]
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parent
    }

    /// Distance to `v`, or `None` if `v` was not reached.
    #[inline]
    pub fn distance(&self, v: usize) -> Option<W> {
        self.dist.get(v).copied().filter(|d| !d.is_infinite())
    }

    /// Whether `v` was reached from the source.
    #[inline]
    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    /// Shortest path `source, ..., target`, or `None` if unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        path::reconstruct_path(self, self.source, target)
    }

    /// Paths to every vertex, indexed by target.
    pub fn all_paths(&self) -> Vec<Option<Vec<usize>>> {
        (0..self.len()).map(|v| self.path_to(v)).collect()
    }
}

impl<W> Predecessors for SearchState<W> {
    type Node = usize;

    #[inline]
    fn predecessor(&self, node: usize) -> Option<usize> {
        self.parent.as_slice().predecessor(node)
    }

    #[inline]
    fn in_bounds(&self, node: usize) -> bool {
        node < self.parent.len()
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.parent.len()
    }
}
