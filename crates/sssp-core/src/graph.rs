//! Weighted directed graphs over dense vertex indices `0..n`.
//!
//! Two representations are provided:
//!
//! - [`Graph`]: an adjacency list, for searches that expand one vertex at a
//!   time (Dijkstra, A*).
//! - [`EdgeList`]: a flat list of edges plus a vertex count, for searches that
//!   only sweep over every edge (Bellman-Ford).
//!
//! Vertex indices are a precondition, not a checked input: adding an edge
//! whose endpoint is `>= n` panics.

/// A directed edge `from -> to` with a weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    /// Create a new edge.
    #[inline]
    pub const fn new(from: usize, to: usize, weight: W) -> Self {
        Self { from, to, weight }
    }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((from, to, weight): (usize, usize, W)) -> Self {
        Self { from, to, weight }
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Adjacency-list graph: `out_edges(u)` lists every edge leaving `u`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph<W> {
    adj: Vec<Vec<Edge<W>>>,
    edge_count: usize,
}

impl<W: Copy> Graph<W> {
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            edge_count: 0,
        }
    }

    /// Create a graph with `n` vertices from an iterator of edges.
    pub fn from_edges<I, E>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
    {
        let mut g = Self::new(n);
        for e in edges {
            let e = e.into();
            g.add_edge(e.from, e.to, e.weight);
        }
        g
    }

    /// Add a directed edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of the graph.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) {
        let n = self.adj.len();
        assert!(
            from < n && to < n,
            "edge {from} -> {to} out of range for {n} vertices"
        );
        self.adj[from].push(Edge::new(from, to, weight));
        self.edge_count += 1;
    }

    /// Add the two directed edges `a -> b` and `b -> a` with the same weight.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: W) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Number of vertices.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges leaving `u`, in insertion order.
    #[inline]
    pub fn out_edges(&self, u: usize) -> &[Edge<W>] {
        &self.adj[u]
    }

    /// Iterate over every edge, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adj.iter().flatten()
    }

    /// Flatten into an [`EdgeList`] with the same vertex count.
    pub fn to_edge_list(&self) -> EdgeList<W> {
        EdgeList {
            node_count: self.node_count(),
            edges: self.edges().copied().collect(),
        }
    }
}

impl<W: Copy> From<EdgeList<W>> for Graph<W> {
    fn from(list: EdgeList<W>) -> Self {
        Graph::from_edges(list.node_count, list.edges)
    }
}

// ---------------------------------------------------------------------------
// EdgeList
// ---------------------------------------------------------------------------

/// A vertex count plus a flat list of directed edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeList<W> {
    node_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W: Copy> EdgeList<W> {
    /// Create an empty edge list over `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            node_count: n,
            edges: Vec::new(),
        }
    }

    /// Create an edge list over `n` vertices.
    ///
    /// # Panics
    ///
    /// Panics if an edge endpoint is `>= n`.
    pub fn from_edges<I, E>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
    {
        let mut list = Self::new(n);
        for e in edges {
            let e = e.into();
            list.push(e.from, e.to, e.weight);
        }
        list
    }

    /// Append a directed edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is `>= node_count()`.
    pub fn push(&mut self, from: usize, to: usize, weight: W) {
        assert!(
            from < self.node_count && to < self.node_count,
            "edge {from} -> {to} out of range for {} vertices",
            self.node_count
        );
        self.edges.push(Edge::new(from, to, weight));
    }

    /// Number of vertices.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// All edges, in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether there are no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over the edges.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge<W>> {
        self.edges.iter()
    }
}

impl<'a, W> IntoIterator for &'a EdgeList<W> {
    type Item = &'a Edge<W>;
    type IntoIter = std::slice::Iter<'a, Edge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn graph_round_trip() {
        let g = Graph::from_edges(3, [(0, 1, 2.0), (1, 2, 0.5)]);
        let json = serde_json::to_string(&g).unwrap();
        let back: Graph<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
