use log::{debug, warn};
use sssp_core::{EdgeList, Weight};

use crate::negative_cycle;
use crate::state::SearchState;

/// Outcome of a [`bellman_ford`] run.
///
/// When [`has_negative_cycle`](Self::has_negative_cycle) is `true`, the
/// distances of [affected](Self::is_affected) vertices are the last values
/// written before the cycle was detected. They are neither shortest
/// distances (those are unbounded) nor a lower bound of anything, and path
/// reconstruction to those vertices is refused.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BellmanFordResult<W> {
    state: SearchState<W>,
    passes: usize,
    has_negative_cycle: bool,
    affected: Vec<bool>,
    cycle: Option<Vec<usize>>,
}

impl<W: Weight> BellmanFordResult<W> {
    /// The distance/predecessor state.
    #[inline]
    pub fn state(&self) -> &SearchState<W> {
        &self.state
    }

    /// The raw distance array.
    #[inline]
    pub fn dist(&self) -> &[W] {
        self.state.dist()
    }

    /// The raw predecessor array.
    #[inline]
    pub fn parents(&self) -> &[Option<usize>] {
        self.state.parents()
    }

    /// Reported distance to `v`, or `None` if unreached. See the type-level
    /// note for vertices affected by a negative cycle.
    #[inline]
    pub fn distance(&self, v: usize) -> Option<W> {
        self.state.distance(v)
    }

    /// Whether a negative cycle is reachable from the source.
    #[inline]
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    /// Number of relaxation passes actually run (at most `n - 1`).
    #[inline]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Whether `v` is downstream of a reachable negative cycle.
    #[inline]
    pub fn is_affected(&self, v: usize) -> bool {
        self.affected.get(v).copied().unwrap_or(false)
    }

    /// One reachable negative cycle in forward edge order, if any.
    #[inline]
    pub fn negative_cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }

    /// Shortest path to `target`, or `None` if it is unreachable or affected
    /// by a negative cycle.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if self.is_affected(target) {
            return None;
        }
        self.state.path_to(target)
    }

    /// Paths to every vertex, indexed by target.
    pub fn all_paths(&self) -> Vec<Option<Vec<usize>>> {
        (0..self.state.len()).map(|v| self.path_to(v)).collect()
    }
}

/// Single-source shortest paths allowing negative edge weights.
///
/// Performs up to `n - 1` passes over every edge, stopping early after a
/// pass that relaxes nothing. A final read-only pass then reports whether a
/// negative cycle is reachable from `source`.
///
/// # Panics
///
/// Panics if `source >= edges.node_count()`.
pub fn bellman_ford<W: Weight>(edges: &EdgeList<W>, source: usize) -> BellmanFordResult<W> {
    let n = edges.node_count();
    let mut state: SearchState<W> = SearchState::new(n, source);

    let mut passes = 0;
    for _ in 0..n.saturating_sub(1) {
        passes += 1;
        let mut relaxed = false;
        for e in edges {
            // Only vertices already reached can extend a path.
            if state.dist()[e.from].is_infinite() {
                continue;
            }
            if state.relax(e.from, e.to, e.weight).is_some() {
                relaxed = true;
            }
        }
        if !relaxed {
            break;
        }
    }

    let relaxable = negative_cycle::relaxable_edge(edges.edges(), state.dist());
    let (affected, cycle) = match relaxable {
        Some(e) => {
            warn!(
                "bellman-ford from {source}: negative cycle reachable (edge {} -> {} still relaxes)",
                e.from, e.to
            );
            (
                negative_cycle::affected_vertices(edges.edges(), state.dist()),
                negative_cycle::find_cycle(edges.edges(), state.dist(), state.parents()),
            )
        }
        None => (Vec::new(), None),
    };

    debug!(
        "bellman-ford from {source}: {passes} passes over {} edges, negative cycle = {}",
        edges.len(),
        relaxable.is_some()
    );

    BellmanFordResult {
        state,
        passes,
        has_negative_cycle: relaxable.is_some(),
        affected,
        cycle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra;
    use sssp_core::Graph;

    // Five vertices, negative edges (-4, -3, -2) but no negative cycle.
    fn classic() -> EdgeList<i64> {
        EdgeList::from_edges(
            5,
            [
                (0, 1, 6),
                (0, 2, 7),
                (1, 2, 8),
                (1, 3, 5),
                (1, 4, -4),
                (2, 3, -3),
                (2, 4, 9),
                (3, 1, -2),
                (4, 0, 2),
                (4, 3, 7),
            ],
        )
    }

    #[test]
    fn classic_distances_without_cycle() {
        let r = bellman_ford(&classic(), 0);
        assert!(!r.has_negative_cycle());
        assert_eq!(r.dist(), &[0, 2, 7, 4, -2]);
        assert_eq!(r.path_to(4), Some(vec![0, 2, 3, 1, 4]));
        assert_eq!(r.path_to(0), Some(vec![0]));
        assert!(r.passes() <= 4);
        assert_eq!(r.negative_cycle(), None);
        assert!((0..5).all(|v| !r.is_affected(v)));
    }

    #[test]
    fn matches_dijkstra_on_non_negative_weights() {
        let list = EdgeList::from_edges(
            5,
            [(0, 1, 2), (0, 2, 5), (1, 2, 1), (1, 3, 2), (2, 3, 3), (3, 4, 1)],
        );
        let bf = bellman_ford(&list, 0);
        let dj = dijkstra(&Graph::from(list.clone()), 0);
        assert_eq!(bf.dist(), dj.dist());
        assert!(!bf.has_negative_cycle());
    }

    #[test]
    fn early_exit_after_quiet_pass() {
        // Edges listed in path order converge in one pass; the second pass
        // relaxes nothing and ends the loop.
        let list = EdgeList::from_edges(6, (0..5usize).map(|v| (v, v + 1, 1i64)));
        let r = bellman_ford(&list, 0);
        assert_eq!(r.passes(), 2);
        assert_eq!(r.dist(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn reachable_negative_cycle_is_flagged() {
        let mut list = classic();
        // 3 -> 1 -> 3 now weighs -2 + -1 = -3.
        list.push(1, 3, -1);
        let r = bellman_ford(&list, 0);
        assert!(r.has_negative_cycle());
        assert!(r.is_affected(1));
        assert!(r.is_affected(3));
        assert_eq!(r.path_to(1), None);

        let cycle = r.negative_cycle().unwrap();
        assert!(!cycle.is_empty());
        assert!(cycle.contains(&1) || cycle.contains(&3));
    }

    #[test]
    fn removing_the_cycle_clears_the_flag() {
        let mut with_cycle = EdgeList::new(3);
        with_cycle.push(0, 1, 1i64);
        with_cycle.push(1, 2, -3);
        with_cycle.push(2, 1, 1);
        assert!(bellman_ford(&with_cycle, 0).has_negative_cycle());

        let mut without = EdgeList::new(3);
        without.push(0, 1, 1i64);
        without.push(1, 2, -3);
        without.push(2, 1, 3);
        let r = bellman_ford(&without, 0);
        assert!(!r.has_negative_cycle());
        assert_eq!(r.dist(), &[0, 1, -2]);
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let list = EdgeList::from_edges(4, [(0, 1, 1i64), (2, 3, -5), (3, 2, 1)]);
        let r = bellman_ford(&list, 0);
        assert!(!r.has_negative_cycle());
        assert_eq!(r.distance(2), None);
        assert_eq!(r.path_to(3), None);
        assert_eq!(r.path_to(1), Some(vec![0, 1]));
    }

    #[test]
    fn vertices_upstream_of_cycle_keep_paths() {
        // 0 -> 1 -> 2 <-> 3 (negative), 0 -> 4.
        let list = EdgeList::from_edges(
            5,
            [(0, 1, 1i64), (1, 2, 1), (2, 3, -2), (3, 2, -2), (0, 4, 3)],
        );
        let r = bellman_ford(&list, 0);
        assert!(r.has_negative_cycle());
        assert_eq!(r.path_to(1), Some(vec![0, 1]));
        assert_eq!(r.path_to(4), Some(vec![0, 4]));
        assert_eq!(r.path_to(2), None);
        assert_eq!(r.path_to(3), None);
        assert_eq!(r.all_paths()[0], Some(vec![0]));
    }

    #[test]
    fn single_vertex_negative_self_loop() {
        let list = EdgeList::from_edges(1, [(0, 0, -1i64)]);
        let r = bellman_ford(&list, 0);
        assert_eq!(r.passes(), 0);
        assert!(r.has_negative_cycle());
        assert_eq!(r.negative_cycle(), Some(&[0][..]));
        // The reported distance is the untouched initial value.
        assert_eq!(r.distance(0), Some(0));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let list = classic();
        assert_eq!(bellman_ford(&list, 0), bellman_ford(&list, 0));
    }

    #[test]
    fn overflowing_path_cost_saturates() {
        let list = EdgeList::from_edges(
            3,
            [
                (0, 1, 2_000_000_000_000_000_000i64),
                (1, 2, 9_000_000_000_000_000_000),
            ],
        );
        let r = bellman_ford(&list, 0);
        assert!(!r.has_negative_cycle());
        assert_eq!(r.distance(1), Some(2_000_000_000_000_000_000));
        assert_eq!(r.distance(2), None);
    }
}
