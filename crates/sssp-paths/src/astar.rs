use log::{debug, trace};
use sssp_core::Weight;

use crate::frontier::Frontier;
use crate::state::SearchState;
use crate::traits::{Adjacency, Heuristic};

/// Outcome of an [`astar`] search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstarResult<W> {
    /// Cost of the path found, or [`Weight::INFINITY`] if none.
    pub distance: W,
    /// The path `source, ..., goal`; empty if none.
    pub path: Vec<usize>,
    /// Whether the goal was reached.
    pub found: bool,
}

impl<W> AstarResult<W> {
    /// The path, if the goal was reached.
    pub fn into_path(self) -> Option<Vec<usize>> {
        self.found.then_some(self.path)
    }
}

/// Compute the shortest path from `source` to `goal` using A*.
///
/// The frontier is ordered by `g(v) + h(v)` and the search stops as soon as
/// `goal` is popped with a live entry. The distance is optimal when edge
/// weights are non-negative and `heuristic` is admissible and consistent;
/// otherwise it is only an upper bound.
///
/// # Panics
///
/// Panics if `source` or `goal` is not a vertex of `graph`.
pub fn astar<G, H>(graph: &G, source: usize, goal: usize, heuristic: &H) -> AstarResult<G::Weight>
where
    G: Adjacency,
    H: Heuristic<G::Weight> + ?Sized,
{
    let n = graph.node_count();
    assert!(goal < n, "goal {goal} out of range for {n} vertices");

    let mut state: SearchState<G::Weight> = SearchState::new(n, source);
    let mut closed = vec![false; n];
    let mut open = Frontier::new();
    open.push(source, heuristic.estimate(source));

    let mut nbuf = Vec::new();
    let mut expanded = 0usize;

    let found = 'search: loop {
        // An entry is stale once its f exceeds the vertex's current g + h.
        let Some((u, f)) =
            open.pop_live(|v, f| !(f > state.dist()[v].saturating_add(heuristic.estimate(v))))
        else {
            break 'search false;
        };

        if u == goal {
            break 'search true;
        }
        if closed[u] {
            continue;
        }
        closed[u] = true;
        expanded += 1;
        trace!("astar: expand {u} at f = {f:?}");

        nbuf.clear();
        graph.successors(u, &mut nbuf);
        for &(v, w) in &nbuf {
            if closed[v] {
                continue;
            }
            if let Some(gv) = state.relax(u, v, w) {
                open.push(v, gv.saturating_add(heuristic.estimate(v)));
            }
        }
    };

    debug!(
        "astar {source} -> {goal}: found = {found}, expanded {expanded}, {} stale pops",
        open.stale_pops()
    );

    if !found {
        return AstarResult {
            distance: <G::Weight as Weight>::INFINITY,
            path: Vec::new(),
            found: false,
        };
    }

    AstarResult {
        distance: state.dist()[goal],
        path: state.path_to(goal).unwrap_or_default(),
        found: true,
    }
}
