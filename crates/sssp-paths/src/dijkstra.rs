use log::{debug, trace};

use crate::frontier::Frontier;
use crate::state::SearchState;
use crate::traits::Adjacency;

/// Single-source shortest paths for non-negative edge weights.
///
/// Runs until the frontier is exhausted, so the returned state holds the
/// final distance and predecessor of every vertex reachable from `source`
/// and supports path queries to any of them.
///
/// Edge weights reachable from `source` must be non-negative. A negative
/// weight breaks the settled-vertex invariant and the distances are then
/// unspecified; it is not detected.
///
/// # Panics
///
/// Panics if `source >= graph.node_count()`.
pub fn dijkstra<G: Adjacency>(graph: &G, source: usize) -> SearchState<G::Weight> {
    let mut state: SearchState<G::Weight> = SearchState::new(graph.node_count(), source);
    let mut open = Frontier::new();
    open.push(source, state.dist()[source]);

    let mut nbuf = Vec::new();
    let mut settled = 0usize;

    // An entry is live only while its key still equals the vertex's
    // distance; anything else was superseded by a later push.
    while let Some((u, du)) = open.pop_live(|v, key| key == state.dist()[v]) {
        settled += 1;
        trace!("dijkstra: settle {u} at {du:?}");

        nbuf.clear();
        graph.successors(u, &mut nbuf);
        for &(v, w) in &nbuf {
            if let Some(dv) = state.relax(u, v, w) {
                open.push(v, dv);
            }
        }
    }

    debug!(
        "dijkstra from {source}: settled {settled} of {} vertices, {} stale pops",
        state.len(),
        open.stale_pops()
    );
    state
}
