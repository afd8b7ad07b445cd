//! Negative-cycle detection over a converged Bellman-Ford state.
//!
//! After `n - 1` relaxation passes every shortest path that does not touch a
//! negative cycle has been found. Any edge that can *still* be relaxed proves
//! that a negative cycle is reachable from the source. None of the functions
//! here modify the distances they are given.

use sssp_core::{Edge, Weight};

#[inline]
fn can_relax<W: Weight>(e: &Edge<W>, dist: &[W]) -> bool {
    let du = dist[e.from];
    !du.is_infinite() && du.saturating_add(e.weight) < dist[e.to]
}

/// The first edge, in list order, that can still be relaxed.
pub fn relaxable_edge<W: Weight>(edges: &[Edge<W>], dist: &[W]) -> Option<Edge<W>> {
    edges.iter().find(|e| can_relax(e, dist)).copied()
}

/// Mark every vertex whose distance is undefined because of a negative
/// cycle: the targets of still-relaxable edges and everything reachable
/// from them.
///
/// Every reachable negative cycle contains at least one relaxable edge, so
/// this covers each vertex downstream of any such cycle. Unmarked reached
/// vertices hold true shortest distances.
pub fn affected_vertices<W: Weight>(edges: &[Edge<W>], dist: &[W]) -> Vec<bool> {
    let n = dist.len();
    let mut affected = vec![false; n];
    let mut stack: Vec<usize> = edges
        .iter()
        .filter(|e| can_relax(e, dist))
        .map(|e| e.to)
        .collect();
    if stack.is_empty() {
        return affected;
    }

    let mut out: Vec<Vec<usize>> = vec![Vec::new(); n];
    for e in edges {
        out[e.from].push(e.to);
    }

    // Iterative DFS.
    while let Some(u) = stack.pop() {
        if affected[u] {
            continue;
        }
        affected[u] = true;
        stack.extend(out[u].iter().copied().filter(|&v| !affected[v]));
    }
    affected
}

/// Extract one negative cycle, in forward edge order.
///
/// Runs one more relaxation pass on a copy of `dist`/`parent`, then walks
/// `n` predecessor links back from the last vertex it relaxed; that walk is
/// guaranteed to end on a cycle of the predecessor graph, which is returned
/// so that each element has an edge to the next and the last has an edge to
/// the first. Returns `None` if the pass relaxes nothing.
pub fn find_cycle<W: Weight>(
    edges: &[Edge<W>],
    dist: &[W],
    parent: &[Option<usize>],
) -> Option<Vec<usize>> {
    let n = dist.len();
    let mut dist = dist.to_vec();
    let mut parent = parent.to_vec();

    let mut last = None;
    for e in edges {
        if can_relax(e, &dist) {
            dist[e.to] = dist[e.from].saturating_add(e.weight);
            parent[e.to] = Some(e.from);
            last = Some(e.to);
        }
    }

    let mut v = last?;
    for _ in 0..n {
        v = parent[v]?;
    }

    let start = v;
    let mut cycle = vec![start];
    let mut cur = parent[start]?;
    while cur != start {
        cycle.push(cur);
        if cycle.len() > n {
            return None;
        }
        cur = parent[cur]?;
    }
    cycle.reverse();
    Some(cycle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(list: &[(usize, usize, i64)]) -> Vec<Edge<i64>> {
        list.iter().map(|&e| Edge::from(e)).collect()
    }

    #[test]
    fn converged_state_has_no_relaxable_edge() {
        let es = edges(&[(0, 1, 4), (1, 2, -2)]);
        let dist = [0, 4, 2];
        assert_eq!(relaxable_edge(&es, &dist), None);
        assert_eq!(affected_vertices(&es, &dist), vec![false; 3]);
        assert_eq!(find_cycle(&es, &dist, &[None, Some(0), Some(1)]), None);
    }

    #[test]
    fn unreached_sources_never_relax() {
        let inf = i64::INFINITY;
        let es = edges(&[(1, 0, -100)]);
        assert_eq!(relaxable_edge(&es, &[0, inf]), None);
    }

    #[test]
    fn downstream_of_cycle_is_affected() {
        // 0 -> 1 -> 2 -> 1 (cycle weight -2), 2 -> 3, 4 untouched.
        let es = edges(&[(0, 1, 1), (1, 2, -1), (2, 1, -1), (2, 3, 1), (0, 4, 7)]);
        // State after three passes over this list.
        let dist = [0, -5, -4, -3, 7];
        let parent = [None, Some(2), Some(1), Some(2), Some(0)];

        assert_eq!(relaxable_edge(&es, &dist), Some(Edge::new(1, 2, -1)));
        assert_eq!(
            affected_vertices(&es, &dist),
            vec![false, true, true, true, false]
        );

        let mut cycle = find_cycle(&es, &dist, &parent).unwrap();
        let total: i64 = cycle
            .iter()
            .zip(cycle.iter().cycle().skip(1))
            .map(|(&a, &b)| {
                es.iter()
                    .filter(|e| e.from == a && e.to == b)
                    .map(|e| e.weight)
                    .min()
                    .unwrap()
            })
            .sum();
        assert!(total < 0);
        cycle.sort_unstable();
        assert_eq!(cycle, vec![1, 2]);
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let es = edges(&[(0, 0, -1)]);
        assert_eq!(find_cycle(&es, &[0], &[None]), Some(vec![0]));
        assert_eq!(affected_vertices(&es, &[0]), vec![true]);
    }
}
