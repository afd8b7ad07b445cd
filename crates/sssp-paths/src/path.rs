//! Path reconstruction from predecessor links.
//!
//! Every search leaves behind an implicit reversed tree: each reached vertex
//! records the vertex it was reached from. A path to `target` is recovered
//! by following those links back to the source and reversing.

/// A predecessor structure produced by a search.
pub trait Predecessors {
    type Node: Copy + Eq;

    /// The node `node` was reached from, or `None` if it has no recorded
    /// predecessor (the source, or a node never reached).
    fn predecessor(&self, node: Self::Node) -> Option<Self::Node>;

    /// Whether `node` addresses a slot of this structure at all.
    fn in_bounds(&self, node: Self::Node) -> bool;

    /// Upper bound on the length of any acyclic predecessor chain.
    fn node_count(&self) -> usize;
}

impl Predecessors for [Option<usize>] {
    type Node = usize;

    #[inline]
    fn predecessor(&self, node: usize) -> Option<usize> {
        self.get(node).copied().flatten()
    }

    #[inline]
    fn in_bounds(&self, node: usize) -> bool {
        node < self.len()
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.len()
    }
}

impl Predecessors for Vec<Option<usize>> {
    type Node = usize;

    #[inline]
    fn predecessor(&self, node: usize) -> Option<usize> {
        self.as_slice().predecessor(node)
    }

    #[inline]
    fn in_bounds(&self, node: usize) -> bool {
        node < self.len()
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.len()
    }
}

/// Reconstruct the forward path `source, ..., target`.
///
/// Returns `Some(vec![source])` when `target == source`, and `None` when the
/// chain of predecessors from `target` ends anywhere other than at `source`
/// (the target was not reached). A chain longer than
/// [`node_count`](Predecessors::node_count) can only come from a predecessor
/// cycle and also yields `None`.
pub fn reconstruct_path<P>(parents: &P, source: P::Node, target: P::Node) -> Option<Vec<P::Node>>
where
    P: Predecessors + ?Sized,
{
    if !parents.in_bounds(source) || !parents.in_bounds(target) {
        return None;
    }

    let mut path = vec![target];
    let mut cur = target;
    while cur != source {
        cur = parents.predecessor(cur)?;
        path.push(cur);
        if path.len() > parents.node_count() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

/// Reconstruct paths from `source` to each of `targets`, independently.
pub fn reconstruct_all<P, I>(parents: &P, source: P::Node, targets: I) -> Vec<Option<Vec<P::Node>>>
where
    P: Predecessors + ?Sized,
    I: IntoIterator<Item = P::Node>,
{
    targets
        .into_iter()
        .map(|t| reconstruct_path(parents, source, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> 1 -> 3 -> 4, 0 -> 2, vertex 5 unreached.
    fn tree() -> Vec<Option<usize>> {
        vec![None, Some(0), Some(0), Some(1), Some(3), None]
    }

    #[test]
    fn path_runs_from_source_to_target() {
        let p = tree();
        assert_eq!(reconstruct_path(&p, 0, 4), Some(vec![0, 1, 3, 4]));
        assert_eq!(reconstruct_path(&p, 0, 2), Some(vec![0, 2]));
    }

    #[test]
    fn path_to_source_is_single_vertex() {
        assert_eq!(reconstruct_path(&tree(), 0, 0), Some(vec![0]));
    }

    #[test]
    fn unreached_target_has_no_path() {
        assert_eq!(reconstruct_path(&tree(), 0, 5), None);
    }

    #[test]
    fn chain_not_ending_at_source_has_no_path() {
        // Querying from 1: vertex 2 hangs off 0, which is above the source.
        assert_eq!(reconstruct_path(&tree(), 1, 2), None);
        assert_eq!(reconstruct_path(&tree(), 1, 4), Some(vec![1, 3, 4]));
    }

    #[test]
    fn out_of_range_nodes_have_no_path() {
        assert_eq!(reconstruct_path(&tree(), 0, 99), None);
        assert_eq!(reconstruct_path(&tree(), 99, 0), None);
    }

    #[test]
    fn predecessor_cycle_terminates() {
        // 1 <-> 2 loop that never reaches source 0.
        let p = vec![None, Some(2), Some(1)];
        assert_eq!(reconstruct_path(&p, 0, 1), None);
    }

    #[test]
    fn all_paths_are_independent() {
        let p = tree();
        let all = reconstruct_all(p.as_slice(), 0, 0..p.len());
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Some(vec![0]));
        assert_eq!(all[3], Some(vec![0, 1, 3]));
        assert_eq!(all[5], None);
        for (t, path) in all.iter().enumerate() {
            if let Some(path) = path {
                assert_eq!(path.first(), Some(&0));
                assert_eq!(path.last(), Some(&t));
            }
        }
    }
}
