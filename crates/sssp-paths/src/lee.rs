//! Lee's algorithm: breadth-first search on a unit-cost maze.
//!
//! Cells are expanded level by level from the start, so the first time a
//! cell is reached is along a shortest path. Distance and predecessor are
//! stored flat, row-major, over the whole grid.

use std::collections::VecDeque;

use log::{debug, trace};
use sssp_core::{Bounds, Coord, Grid};

use crate::neighbors::Neighbors;
use crate::path::{self, Predecessors};

/// Sentinel stored in [`LeeResult::dist`] for cells never reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Distance and predecessor grids produced by [`lee_bfs`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeeResult {
    bounds: Bounds,
    start: Coord,
    dist: Vec<i32>,
    parent: Vec<Option<Coord>>,
}

impl LeeResult {
    fn unvisited(bounds: Bounds, start: Coord) -> Self {
        Self {
            bounds,
            start,
            dist: vec![UNREACHABLE; bounds.len()],
            parent: vec![None; bounds.len()],
        }
    }

    /// Extent of the searched grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The start cell the search was run from.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Flat row-major distances; [`UNREACHABLE`] for unvisited cells.
    #[inline]
    pub fn dist(&self) -> &[i32] {
        &self.dist
    }

    /// Flat row-major predecessors.
    #[inline]
    pub fn parents(&self) -> &[Option<Coord>] {
        &self.parent
    }

    /// Number of steps from the start to `c`, or `None` if `c` was not
    /// reached or lies outside the grid.
    #[inline]
    pub fn dist_at(&self, c: Coord) -> Option<i32> {
        let i = self.bounds.index(c)?;
        let d = self.dist[i];
        (d != UNREACHABLE).then_some(d)
    }

    /// The cell `c` was first reached from.
    #[inline]
    pub fn parent_at(&self, c: Coord) -> Option<Coord> {
        self.parent[self.bounds.index(c)?]
    }

    /// Number of cells reached, the start included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }

    /// Distances as rows of columns, with `-1` for unvisited cells.
    pub fn dist_rows(&self) -> Vec<Vec<i32>> {
        let cols = self.bounds.cols.max(1) as usize;
        self.dist
            .chunks(cols)
            .map(|row| {
                row.iter()
                    .map(|&d| if d == UNREACHABLE { -1 } else { d })
                    .collect()
            })
            .collect()
    }

    /// Shortest path from the start to `goal`, both included, or `None` if
    /// `goal` was not reached.
    pub fn path_to(&self, goal: Coord) -> Option<Vec<Coord>> {
        self.dist_at(goal)?;
        path::reconstruct_path(self, self.start, goal)
    }

    /// Paths to each of `goals`, independently.
    pub fn paths_to<I>(&self, goals: I) -> Vec<Option<Vec<Coord>>>
    where
        I: IntoIterator<Item = Coord>,
    {
        goals.into_iter().map(|g| self.path_to(g)).collect()
    }
}

impl Predecessors for LeeResult {
    type Node = Coord;

    #[inline]
    fn predecessor(&self, node: Coord) -> Option<Coord> {
        self.parent_at(node)
    }

    #[inline]
    fn in_bounds(&self, node: Coord) -> bool {
        self.bounds.contains(node)
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.bounds.len()
    }
}

/// Breadth-first search over the free cells of `grid`, 4-directional.
///
/// A start outside the grid or on a blocked cell yields a result with every
/// cell unvisited. If `goal` is inside the grid and `stop_at_goal` is set,
/// the search halts as soon as the goal is dequeued; otherwise the whole
/// region reachable from `start` is flooded, so that paths to many
/// destinations can be read from one result.
pub fn lee_bfs(grid: &Grid, start: Coord, goal: Option<Coord>, stop_at_goal: bool) -> LeeResult {
    let bounds = grid.bounds();
    let mut res = LeeResult::unvisited(bounds, start);

    let Some(si) = bounds.index(start).filter(|_| grid.is_free(start)) else {
        debug!("lee: start {start} is outside the grid or blocked");
        return res;
    };
    let goal_idx = goal.and_then(|g| bounds.index(g)).filter(|_| stop_at_goal);

    let mut queue: VecDeque<usize> = VecDeque::new();
    res.dist[si] = 0;
    queue.push_back(si);

    let mut nbrs = Neighbors::new();

    while let Some(ci) = queue.pop_front() {
        if Some(ci) == goal_idx {
            trace!("lee: goal dequeued, stopping");
            break;
        }
        let cp = bounds.coord(ci);
        let nd = res.dist[ci] + 1;

        for &np in nbrs.cardinal(cp, |p| grid.is_free(p)) {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            if res.dist[ni] != UNREACHABLE {
                continue;
            }
            res.dist[ni] = nd;
            res.parent[ni] = Some(cp);
            queue.push_back(ni);
        }
    }

    debug!(
        "lee from {start}: reached {} of {} cells",
        res.reached(),
        bounds.len()
    );
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;

    // 0 = free, 1 = blocked.
    fn classic() -> Grid {
        Grid::from_rows(&[
            [0, 0, 0, 0, 1, 0, 0],
            [1, 1, 0, 0, 1, 0, 1],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 1, 1, 0, 0, 1, 0],
            [0, 0, 0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    fn assert_valid_path(grid: &Grid, path: &[Coord], from: Coord, to: Coord) {
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        for c in path {
            assert!(grid.is_free(*c), "{c} is not free");
        }
        for w in path.windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1, "{} -> {} is not a step", w[0], w[1]);
        }
    }

    #[test]
    fn classic_maze_early_stop() {
        let g = classic();
        let start = Coord::new(0, 0);
        let goal = Coord::new(4, 6);
        let r = lee_bfs(&g, start, Some(goal), true);
        assert_eq!(r.dist_at(goal), Some(10));
        let path = r.path_to(goal).unwrap();
        assert_eq!(path.len(), 11);
        assert_valid_path(&g, &path, start, goal);
        assert!(r.reached() <= g.count_free());
    }

    #[test]
    fn flood_reaches_every_connected_cell() {
        let g = classic();
        let start = Coord::new(0, 0);
        let r = lee_bfs(&g, start, None, false);
        assert_eq!(r.reached(), 27);
        assert_eq!(r.dist_at(Coord::new(4, 6)), Some(10));
        assert_eq!(r.dist_at(Coord::new(0, 6)), Some(10));
        assert_eq!(r.dist_at(Coord::new(1, 0)), None);

        let targets = [Coord::new(3, 0), Coord::new(0, 5), Coord::new(1, 1)];
        let paths = r.paths_to(targets);
        for (t, p) in targets.iter().zip(&paths) {
            match p {
                Some(p) => {
                    assert_valid_path(&g, p, start, *t);
                    assert_eq!(p.len() as i32 - 1, r.dist_at(*t).unwrap());
                }
                None => assert!(!g.is_free(*t)),
            }
        }
    }

    #[test]
    fn goal_without_early_stop_floods() {
        let g = classic();
        let goal = Coord::new(0, 2);
        let stopped = lee_bfs(&g, Coord::ZERO, Some(goal), true);
        let flooded = lee_bfs(&g, Coord::ZERO, Some(goal), false);
        assert_eq!(stopped.dist_at(goal), flooded.dist_at(goal));
        assert!(stopped.reached() < flooded.reached());
        assert_eq!(flooded.reached(), 27);
    }

    #[test]
    fn blocked_or_outside_start_reaches_nothing() {
        let g = classic();
        for start in [Coord::new(1, 0), Coord::new(-1, 0), Coord::new(5, 0)] {
            let r = lee_bfs(&g, start, Some(Coord::new(4, 6)), true);
            assert_eq!(r.reached(), 0);
            assert_eq!(r.path_to(start), None);
            assert_eq!(r.path_to(Coord::new(4, 6)), None);
            assert!(r.dist_rows().iter().flatten().all(|&d| d == -1));
        }
    }

    #[test]
    fn outside_or_blocked_goal_has_no_path() {
        let g = classic();
        let r = lee_bfs(&g, Coord::ZERO, Some(Coord::new(9, 9)), true);
        assert_eq!(r.reached(), 27);
        assert_eq!(r.path_to(Coord::new(9, 9)), None);
        assert_eq!(r.path_to(Coord::new(0, 4)), None);
    }

    #[test]
    fn path_to_start_is_single_cell() {
        let g = classic();
        let r = lee_bfs(&g, Coord::new(2, 3), None, false);
        assert_eq!(r.path_to(Coord::new(2, 3)), Some(vec![Coord::new(2, 3)]));
        assert_eq!(r.dist_at(Coord::new(2, 3)), Some(0));
        assert_eq!(r.parent_at(Coord::new(2, 3)), None);
    }

    #[test]
    fn walled_off_region_is_unreachable() {
        let g: Grid = "..#..\n..#..\n".parse().unwrap();
        let r = lee_bfs(&g, Coord::ZERO, Some(Coord::new(1, 4)), true);
        assert_eq!(r.reached(), 4);
        assert_eq!(r.path_to(Coord::new(1, 4)), None);
        assert_eq!(
            r.dist_rows(),
            vec![vec![0, 1, -1, -1, -1], vec![1, 2, -1, -1, -1]]
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = classic();
        let a = lee_bfs(&g, Coord::ZERO, None, false);
        let b = lee_bfs(&g, Coord::ZERO, None, false);
        assert_eq!(a, b);
    }
}
