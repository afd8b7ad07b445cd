use sssp_core::Coord;

/// Manhattan (L1) distance between two cells. Admissible and consistent for
/// 4-directional unit-cost grids.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Straight-line distance between two points in the plane. Admissible and
/// consistent whenever edge weights are at least the Euclidean length of the
/// edge.
#[inline]
pub fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Tabulate `estimate(v, goal)` for every vertex `v` in `0..n`, for use as
/// an A* heuristic.
pub fn heuristic_table<W>(n: usize, goal: usize, estimate: impl Fn(usize, usize) -> W) -> Vec<W> {
    (0..n).map(|v| estimate(v, goal)).collect()
}
