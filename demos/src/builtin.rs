//! Small worked examples bundled with the `sssp` binary.

use sssp_core::{Cell, Coord, EdgeList, Graph, Grid};
use sssp_paths::euclidean;

/// Planar positions of the A* example's vertices.
pub const COORDS: [(f64, f64); 6] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (2.0, 0.0),
    (1.0, -1.0),
    (3.0, 1.0),
    (4.0, 0.0),
];

const COORD_LINKS: [(usize, usize); 7] = [(0, 1), (0, 2), (1, 3), (2, 3), (2, 4), (4, 5), (5, 3)];

/// Undirected graph over [`COORDS`], edges weighted by Euclidean length.
pub fn coordinate_graph() -> Graph<f64> {
    let mut g = Graph::new(COORDS.len());
    for (a, b) in COORD_LINKS {
        g.add_undirected_edge(a, b, euclidean(COORDS[a], COORDS[b]));
    }
    g
}

/// Five vertices with negative edges but no negative cycle.
pub fn bellman_ford_graph() -> EdgeList<i64> {
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

const MAZE_WALLS: [(i32, i32); 8] = [
    (0, 4),
    (1, 0),
    (1, 1),
    (1, 4),
    (1, 6),
    (3, 1),
    (3, 2),
    (3, 5),
];

/// The 5x7 maze searched from `(0, 0)` to `(4, 6)`.
pub fn maze() -> Grid {
    let mut g = Grid::new(5, 7);
    for (row, col) in MAZE_WALLS {
        g.set(Coord::new(row, col), Cell::Blocked);
    }
    g
}
