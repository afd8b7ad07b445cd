use log::info;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use sssp_core::{Cell, Coord, Grid};

use crate::input::Dims;

/// Generate a random maze where each cell is blocked with probability
/// `density` percent. Cells listed in `open` are always left free.
///
/// The same `seed` always yields the same maze.
pub fn random_maze(dims: Dims, density: u32, seed: u64, open: &[Coord]) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(dims.rows, dims.cols);
    let density = density.min(100);

    for c in grid.bounds() {
        if rng.random_range(0..100u32) < density {
            grid.set(c, Cell::Blocked);
        }
    }
    for &c in open {
        if grid.contains(c) {
            grid.set(c, Cell::Free);
        }
    }

    info!(
        "generated {}x{} maze, {} free cells (density {density}%, seed {seed})",
        dims.rows,
        dims.cols,
        grid.count_free()
    );
    grid
}
