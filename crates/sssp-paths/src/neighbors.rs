use sssp_core::Coord;

/// Reusable neighbour buffer for grid searches.
///
/// Enumerates the cardinal (4-way) neighbours of a cell in the fixed order
/// up, right, down, left, filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbours of `c` for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        self.buf.extend(c.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}
