//! A rectangular maze of free and blocked cells.
//!
//! [`Grid`] stores its cells flat in row-major order and exposes bounds
//! checked lookups; any coordinate outside the grid reads as "not free".
//!
//! The text form used by [`FromStr`] and [`Display`](std::fmt::Display) is
//! one row per line, with `.` or `0` for a free cell and `#` or `1` for a
//! blocked one. Spaces are ignored and blank lines are skipped.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Bounds, Coord};
use crate::graph::Graph;

/// The content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Blocked,
}

impl Cell {
    /// Whether a path may pass through this cell.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Cell::Free)
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '0' => Some(Cell::Free),
            '#' | '1' => Some(Cell::Blocked),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Blocked => '#',
        }
    }
}

/// Error produced when building a [`Grid`] from rows or text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row does not have the same width as the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character in the text form is neither free nor blocked.
    UnknownCell { row: usize, col: usize, ch: char },
    /// The grid is too large to be addressed with `i32` coordinates.
    TooLarge,
    /// The number of cells does not match the bounds.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            GridError::UnknownCell { row, col, ch } => {
                write!(f, "unknown cell {ch:?} at ({row}, {col})")
            }
            GridError::TooLarge => write!(f, "grid dimensions exceed i32 range"),
            GridError::CellCount { expected, found } => {
                write!(f, "grid has {found} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A `rows x cols` grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    bounds: Bounds,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        if raw.cells.len() != raw.bounds.len() {
            return Err(GridError::CellCount {
                expected: raw.bounds.len(),
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            bounds: raw.bounds,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create a grid with every cell free.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            bounds,
            cells: vec![Cell::Free; bounds.len()],
        }
    }

    /// Build a grid from integer rows: `0` is free, anything else blocked.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&v| {
                if v == 0 { Cell::Free } else { Cell::Blocked }
            }));
        }
        Self::from_cells(rows.len(), width, cells)
    }

    fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        let rows = i32::try_from(rows).map_err(|_| GridError::TooLarge)?;
        let cols = i32::try_from(cols).map_err(|_| GridError::TooLarge)?;
        let bounds = Bounds::new(rows, cols);
        if bounds.is_empty() {
            return Ok(Self {
                bounds: Bounds::default(),
                cells: Vec::new(),
            });
        }
        Ok(Self { bounds, cells })
    }

    /// The extent of the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is inside the grid and free.
    #[inline]
    pub fn is_free(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Cell::is_free)
    }

    /// Set the cell at `c`. Does nothing if out of bounds.
    pub fn set(&mut self, c: Coord, cell: Cell) {
        if let Some(i) = self.bounds.index(c) {
            self.cells[i] = cell;
        }
    }

    /// Number of free cells.
    pub fn count_free(&self) -> usize {
        self.cells.iter().filter(|c| c.is_free()).count()
    }

    /// Iterate over `(Coord, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// The equivalent unit-weight graph: one vertex per cell (flattened
    /// row-major), and an edge from every free cell to each free cardinal
    /// neighbour. Blocked cells become isolated vertices.
    pub fn to_graph(&self) -> Graph<u32> {
        let mut g = Graph::new(self.bounds.len());
        for (c, cell) in self.iter() {
            if !cell.is_free() {
                continue;
            }
            let Some(from) = self.bounds.index(c) else {
                continue;
            };
            for n in c.neighbors_4() {
                if self.is_free(n) {
                    if let Some(to) = self.bounds.index(n) {
                        g.add_edge(from, to, 1);
                    }
                }
            }
        }
        g
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut width = None;
        let mut rows = 0;
        let mut cells = Vec::new();
        for line in s.lines() {
            let before = cells.len();
            for (col, ch) in line.chars().filter(|ch| !ch.is_whitespace()).enumerate() {
                let cell = Cell::from_char(ch).ok_or(GridError::UnknownCell {
                    row: rows,
                    col,
                    ch,
                })?;
                cells.push(cell);
            }
            let found = cells.len() - before;
            if found == 0 {
                continue;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row: rows,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }
        Self::from_cells(rows, width.unwrap_or(0), cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.bounds.cols.max(1) as usize) {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
