//! Text input for the command-line demos.
//!
//! Graphs use the classic whitespace-separated format:
//!
//! ```text
//! n m
//! u v w      (m lines, one directed edge each)
//! source
//! ```

use std::fmt;
use std::str::FromStr;

use sssp_core::{Coord, EdgeList, GridError, Weight};

/// Error produced while reading demo input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input ended while `expected` was still to be read.
    UnexpectedEnd { expected: &'static str },
    /// A token could not be parsed as `expected`.
    BadToken {
        token: String,
        expected: &'static str,
    },
    /// A vertex index is not below the declared vertex count.
    VertexOutOfRange { vertex: usize, n: usize },
    /// The graph has no vertex, so there is no valid source.
    EmptyGraph,
    /// Edge weights are too large for path costs to be represented.
    WeightOverflow { edge: usize },
    /// A coordinate argument is not of the form `row,col`.
    BadCoord(String),
    /// A size argument is not of the form `ROWSxCOLS`.
    BadDims(String),
    /// The grid text is malformed.
    Grid(GridError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            InputError::BadToken { token, expected } => {
                write!(f, "cannot read {token:?} as {expected}")
            }
            InputError::VertexOutOfRange { vertex, n } => {
                write!(f, "vertex {vertex} out of range for {n} vertices")
            }
            InputError::EmptyGraph => write!(f, "graph has no vertices"),
            InputError::WeightOverflow { edge } => write!(
                f,
                "edge {edge}: total edge weight too large, path costs could overflow"
            ),
            InputError::BadCoord(s) => write!(f, "invalid coordinate {s:?}, expected ROW,COL"),
            InputError::BadDims(s) => write!(f, "invalid size {s:?}, expected ROWSxCOLS"),
            InputError::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for InputError {
    fn from(e: GridError) -> Self {
        InputError::Grid(e)
    }
}

/// Whitespace tokenizer with typed reads.
struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self
            .iter
            .next()
            .ok_or(InputError::UnexpectedEnd { expected })?;
        token.parse().map_err(|_| InputError::BadToken {
            token: token.to_string(),
            expected,
        })
    }

    fn vertex(&mut self, n: usize, expected: &'static str) -> Result<usize, InputError> {
        let vertex: usize = self.next(expected)?;
        if vertex >= n {
            return Err(InputError::VertexOutOfRange { vertex, n });
        }
        Ok(vertex)
    }
}

/// A parsed graph plus its source vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphInput<W> {
    pub edges: EdgeList<W>,
    pub source: usize,
}

/// Parse `n m`, `m` edges `u v w` and a source vertex.
///
/// The absolute weights must sum to less than [`Weight::INFINITY`], so that
/// no path cost can reach the "unreachable" sentinel. Edges are numbered
/// from zero in error messages.
pub fn parse_graph<W>(text: &str) -> Result<GraphInput<W>, InputError>
where
    W: FromStr + Weight,
{
    let mut t = Tokens::new(text);
    let n: usize = t.next("vertex count")?;
    let m: usize = t.next("edge count")?;
    if n == 0 {
        return Err(InputError::EmptyGraph);
    }

    let mut edges = EdgeList::new(n);
    let mut total = W::ZERO;
    for edge in 0..m {
        let u = t.vertex(n, "edge source")?;
        let v = t.vertex(n, "edge target")?;
        let w: W = t.next("edge weight")?;
        total = total.saturating_add(w.magnitude());
        if total.is_infinite() {
            return Err(InputError::WeightOverflow { edge });
        }
        edges.push(u, v, w);
    }
    let source = t.vertex(n, "source vertex")?;
    Ok(GraphInput { edges, source })
}

/// Parse a `row,col` coordinate.
pub fn parse_coord(s: &str) -> Result<Coord, InputError> {
    let bad = || InputError::BadCoord(s.to_string());
    let (row, col) = s.split_once(',').ok_or_else(bad)?;
    let row = row.trim().parse().map_err(|_| bad())?;
    let col = col.trim().parse().map_err(|_| bad())?;
    Ok(Coord::new(row, col))
}

/// Grid dimensions given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

/// Parse `ROWSxCOLS`, both positive.
pub fn parse_dims(s: &str) -> Result<Dims, InputError> {
    let bad = || InputError::BadDims(s.to_string());
    let (rows, cols) = s.split_once(['x', 'X']).ok_or_else(bad)?;
    let rows: i32 = rows.trim().parse().map_err(|_| bad())?;
    let cols: i32 = cols.trim().parse().map_err(|_| bad())?;
    if rows <= 0 || cols <= 0 {
        return Err(bad());
    }
    Ok(Dims { rows, cols })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sssp_core::Edge;

    const CLASSIC: &str = "5 6\n0 1 2\n0 2 5\n1 2 1\n1 3 2\n2 3 3\n3 4 1\n0\n";

    #[test]
    fn parses_classic_input() {
        let g: GraphInput<i64> = parse_graph(CLASSIC).unwrap();
        assert_eq!(g.source, 0);
        assert_eq!(g.edges.node_count(), 5);
        assert_eq!(g.edges.len(), 6);
        assert_eq!(g.edges.edges()[3], Edge::new(1, 3, 2));
    }

    #[test]
    fn negative_and_float_weights() {
        let g: GraphInput<i64> = parse_graph("2 1 0 1 -4 0").unwrap();
        assert_eq!(g.edges.edges()[0].weight, -4);
        let g: GraphInput<f64> = parse_graph("2 1 0 1 1.5 1").unwrap();
        assert_eq!(g.edges.edges()[0].weight, 1.5);
        assert_eq!(g.source, 1);
    }

    #[test]
    fn reports_truncated_input() {
        let err = parse_graph::<i64>("3 2\n0 1 4\n").unwrap_err();
        assert_eq!(
            err,
            InputError::UnexpectedEnd {
                expected: "edge source"
            }
        );
    }

    #[test]
    fn reports_bad_tokens_and_ranges() {
        let err = parse_graph::<i64>("2 1 0 x 1 0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot read \"x\" as edge target"
        );
        let err = parse_graph::<i64>("2 1 0 2 1 0").unwrap_err();
        assert_eq!(err, InputError::VertexOutOfRange { vertex: 2, n: 2 });
        assert_eq!(parse_graph::<i64>("0 0").unwrap_err(), InputError::EmptyGraph);
    }

    #[test]
    fn rejects_weights_that_could_overflow() {
        let err = parse_graph::<i64>("3 2\n0 1 2000000000000000000\n1 2 9000000000000000000\n0\n")
            .unwrap_err();
        assert_eq!(err, InputError::WeightOverflow { edge: 1 });
        assert!(err.to_string().starts_with("edge 1: total edge weight too large"));

        let err = parse_graph::<i64>("2 1 0 1 -9223372036854775808 0").unwrap_err();
        assert_eq!(err, InputError::WeightOverflow { edge: 0 });
        assert!(parse_graph::<f64>("2 1 0 1 inf 0").is_err());
    }

    #[test]
    fn accepts_large_weights_that_fit() {
        let g: GraphInput<i64> = parse_graph("2 1\n0 1 3000000000000000000\n0\n").unwrap();
        assert_eq!(g.edges.edges()[0].weight, 3_000_000_000_000_000_000);
    }

    #[test]
    fn coordinates_and_dims() {
        assert_eq!(parse_coord("4,6"), Ok(Coord::new(4, 6)));
        assert_eq!(parse_coord(" 1 , 2 "), Ok(Coord::new(1, 2)));
        assert!(matches!(parse_coord("4;6"), Err(InputError::BadCoord(_))));
        assert_eq!(parse_dims("5x7"), Ok(Dims { rows: 5, cols: 7 }));
        assert!(parse_dims("0x7").is_err());
        assert!(parse_dims("five").is_err());
    }
}
