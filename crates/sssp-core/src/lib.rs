//! **sssp-core**: graph and grid model for single-source shortest paths.
//!
//! This crate provides the data the search strategies in `sssp-paths`
//! operate on: dense-index weighted graphs (adjacency list and flat edge
//! list), grid geometry, and free/blocked mazes. Nothing here mutates a
//! graph during a search; every type is plain owned data.

pub mod geom;
pub mod graph;
pub mod grid;
pub mod weight;

pub use geom::{Bounds, Coord};
pub use graph::{Edge, EdgeList, Graph};
pub use grid::{Cell, Grid, GridError};
pub use weight::Weight;
