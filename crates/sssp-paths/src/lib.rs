//! Single-source shortest-path search over `sssp-core` graphs and grids.
//!
//! Four strategies share one data model (distance array, predecessor array,
//! path reconstruction):
//!
//! - **Dijkstra** for non-negative weights, one-to-all ([`dijkstra`])
//! - **A\*** for non-negative weights with a heuristic, one-to-one ([`astar`])
//! - **Bellman-Ford** for arbitrary weights, with negative-cycle detection
//!   ([`bellman_ford`])
//! - **Lee** breadth-first search on unit-cost mazes ([`lee_bfs`])
//!
//! Every call allocates its own state and returns it; nothing is cached or
//! shared between calls, so searches on the same graph may run on several
//! threads at once.
//!
//! # Traits
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Adjacency`] | Dijkstra, A* |
//! | [`Heuristic`] | A* |
//! | [`Predecessors`] | [`reconstruct_path`] |

mod astar;
mod bellman_ford;
mod dijkstra;
mod distance;
mod frontier;
mod lee;
pub mod negative_cycle;
mod neighbors;
mod path;
mod state;
mod traits;

pub use astar::{AstarResult, astar};
pub use bellman_ford::{BellmanFordResult, bellman_ford};
pub use dijkstra::dijkstra;
pub use distance::{chebyshev, euclidean, heuristic_table, manhattan};
pub use frontier::Frontier;
pub use lee::{LeeResult, UNREACHABLE, lee_bfs};
pub use neighbors::Neighbors;
pub use path::{Predecessors, reconstruct_all, reconstruct_path};
pub use state::SearchState;
pub use traits::{Adjacency, Heuristic, HeuristicFn, ZeroHeuristic};
