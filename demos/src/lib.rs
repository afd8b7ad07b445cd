//! Support code for the `sssp` command-line demo: input parsing, bundled
//! examples, random mazes and result rendering.

pub mod builtin;
pub mod input;
pub mod maze;
pub mod report;

pub use input::InputError;
