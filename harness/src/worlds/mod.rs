//! World implementations for the harness runner.

pub mod grid;
pub mod grid_maze;
pub mod linear_chain;
pub mod parking;
pub mod weighted_graph;
