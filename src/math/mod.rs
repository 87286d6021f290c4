//! Mathematical utilities: evenly spaced sample grids.

pub mod grid;

pub use grid::*;
