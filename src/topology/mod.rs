//! Mesh topology: cell connectivity groups.

pub mod cell_array;

pub use cell_array::{CellArray, CellGroup};
