mod cell;
mod engine;
mod grid;

pub use cell::Cell;
pub use engine::Engine;
pub use grid::Grid;
