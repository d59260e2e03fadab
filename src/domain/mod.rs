mod algorithm;
mod board;
mod cell;
mod coord;
mod dense;

pub use algorithm::Algorithm;
pub use board::{GenerationPlan, LiveCells};
pub use cell::Cell;
pub use coord::{CellCoord, GridGeometry, MOORE_OFFSETS, round_block};
pub use dense::DenseGrid;
