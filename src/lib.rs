// Domain layer - board geometry, live cells and the B3/S23 rule
pub mod domain;

// Application layer - simulation core, session state, config
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, CellCoord, GridGeometry, LiveCells};
pub use application::{GameConfig, GameObserver, GameOfLife};
pub use ui::UiState;
