mod config;
mod game;
mod observer;
mod session;
mod ticker;

pub use config::{ConfigError, GameConfig};
pub use game::{GameOfLife, GenerationDelta};
pub use observer::{ButtonColor, GameObserver, IDLE_LABEL, NoopObserver, RUNNING_LABEL};
pub use session::{Control, DragMode, PointerState, Speed};
pub use ticker::{FixedStep, Ticker};
