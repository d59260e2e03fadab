use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    ButtonColor, Control, DragMode, GameConfig, GameObserver, IDLE_LABEL, NoopObserver,
    PointerState, RUNNING_LABEL, Speed,
};
use crate::domain::{Algorithm, CellCoord, GridGeometry, LiveCells};

/// Births and deaths applied by one generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationDelta {
    pub births: usize,
    pub deaths: usize,
}

/// The simulation core: live cells, session flags and the drag gesture.
///
/// All state changes are reported to the observer `O`. Nothing here knows
/// about windows or drawing.
pub struct GameOfLife<O: GameObserver = NoopObserver> {
    live: LiveCells,
    game_started: bool,
    speed: Speed,
    pointer: PointerState,
    generation: u64,
    algorithm: Algorithm,
    squares_to_add: Vec<CellCoord>,
    squares_to_remove: Vec<CellCoord>,
    rng: StdRng,
    observer: O,
}

impl<O: GameObserver> GameOfLife<O> {
    pub fn new(geometry: GridGeometry, observer: O) -> Self {
        Self::with_rng(geometry, observer, StdRng::from_os_rng())
    }

    /// Deterministic feedback colors, for tests and replays
    pub fn with_seed(geometry: GridGeometry, observer: O, seed: u64) -> Self {
        Self::with_rng(geometry, observer, StdRng::seed_from_u64(seed))
    }

    fn with_rng(geometry: GridGeometry, observer: O, rng: StdRng) -> Self {
        Self {
            live: LiveCells::new(geometry),
            game_started: false,
            speed: Speed::default(),
            pointer: PointerState::Idle,
            generation: 0,
            algorithm: Algorithm::default(),
            squares_to_add: Vec::new(),
            squares_to_remove: Vec::new(),
            rng,
            observer,
        }
    }

    /// Build from a validated config
    pub fn from_config(config: &GameConfig, observer: O) -> Self {
        let mut game = Self::new(config.geometry(), observer);
        game.speed = Speed::new(config.speed);
        game.algorithm = config.algorithm;
        game
    }

    /// Board dimensions in pixels
    pub fn geometry(&self) -> GridGeometry {
        self.live.geometry()
    }

    /// True while a session is running
    pub fn is_started(&self) -> bool {
        self.game_started
    }

    /// Current inverse speed
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Generations advanced since the session began
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Strategy `advance_generation` evaluates with
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Switch strategies; takes effect on the next generation
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        debug!("evaluation algorithm set to {}", algorithm.name());
        self.algorithm = algorithm;
    }

    /// Mode of the gesture in progress, if the pointer is down
    pub fn drag_mode(&self) -> Option<DragMode> {
        self.pointer.drag_mode()
    }

    /// True between a cell press and its release
    pub fn is_pointer_down(&self) -> bool {
        self.pointer.is_down()
    }

    /// Whether `coord` is currently live
    pub fn is_live(&self, coord: CellCoord) -> bool {
        self.live.contains(coord)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Live cells in arbitrary order
    pub fn live_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.live.iter()
    }

    /// Notification sink
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the notification sink
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the game, keeping the observer
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Mark a cell live. Notifies even if it already was.
    pub fn add_cell(&mut self, coord: CellCoord) {
        self.live.insert(coord);
        self.observer.hide_alert();
        self.observer.cell_added(coord);
    }

    /// Mark a cell dead. Silent if it was not live.
    pub fn remove_cell(&mut self, coord: CellCoord) {
        if self.live.remove(coord) {
            self.observer.cell_removed(coord);
        }
    }

    /// Live cells among the eight wrapped neighbors of `coord`
    pub fn count_live_neighbors(&self, coord: CellCoord) -> u8 {
        self.live.count_live_neighbors(coord)
    }

    /// Apply one B3/S23 generation.
    ///
    /// Every candidate is judged against the current board before any change
    /// is made; deaths are applied first, then births. Running state is not
    /// checked here, the host decides when to call this.
    pub fn advance_generation(&mut self) -> GenerationDelta {
        match self.algorithm {
            Algorithm::Sparse => self
                .live
                .plan_into(&mut self.squares_to_add, &mut self.squares_to_remove),
            Algorithm::SparseParallel => self
                .live
                .plan_parallel_into(&mut self.squares_to_add, &mut self.squares_to_remove),
        }

        let delta = GenerationDelta {
            births: self.squares_to_add.len(),
            deaths: self.squares_to_remove.len(),
        };

        let mut deaths = std::mem::take(&mut self.squares_to_remove);
        let mut births = std::mem::take(&mut self.squares_to_add);
        for &coord in &deaths {
            self.remove_cell(coord);
        }
        for &coord in &births {
            self.add_cell(coord);
        }

        // keep the allocations for the next generation
        deaths.clear();
        births.clear();
        self.squares_to_remove = deaths;
        self.squares_to_add = births;

        self.generation += 1;
        trace!(
            "generation {}: +{} -{} ({} live)",
            self.generation,
            delta.births,
            delta.deaths,
            self.live.len()
        );
        delta
    }

    /// Start running, unless there is nothing on the board
    pub fn begin_session(&mut self) {
        if self.live.is_empty() {
            debug!("start refused: board is empty");
            self.observer.show_alert();
            return;
        }
        self.observer.hide_alert();
        self.observer.set_button_label(RUNNING_LABEL);
        self.game_started = true;
        info!("session started with {} live cells", self.live.len());
    }

    /// Stop and wipe the board, reporting each removed cell
    pub fn end_session(&mut self) {
        self.observer.set_button_label(IDLE_LABEL);
        for coord in self.live.iter() {
            self.observer.cell_removed(coord);
        }
        self.live.clear();
        self.squares_to_add.clear();
        self.squares_to_remove.clear();
        self.game_started = false;
        info!("session reset after {} generations", self.generation);
        self.generation = 0;
    }

    /// End a running session, otherwise try to begin one
    pub fn toggle_session(&mut self) {
        if self.game_started {
            self.end_session();
        } else {
            self.begin_session();
        }
    }

    /// Pointer went down on a board cell: toggles it and fixes the drag mode
    /// for the rest of the gesture.
    pub fn press_cell(&mut self, coord: CellCoord) {
        if self.live.contains(coord) {
            self.pointer = PointerState::Dragging(DragMode::Remove);
            self.remove_cell(coord);
        } else {
            self.pointer = PointerState::Dragging(DragMode::Add);
            self.add_cell(coord);
        }
    }

    /// Pointer moved onto a board cell. Editing is disabled while running.
    pub fn drag_to(&mut self, coord: CellCoord) {
        if self.game_started {
            return;
        }
        match self.pointer {
            PointerState::Dragging(DragMode::Add) if !self.live.contains(coord) => {
                self.add_cell(coord);
            }
            PointerState::Dragging(DragMode::Remove) if self.live.contains(coord) => {
                self.remove_cell(coord);
            }
            _ => {}
        }
    }

    /// Pointer released: ends the gesture and clears button tints
    pub fn release(&mut self) {
        self.pointer = PointerState::Idle;
        self.observer.reset_button_colors();
    }

    /// Pointer went down on one of the fixed controls
    pub fn press_control(&mut self, control: Control) {
        match control {
            Control::Start => {
                self.toggle_session();
                let color = self.feedback_color();
                self.observer.set_start_button_color(color);
            }
            Control::SpeedDown => self.decrease_speed(),
            Control::SpeedUp => self.increase_speed(),
        }
    }

    /// Fewer ticks between generations
    pub fn increase_speed(&mut self) {
        self.speed = self.speed.faster();
        debug!("speed {}", self.speed.value());
        let color = self.feedback_color();
        self.observer.set_speed_up_color(color);
    }

    /// More ticks between generations
    pub fn decrease_speed(&mut self) {
        self.speed = self.speed.slower();
        debug!("speed {}", self.speed.value());
        let color = self.feedback_color();
        self.observer.set_speed_down_color(color);
    }

    fn feedback_color(&mut self) -> ButtonColor {
        ButtonColor::green(self.rng.random())
    }
}
