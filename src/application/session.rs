/// Inverse simulation speed: a generation runs every `value` ticks,
/// so lower is faster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u32);

impl Speed {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 60;
    pub const STEP: u32 = 2;
    pub const DEFAULT: u32 = 10;

    /// Clamps into `[MIN, MAX]`
    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Fewer ticks per generation
    pub fn faster(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }

    /// More ticks per generation
    pub fn slower(self) -> Self {
        Self::new(self.0 + Self::STEP)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// What a held-down drag does to the cells it crosses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Add,
    Remove,
}

/// Pointer gesture state. The drag mode only exists while the pointer is down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Dragging(DragMode),
}

impl PointerState {
    pub const fn drag_mode(self) -> Option<DragMode> {
        match self {
            PointerState::Idle => None,
            PointerState::Dragging(mode) => Some(mode),
        }
    }

    pub const fn is_down(self) -> bool {
        matches!(self, PointerState::Dragging(_))
    }
}

/// The fixed on-screen controls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Start,
    SpeedDown,
    SpeedUp,
}
