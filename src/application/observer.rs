use std::fmt;

use crate::domain::CellCoord;

/// Start button label while no session is running
pub const IDLE_LABEL: &str = "BEGIN";
/// Start button label while a session is running
pub const RUNNING_LABEL: &str = "RESET";

/// Feedback tint for a pressed control, shown as `rgb(r,g,b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ButtonColor {
    /// The green family used for press feedback
    pub const fn green(g: u8) -> Self {
        Self { r: 0, g, b: 1 }
    }
}

impl fmt::Display for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Receives state deltas from [`GameOfLife`](super::GameOfLife).
///
/// Every method defaults to a no-op, so a host only implements the events it
/// cares about.
pub trait GameObserver {
    fn cell_added(&mut self, _coord: CellCoord) {}
    fn cell_removed(&mut self, _coord: CellCoord) {}
    fn show_alert(&mut self) {}
    fn hide_alert(&mut self) {}
    fn set_button_label(&mut self, _text: &str) {}
    fn set_start_button_color(&mut self, _color: ButtonColor) {}
    fn set_speed_down_color(&mut self, _color: ButtonColor) {}
    fn set_speed_up_color(&mut self, _color: ButtonColor) {}
    fn reset_button_colors(&mut self) {}
}

/// Observer that ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(ButtonColor::green(128).to_string(), "rgb(0,128,1)");
    }

    #[test]
    fn test_partial_observer_compiles_with_defaults() {
        #[derive(Default)]
        struct AddsOnly(usize);
        impl GameObserver for AddsOnly {
            fn cell_added(&mut self, _coord: CellCoord) {
                self.0 += 1;
            }
        }

        let mut obs = AddsOnly::default();
        obs.cell_added(CellCoord::new(0, 0));
        obs.cell_removed(CellCoord::new(0, 0));
        obs.show_alert();
        assert_eq!(obs.0, 1);
    }
}
