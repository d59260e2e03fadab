mod button;
mod state;

pub use button::Button;
pub use state::UiState;

use macroquad::math::Rect;

use crate::application::Control;

pub const MARGIN: f32 = 10.0;
pub const GAP: f32 = 12.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const START_WIDTH: f32 = 110.0;
pub const SPEED_WIDTH: f32 = 36.0;
pub const ALERT_TEXT: &str = "DRAW SOME SQUARES FIRST!";

/// Positions of the three fixed controls, laid out left to right in the top
/// corner of the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlLayout {
    start: Rect,
    speed_down: Rect,
    speed_up: Rect,
}

impl ControlLayout {
    pub fn new() -> Self {
        let start = Rect::new(MARGIN, MARGIN, START_WIDTH, BUTTON_HEIGHT);
        let speed_down = Rect::new(start.right() + GAP, MARGIN, SPEED_WIDTH, BUTTON_HEIGHT);
        let speed_up = Rect::new(speed_down.right() + GAP, MARGIN, SPEED_WIDTH, BUTTON_HEIGHT);
        Self { start, speed_down, speed_up }
    }

    pub fn rect(&self, control: Control) -> Rect {
        match control {
            Control::Start => self.start,
            Control::SpeedDown => self.speed_down,
            Control::SpeedUp => self.speed_up,
        }
    }

    /// Control under a pointer position, if any
    pub fn hit(&self, x: f32, y: f32) -> Option<Control> {
        let point = macroquad::math::vec2(x, y);
        [Control::Start, Control::SpeedDown, Control::SpeedUp]
            .into_iter()
            .find(|&control| self.rect(control).contains(point))
    }

    /// Buttons for drawing, with the start button showing `label`
    pub fn buttons(&self, label: &str) -> [(Control, Button); 3] {
        [
            (Control::Start, Button::new(self.start, label)),
            (Control::SpeedDown, Button::new(self.speed_down, "-")),
            (Control::SpeedUp, Button::new(self.speed_up, "+")),
        ]
    }
}

impl Default for ControlLayout {
    fn default() -> Self {
        Self::new()
    }
}
