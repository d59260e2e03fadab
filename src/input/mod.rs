//! Pointer translation: raw window coordinates in, core operations out.

use macroquad::prelude::*;

use crate::application::{Control, GameObserver, GameOfLife};
use crate::domain::CellCoord;
use crate::ui::ControlLayout;

/// Raw pointer input in window pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

/// What a pointer press landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
    Control(Control),
    Cell(CellCoord),
}

/// Quantizes pointer positions to cells and routes presses to controls.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputTranslator {
    layout: ControlLayout,
}

impl InputTranslator {
    pub fn new(layout: ControlLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    /// Controls sit on top of the board and win the hit test
    pub fn target<O: GameObserver>(
        &self,
        game: &GameOfLife<O>,
        x: f32,
        y: f32,
    ) -> Option<PressTarget> {
        self.layout
            .hit(x, y)
            .map(PressTarget::Control)
            .or_else(|| game.geometry().quantize(x, y).map(PressTarget::Cell))
    }

    pub fn apply<O: GameObserver>(&self, game: &mut GameOfLife<O>, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => match self.target(game, x, y) {
                Some(PressTarget::Control(control)) => game.press_control(control),
                Some(PressTarget::Cell(coord)) => game.press_cell(coord),
                None => {}
            },
            PointerEvent::Move { x, y } => {
                if let Some(PressTarget::Cell(coord)) = self.target(game, x, y) {
                    game.drag_to(coord);
                }
            }
            PointerEvent::Up => game.release(),
        }
    }
}

/// Read this frame's mouse state as pointer events.
/// `last_pos` holds the previous frame's position for move detection.
pub fn poll_pointer(last_pos: &mut Option<(f32, f32)>) -> Vec<PointerEvent> {
    let (x, y) = mouse_position();
    let mut events = Vec::with_capacity(2);

    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(PointerEvent::Down { x, y });
    } else if *last_pos != Some((x, y)) {
        events.push(PointerEvent::Move { x, y });
    }
    if is_mouse_button_released(MouseButton::Left) {
        events.push(PointerEvent::Up);
    }

    *last_pos = Some((x, y));
    events
}
