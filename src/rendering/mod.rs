use macroquad::prelude::*;

use crate::application::{ButtonColor, Control, GameObserver, GameOfLife};
use crate::domain::{Algorithm, GridGeometry};
use crate::ui::{ALERT_TEXT, ControlLayout, MARGIN, UiState};

const LIVE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const LINE_WIDTH: f32 = 1.0;

fn to_color(color: ButtonColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, 255)
}

/// Line positions along one axis, offset by half a pixel for odd line widths
/// so lines fall on device pixels.
pub fn grid_line_positions(extent: i32, block_size: i32, line_width: f32) -> Vec<f32> {
    let half = (line_width % 2.0) / 2.0;
    let max = extent as f32 - half;
    (0..extent)
        .step_by(block_size.max(1) as usize)
        .map(|p| (p as f32 + half).min(max))
        .collect()
}

pub fn draw_grid_lines(geometry: GridGeometry) {
    let half = (LINE_WIDTH % 2.0) / 2.0;
    let max_x = geometry.width() as f32 - half;
    let max_y = geometry.height() as f32 - half;

    for y in grid_line_positions(geometry.height(), geometry.block_size(), LINE_WIDTH) {
        draw_line(half, y, max_x, y, LINE_WIDTH, GRID_LINE_COLOR);
    }
    for x in grid_line_positions(geometry.width(), geometry.block_size(), LINE_WIDTH) {
        draw_line(x, half, x, max_y, LINE_WIDTH, GRID_LINE_COLOR);
    }
}

pub fn draw_live_cells<O: GameObserver>(game: &GameOfLife<O>) {
    let size = game.geometry().block_size() as f32;
    for coord in game.live_cells() {
        draw_rectangle(coord.x as f32, coord.y as f32, size, size, LIVE_COLOR);
    }
}

/// Text next to the speed buttons
pub fn speed_readout(speed: u32, algorithm: Algorithm) -> String {
    format!("Speed: {speed}  ({})", algorithm.description())
}

pub fn draw_controls(layout: &ControlLayout, ui: &UiState, readout: &str, mouse_pos: (f32, f32)) {
    for (control, button) in layout.buttons(&ui.button_label) {
        let tint = match control {
            Control::Start => ui.start_color,
            Control::SpeedDown => ui.speed_down_color,
            Control::SpeedUp => ui.speed_up_color,
        };
        button.draw(mouse_pos, tint.map(to_color));
    }

    let up = layout.rect(Control::SpeedUp);
    draw_text(
        readout,
        up.right() + MARGIN,
        up.y + up.h * 0.7,
        20.0,
        GRAY,
    );
}

pub fn draw_alert() {
    let size = measure_text(ALERT_TEXT, None, 50, 1.0);
    draw_text(
        ALERT_TEXT,
        (screen_width() - size.width) / 2.0,
        screen_height() / 2.0 - 50.0,
        50.0,
        WHITE,
    );
}

/// Draw one full frame: board, lines, controls and the alert if shown
pub fn draw_frame(game: &GameOfLife<UiState>, layout: &ControlLayout, mouse_pos: (f32, f32)) {
    clear_background(BLACK);
    draw_live_cells(game);
    draw_grid_lines(game.geometry());
    let readout = speed_readout(game.speed().value(), game.algorithm());
    draw_controls(layout, game.observer(), &readout, mouse_pos);
    if game.observer().alert_visible {
        draw_alert();
    }
}
