use macroquad::prelude::*;

/// Clickable rectangle with a centered label
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    text: String,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            rect,
            text: text.into(),
            color: Color::from_rgba(70, 70, 70, 255),
            hover_color: Color::from_rgba(100, 100, 100, 255),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Draw with hover effect; `tint` replaces the fill while a press is shown
    pub fn draw(&self, mouse_pos: (f32, f32), tint: Option<Color>) {
        let fill = tint.unwrap_or(if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        });
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}
