use crate::application::{ButtonColor, GameObserver, IDLE_LABEL};
use crate::domain::CellCoord;

/// What the host UI shows besides the board itself, kept current by the
/// core's notifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub button_label: String,
    pub alert_visible: bool,
    pub start_color: Option<ButtonColor>,
    pub speed_down_color: Option<ButtonColor>,
    pub speed_up_color: Option<ButtonColor>,
    pub cells_added: u64,
    pub cells_removed: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            button_label: IDLE_LABEL.to_string(),
            alert_visible: false,
            start_color: None,
            speed_down_color: None,
            speed_up_color: None,
            cells_added: 0,
            cells_removed: 0,
        }
    }
}

impl GameObserver for UiState {
    fn cell_added(&mut self, _coord: CellCoord) {
        self.cells_added += 1;
    }

    fn cell_removed(&mut self, _coord: CellCoord) {
        self.cells_removed += 1;
    }

    fn show_alert(&mut self) {
        self.alert_visible = true;
    }

    fn hide_alert(&mut self) {
        self.alert_visible = false;
    }

    fn set_button_label(&mut self, text: &str) {
        self.button_label.clear();
        self.button_label.push_str(text);
    }

    fn set_start_button_color(&mut self, color: ButtonColor) {
        self.start_color = Some(color);
    }

    fn set_speed_down_color(&mut self, color: ButtonColor) {
        self.speed_down_color = Some(color);
    }

    fn set_speed_up_color(&mut self, color: ButtonColor) {
        self.speed_up_color = Some(color);
    }

    fn reset_button_colors(&mut self) {
        self.start_color = None;
        self.speed_down_color = None;
        self.speed_up_color = None;
    }
}
