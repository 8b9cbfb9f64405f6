use serde::{Deserialize, Serialize};

/// Canvas edge a y-axis's text and shift originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

/// Runtime toggles and geometry for one y-axis render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct YAxisOptions {
    pub show_text: bool,
    pub show_lines: bool,
    pub side: AxisSide,
    /// Horizontal offset of the axis edge, in pixels from the canvas left.
    pub x_shift: f64,
}

impl YAxisOptions {
    #[must_use]
    pub fn new(show_text: bool, show_lines: bool) -> Self {
        Self {
            show_text,
            show_lines,
            side: AxisSide::default(),
            x_shift: 0.0,
        }
    }

    #[must_use]
    pub fn with_side(mut self, side: AxisSide) -> Self {
        self.side = side;
        self
    }

    #[must_use]
    pub fn with_x_shift(mut self, x_shift: f64) -> Self {
        self.x_shift = x_shift;
        self
    }
}
