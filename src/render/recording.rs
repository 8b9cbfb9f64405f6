use crate::core::{TextBounds, Viewport};
use crate::render::{Canvas, LinePaint, TextHAlign, TextPaint};

/// One recorded canvas operation.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    Save,
    Restore,
    Translate {
        dx: f64,
        dy: f64,
    },
    RotateDegrees {
        degrees: f64,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font_size_px: f64,
        h_align: TextHAlign,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
    },
}

// Fixed-advance metrics: every glyph is 0.6em wide, line height is the font
// size. Keeps placement math reproducible without a font stack.
const GLYPH_ADVANCE_EM: f64 = 0.6;

/// Headless canvas used by tests and headless embedding.
///
/// Records every command instead of rasterizing, and still debug-asserts
/// paint validity so tests catch invalid geometry before a real backend is
/// introduced.
#[derive(Debug)]
pub struct RecordingCanvas {
    viewport: Viewport,
    commands: Vec<CanvasCommand>,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, CanvasCommand::Text { .. }))
            .count()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, CanvasCommand::Line { .. }))
            .count()
    }

    /// Total text and line draw calls, ignoring transform bookkeeping.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.text_count() + self.line_count()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f64 {
        f64::from(self.viewport.width)
    }

    fn height(&self) -> f64 {
        f64::from(self.viewport.height)
    }

    fn save(&mut self) {
        self.commands.push(CanvasCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(CanvasCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(CanvasCommand::Translate { dx, dy });
    }

    fn rotate_degrees(&mut self, degrees: f64) {
        self.commands.push(CanvasCommand::RotateDegrees { degrees });
    }

    fn measure_text(&self, text: &str, font_size_px: f64) -> TextBounds {
        let glyphs = text.chars().count() as f64;
        TextBounds::new(glyphs * font_size_px * GLYPH_ADVANCE_EM, font_size_px)
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, paint: &TextPaint) {
        debug_assert!(paint.validate().is_ok(), "text paint must be valid");
        self.commands.push(CanvasCommand::Text {
            text: text.to_owned(),
            x,
            y,
            font_size_px: paint.font_size_px,
            h_align: paint.h_align,
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, paint: &LinePaint) {
        debug_assert!(paint.validate().is_ok(), "line paint must be valid");
        self.commands.push(CanvasCommand::Line {
            x1,
            y1,
            x2,
            y2,
            stroke_width: paint.stroke_width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::RecordingCanvas;
    use crate::core::Viewport;
    use crate::render::Canvas;

    #[test]
    fn measurement_scales_with_char_count_not_byte_count() {
        let canvas = RecordingCanvas::new(Viewport::new(100, 100));
        let ascii = canvas.measure_text("abc", 10.0);
        let accented = canvas.measure_text("äöü", 10.0);
        assert_eq!(ascii.width, accented.width);
        assert_eq!(ascii.height, 10.0);
    }

    #[test]
    fn empty_text_measures_zero_width() {
        let canvas = RecordingCanvas::new(Viewport::new(100, 100));
        let bounds = canvas.measure_text("", 10.0);
        assert_eq!(bounds.width, 0.0);
    }
}
