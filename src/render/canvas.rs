use std::ops::{Deref, DerefMut};

use crate::core::TextBounds;
use crate::render::{LinePaint, TextPaint};

/// Contract implemented by any drawing surface the placement core draws into.
///
/// This is the small slice of an immediate-mode 2D canvas the core needs:
/// scoped transform state, translate/rotate, text measurement, and primitive
/// draw calls. Implementations own font selection and rasterization; text
/// coordinates refer to the baseline of the run.
pub trait Canvas {
    /// Visible width in pixels, used for horizontal edge clamping.
    fn width(&self) -> f64;

    /// Visible height in pixels.
    fn height(&self) -> f64;

    /// Pushes a copy of the current transform state.
    fn save(&mut self);

    /// Pops back to the most recently saved transform state.
    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    fn rotate_degrees(&mut self, degrees: f64);

    /// Measures `text` in the backend font at `font_size_px`.
    fn measure_text(&self, text: &str, font_size_px: f64) -> TextBounds;

    fn draw_text(&mut self, text: &str, x: f64, y: f64, paint: &TextPaint);

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, paint: &LinePaint);
}

/// Pairs [`Canvas::save`] with a guaranteed [`Canvas::restore`].
///
/// The restore runs when the scope is dropped, on every exit path, so a
/// translate/rotate applied inside the scope never leaks into later draws.
#[must_use]
pub struct CanvasStateScope<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> CanvasStateScope<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for CanvasStateScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for CanvasStateScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for CanvasStateScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
