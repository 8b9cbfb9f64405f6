use tracing::trace;

use crate::core::{Point, Size, TextBounds};
use crate::render::{Canvas, CanvasStateScope, TextPaint};

use super::{Orientation, YPositionBehavior};

const TRUNCATED_LABEL_MAX_CHARS: usize = 3;
const TRUNCATED_LABEL_MIN_CHARS: usize = 1;

/// Resolved draw plan for one value label.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    /// Canvas translation applied after `rotation_degrees`.
    pub translate_x: f64,
    pub translate_y: f64,
    /// Whole-canvas rotation applied before the translation.
    pub rotation_degrees: f64,
    /// Label text after slot-width truncation, if any.
    pub text: String,
    /// Measured bounds of `text` after any re-measurement.
    pub bounds: TextBounds,
}

/// Computes where a value label lands without drawing it.
///
/// `slot` is the width/height budget of the element the label annotates; an
/// empty slot disables truncation. `behavior` must already be resolved
/// against any per-entry override (see [`YPositionBehavior::resolve`]).
pub fn place_value_label<C: Canvas + ?Sized>(
    canvas: &C,
    orientation: Orientation,
    behavior: YPositionBehavior,
    slot: Size,
    anchor: Point,
    text: &str,
    font_size_px: f64,
) -> PlacedLabel {
    let bounds = canvas.measure_text(text, font_size_px);
    match orientation {
        Orientation::Vertical => place_vertical(behavior, anchor, bounds, text),
        Orientation::Horizontal => {
            place_horizontal(canvas, behavior, slot, anchor, bounds, text, font_size_px)
        }
    }
}

/// Places and draws one value label inside a saved canvas scope.
///
/// The transform state is restored before returning, so subsequent draws are
/// unaffected.
pub fn draw_value_label<C: Canvas + ?Sized>(
    canvas: &mut C,
    orientation: Orientation,
    behavior: YPositionBehavior,
    slot: Size,
    anchor: Point,
    text: &str,
    paint: &TextPaint,
) {
    let placed = place_value_label(
        canvas,
        orientation,
        behavior,
        slot,
        anchor,
        text,
        paint.font_size_px,
    );
    trace!(
        rotation = placed.rotation_degrees,
        x = placed.translate_x,
        y = placed.translate_y,
        "place value label"
    );

    let mut scope = CanvasStateScope::new(canvas);
    if placed.rotation_degrees != 0.0 {
        scope.rotate_degrees(placed.rotation_degrees);
    }
    scope.translate(placed.translate_x, placed.translate_y);
    scope.draw_text(&placed.text, 0.0, 0.0, paint);
}

fn place_vertical(
    behavior: YPositionBehavior,
    anchor: Point,
    bounds: TextBounds,
    text: &str,
) -> PlacedLabel {
    // The canvas is rotated 90 degrees before drawing, so the label's printed
    // extent runs along the canvas y-axis as `bounds.width`.
    let mut y = anchor.y;
    match behavior {
        YPositionBehavior::None => {}
        YPositionBehavior::UpToElementHeight => y -= bounds.width,
        YPositionBehavior::UpToElementMiddle => y -= bounds.width / 2.0,
        YPositionBehavior::DownToElementMiddle => y += bounds.width / 2.0,
        YPositionBehavior::DownToElementHeight => y += bounds.width * 2.0,
    }

    // TODO: clamp to the canvas top/bottom edges the way the horizontal
    // branch clamps left/right.
    PlacedLabel {
        translate_x: y,
        translate_y: -anchor.x + bounds.height / 2.0,
        rotation_degrees: 90.0,
        text: text.to_owned(),
        bounds,
    }
}

fn place_horizontal<C: Canvas + ?Sized>(
    canvas: &C,
    behavior: YPositionBehavior,
    slot: Size,
    anchor: Point,
    bounds: TextBounds,
    text: &str,
    font_size_px: f64,
) -> PlacedLabel {
    let mut text = text;
    let mut bounds = bounds;

    // Without a slot budget there is nothing to truncate against.
    if !slot.is_empty() {
        if bounds.width > slot.width {
            text = truncate_chars(text, TRUNCATED_LABEL_MAX_CHARS);
            bounds = canvas.measure_text(text, font_size_px);
        }
        if bounds.width > slot.width {
            text = truncate_chars(text, TRUNCATED_LABEL_MIN_CHARS);
            bounds = canvas.measure_text(text, font_size_px);
        }
    }

    let mut y = anchor.y;
    match behavior {
        YPositionBehavior::None => {}
        YPositionBehavior::UpToElementHeight => y -= bounds.height,
        YPositionBehavior::UpToElementMiddle => y -= bounds.height / 2.0,
        YPositionBehavior::DownToElementMiddle => y += bounds.height / 2.0,
        YPositionBehavior::DownToElementHeight => y += bounds.height * 2.0,
    }

    // Center on the anchor, then clamp inside the canvas. Lower clamp first:
    // a label wider than the canvas ends up pinned to the right overflow edge.
    let mut x = anchor.x - bounds.width / 2.0;
    if x < 0.0 {
        x = 0.0;
    }
    let max_x = canvas.width() - bounds.width;
    if x > max_x {
        x = max_x;
    }

    PlacedLabel {
        translate_x: x,
        translate_y: y,
        rotation_degrees: 0.0,
        text: text.to_owned(),
        bounds,
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn truncate_chars_is_a_no_op_for_short_text() {
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn truncate_chars_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("äöüß", 3), "äöü");
        assert_eq!(truncate_chars("1234", 1), "1");
    }
}
