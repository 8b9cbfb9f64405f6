use smallvec::SmallVec;
use tracing::trace;

use crate::core::Point;
use crate::render::{Canvas, LinePaint, TextHAlign, TextPaint};

use super::{AxisSide, PointCalculator, PointContext, YAxisOptions};

/// One y-axis label and the pixel point it annotates.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisInterval {
    pub label: String,
    pub anchor: Point,
}

/// Horizontal gridline span before margin insets are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridlineSegment {
    pub left: f64,
    pub right: f64,
    pub y: f64,
}

/// Builds one interval per axis value, in input order.
///
/// Duplicate values yield duplicate intervals. The anchor sits on the axis
/// edge horizontally; its y-coordinate comes from the point calculator,
/// called with the value's 0-based list index.
#[must_use]
pub fn build_axis_intervals<P: PointCalculator + ?Sized>(
    canvas_width: f64,
    calc: &P,
    options: &YAxisOptions,
    values: &[f64],
    ctx: &PointContext,
) -> SmallVec<[AxisInterval; 8]> {
    let anchor_x = match options.side {
        AxisSide::Left => options.x_shift,
        AxisSide::Right => canvas_width,
    };

    values
        .iter()
        .enumerate()
        .map(|(index, value)| AxisInterval {
            label: value.to_string(),
            anchor: Point::new(anchor_x, calc.calculate_point(*value, index, ctx).y),
        })
        .collect()
}

/// Gridline span for one interval, before the margin inset.
#[must_use]
pub fn gridline_segment(
    side: AxisSide,
    x_shift: f64,
    canvas_width: f64,
    anchor_y: f64,
) -> GridlineSegment {
    let left = match side {
        AxisSide::Left => x_shift,
        AxisSide::Right => 0.0,
    };
    GridlineSegment {
        left,
        right: canvas_width,
        y: anchor_y,
    }
}

/// Draws y-axis labels and gridlines for the given target values.
///
/// A no-op unless at least one of `show_text`/`show_lines` is set, so
/// intervals are never computed pointlessly. Stateless; call once per draw
/// pass.
pub fn render_y_axis<C, P>(
    canvas: &mut C,
    calc: &P,
    options: &YAxisOptions,
    text_paint: &TextPaint,
    lines_paint: &LinePaint,
    values: &[f64],
    ctx: &PointContext,
) where
    C: Canvas + ?Sized,
    P: PointCalculator + ?Sized,
{
    if !options.show_text && !options.show_lines {
        return;
    }

    let intervals = build_axis_intervals(canvas.width(), calc, options, values, ctx);
    trace!(count = intervals.len(), side = ?options.side, "built y-axis intervals");

    if options.show_text {
        draw_axis_text(canvas, options.side, text_paint, &intervals);
    }

    if options.show_lines {
        draw_axis_lines(canvas, options, ctx.margin, lines_paint, &intervals);
    }
}

fn draw_axis_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    side: AxisSide,
    text_paint: &TextPaint,
    intervals: &[AxisInterval],
) {
    // Text on a left axis ends at the axis edge, on a right axis it starts
    // there. Alignment goes on a copy so the caller's paint stays untouched.
    let paint = text_paint.with_h_align(match side {
        AxisSide::Left => TextHAlign::Right,
        AxisSide::Right => TextHAlign::Left,
    });

    for interval in intervals {
        let bounds = canvas.measure_text(&interval.label, paint.font_size_px);
        canvas.draw_text(
            &interval.label,
            interval.anchor.x,
            interval.anchor.y + bounds.height / 2.0,
            &paint,
        );
    }
}

fn draw_axis_lines<C: Canvas + ?Sized>(
    canvas: &mut C,
    options: &YAxisOptions,
    margin: f64,
    lines_paint: &LinePaint,
    intervals: &[AxisInterval],
) {
    for interval in intervals {
        let segment = gridline_segment(
            options.side,
            options.x_shift,
            canvas.width(),
            interval.anchor.y,
        );
        canvas.draw_line(
            segment.left + margin / 2.0,
            segment.y,
            segment.right - margin / 2.0,
            segment.y,
            lines_paint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisSide, gridline_segment};

    #[test]
    fn gridline_starts_at_shift_for_a_left_axis() {
        let segment = gridline_segment(AxisSide::Left, 20.0, 300.0, 75.0);
        assert_eq!(segment.left, 20.0);
        assert_eq!(segment.right, 300.0);
        assert_eq!(segment.y, 75.0);
    }

    #[test]
    fn gridline_starts_at_zero_for_a_right_axis() {
        let segment = gridline_segment(AxisSide::Right, 20.0, 300.0, 75.0);
        assert_eq!(segment.left, 0.0);
        assert_eq!(segment.right, 300.0);
    }
}
