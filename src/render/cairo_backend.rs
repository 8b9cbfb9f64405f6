use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::warn;

use crate::core::{TextBounds, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Canvas, Color, LinePaint, TextHAlign, TextPaint};

/// Cairo + Pango + PangoCairo canvas backend.
///
/// Supports two modes:
/// - offscreen image-surface drawing through [`CairoCanvas::offscreen`]
/// - drawing on an external Cairo context (for example a GTK `DrawingArea`
///   callback) through [`CairoCanvas::from_context`]
pub struct CairoCanvas {
    context: Context,
    surface: Option<ImageSurface>,
    width: f64,
    height: f64,
}

impl CairoCanvas {
    pub fn offscreen(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = i32::try_from(viewport.width)
            .map_err(|_| ChartError::Backend("cairo surface width exceeds i32".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| ChartError::Backend("cairo surface height exceeds i32".to_owned()))?;

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            context,
            surface: Some(surface),
            width: f64::from(width),
            height: f64::from(height),
        })
    }

    #[must_use]
    pub fn from_context(context: Context, width: f64, height: f64) -> Self {
        Self {
            context,
            surface: None,
            width,
            height,
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    /// Backing surface in offscreen mode, `None` in external-context mode.
    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    fn layout_for(&self, text: &str, font_size_px: f64) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {font_size_px}"));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);
        layout
    }
}

impl Canvas for CairoCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn save(&mut self) {
        if let Err(err) = self.context.save() {
            warn!(error = %err, "cairo save failed; transform scope may leak");
        }
    }

    fn restore(&mut self) {
        if let Err(err) = self.context.restore() {
            warn!(error = %err, "cairo restore failed");
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.context.translate(dx, dy);
    }

    fn rotate_degrees(&mut self, degrees: f64) {
        self.context.rotate(degrees.to_radians());
    }

    fn measure_text(&self, text: &str, font_size_px: f64) -> TextBounds {
        let layout = self.layout_for(text, font_size_px);
        let (text_width, text_height) = layout.pixel_size();
        TextBounds::new(f64::from(text_width), f64::from(text_height))
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, paint: &TextPaint) {
        let layout = self.layout_for(text, paint.font_size_px);
        let (text_width, text_height) = layout.pixel_size();
        let draw_x = match paint.h_align {
            TextHAlign::Left => x,
            TextHAlign::Center => x - f64::from(text_width) / 2.0,
            TextHAlign::Right => x - f64::from(text_width),
        };

        apply_color(&self.context, paint.color);
        // Pango lays text out from the top-left corner; the canvas contract
        // takes a baseline origin.
        self.context.move_to(draw_x, y - f64::from(text_height));
        pangocairo::functions::show_layout(&self.context, &layout);
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, paint: &LinePaint) {
        apply_color(&self.context, paint.color);
        self.context.set_line_width(paint.stroke_width);
        self.context.move_to(x1, y1);
        self.context.line_to(x2, y2);
        if let Err(err) = self.context.stroke() {
            warn!(error = %err, "cairo stroke failed");
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
