mod canvas;
mod primitives;
mod recording;

pub use canvas::{Canvas, CanvasStateScope};
pub use primitives::{Color, LinePaint, TextHAlign, TextPaint};
pub use recording::{CanvasCommand, RecordingCanvas};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoCanvas;
