pub mod types;

pub use types::{Point, Size, TextBounds, Viewport};
