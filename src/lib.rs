//! chartlet: value-label placement and y-axis rendering for compact charts.
//!
//! The crate is deliberately backend-agnostic. Chart layout code supplies
//! anchor points through an [`api::PointCalculator`], a [`render::Canvas`]
//! implementation supplies text measurement and primitive draw calls, and
//! this crate decides where labels and gridlines land: policy-driven
//! vertical offsets, slot-width truncation, edge clamping, and the rotated
//! drawing path used by vertically oriented charts.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Orientation, YPositionBehavior};
pub use error::{ChartError, ChartResult};
