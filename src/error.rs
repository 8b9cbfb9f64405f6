use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures raised at the crate's validation boundaries.
///
/// Placement and axis geometry never error; these variants cover paint and
/// viewport validation, the options JSON contract, and backend construction.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid paint: {0}")]
    InvalidPaint(String),

    #[error("y-axis options contract: {0}")]
    Contract(String),

    #[error("canvas backend: {0}")]
    Backend(String),
}
