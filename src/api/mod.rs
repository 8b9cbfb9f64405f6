mod axis;
mod axis_config;
mod json_contract;
mod label_config;
mod label_placement;
mod point_calc;

pub use axis::{AxisInterval, GridlineSegment, build_axis_intervals, gridline_segment, render_y_axis};
pub use axis_config::{AxisSide, YAxisOptions};
pub use json_contract::{Y_AXIS_OPTIONS_JSON_SCHEMA_V1, YAxisOptionsJsonContractV1};
pub use label_config::{Orientation, YPositionBehavior};
pub use label_placement::{PlacedLabel, draw_value_label, place_value_label};
pub use point_calc::{PointCalculator, PointContext};
