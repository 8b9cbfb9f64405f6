use serde::{Deserialize, Serialize};

/// Axis along which chart elements run.
///
/// Fixed for a chart instance; selects which placement branch runs. Vertical
/// charts draw value labels through a rotated canvas, horizontal charts draw
/// them upright with slot truncation and edge clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Vertical position of a value label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum YPositionBehavior {
    /// Keep the label on the anchor point.
    #[default]
    None,
    /// Raise the label by the element's full thickness.
    UpToElementHeight,
    /// Raise the label by half the element's thickness.
    UpToElementMiddle,
    /// Lower the label by half the element's thickness.
    DownToElementMiddle,
    /// Lower the label by twice the element's thickness.
    DownToElementHeight,
}

impl YPositionBehavior {
    /// Resolves a per-entry override against the chart-wide default.
    ///
    /// Resolution happens at the call boundary so placement itself stays pure
    /// over a single resolved value.
    #[must_use]
    pub fn resolve(per_entry: Option<Self>, fallback: Self) -> Self {
        per_entry.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::YPositionBehavior;

    #[test]
    fn resolve_prefers_the_per_entry_override() {
        let resolved = YPositionBehavior::resolve(
            Some(YPositionBehavior::UpToElementMiddle),
            YPositionBehavior::DownToElementHeight,
        );
        assert_eq!(resolved, YPositionBehavior::UpToElementMiddle);
    }

    #[test]
    fn resolve_falls_back_to_the_default() {
        let resolved = YPositionBehavior::resolve(None, YPositionBehavior::DownToElementHeight);
        assert_eq!(resolved, YPositionBehavior::DownToElementHeight);
    }
}
