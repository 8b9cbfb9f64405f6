use approx::abs_diff_eq;
use chartlet::api::{Orientation, YPositionBehavior, place_value_label};
use chartlet::core::{Point, Size, Viewport};
use chartlet::render::{Canvas, RecordingCanvas};
use proptest::prelude::*;

const FONT_SIZE_PX: f64 = 10.0;

proptest! {
    #[test]
    fn horizontal_clamp_keeps_labels_inside_the_canvas(
        anchor_x in -1000.0f64..1000.0,
        anchor_y in -200.0f64..200.0,
        glyphs in 1usize..80,
    ) {
        let canvas = RecordingCanvas::new(Viewport::new(400, 300));
        let text = "x".repeat(glyphs);

        let placed = place_value_label(
            &canvas,
            Orientation::Horizontal,
            YPositionBehavior::None,
            Size::default(),
            Point::new(anchor_x, anchor_y),
            &text,
            FONT_SIZE_PX,
        );

        prop_assume!(placed.bounds.width <= canvas.width());
        prop_assert!(placed.translate_x >= 0.0);
        prop_assert!(placed.translate_x <= canvas.width() - placed.bounds.width);
    }

    #[test]
    fn none_behavior_never_offsets_either_orientation(
        anchor_x in -500.0f64..500.0,
        anchor_y in -500.0f64..500.0,
    ) {
        let canvas = RecordingCanvas::new(Viewport::new(400, 300));
        let anchor = Point::new(anchor_x, anchor_y);

        let horizontal = place_value_label(
            &canvas,
            Orientation::Horizontal,
            YPositionBehavior::None,
            Size::default(),
            anchor,
            "123",
            FONT_SIZE_PX,
        );
        prop_assert_eq!(horizontal.translate_y, anchor_y);

        // The rotated branch carries the anchor y through as the first
        // translate component.
        let vertical = place_value_label(
            &canvas,
            Orientation::Vertical,
            YPositionBehavior::None,
            Size::default(),
            anchor,
            "123",
            FONT_SIZE_PX,
        );
        prop_assert_eq!(vertical.translate_x, anchor_y);
    }

    #[test]
    fn truncation_stages_shorten_and_never_reorder(
        text in "[a-z0-9]{0,20}",
        slot_width in 1.0f64..200.0,
    ) {
        let canvas = RecordingCanvas::new(Viewport::new(400, 300));
        let original_chars = text.chars().count();

        let placed = place_value_label(
            &canvas,
            Orientation::Horizontal,
            YPositionBehavior::None,
            Size::new(slot_width, 50.0),
            Point::new(200.0, 100.0),
            &text,
            FONT_SIZE_PX,
        );
        let placed_chars = placed.text.chars().count();

        prop_assert!(placed_chars <= original_chars);
        prop_assert!(text.starts_with(&placed.text));
        if placed_chars < original_chars {
            prop_assert!(placed_chars <= 3);
        }
        // Only a single char survives both degradation stages while still
        // overflowing the slot.
        if placed.bounds.width > slot_width {
            prop_assert!(placed_chars <= 1);
        }
    }

    #[test]
    fn vertical_translate_matches_the_rotated_formula(
        anchor_x in -500.0f64..500.0,
        anchor_y in -500.0f64..500.0,
        glyphs in 1usize..20,
    ) {
        let canvas = RecordingCanvas::new(Viewport::new(400, 300));
        let text = "7".repeat(glyphs);

        let placed = place_value_label(
            &canvas,
            Orientation::Vertical,
            YPositionBehavior::UpToElementMiddle,
            Size::default(),
            Point::new(anchor_x, anchor_y),
            &text,
            FONT_SIZE_PX,
        );

        let expected_x = anchor_y - placed.bounds.width / 2.0;
        let expected_y = -anchor_x + placed.bounds.height / 2.0;
        prop_assert!(abs_diff_eq!(placed.translate_x, expected_x, epsilon = 1e-9));
        prop_assert!(abs_diff_eq!(placed.translate_y, expected_y, epsilon = 1e-9));
        prop_assert_eq!(placed.rotation_degrees, 90.0);
    }
}
