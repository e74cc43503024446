//! Property-based tests for layout generation
//!
//! Validates geometry invariants across canvas sizes:
//! - Grid slots stay square, equal-sized, inside the canvas and disjoint
//! - Tier bands stack without overlapping and own their slots vertically
//! - Mutations never change slot count or geometry

use proptest::prelude::*;
use tiergrid_core::{Canvas, TemplateKind};
use tiergrid_layout::generate::tier_bands;
use tiergrid_layout::{assign_user, clear_all, create_layout};
use tiergrid_testkit::sample_user;

const EPS: f64 = 1e-6;

/// Canvases large enough that the margin-reduced area stays positive.
fn sane_canvas() -> impl Strategy<Value = Canvas> {
    (900.0f64..4000.0, 700.0f64..3000.0).prop_map(|(w, h)| Canvas::new(w, h))
}

proptest! {
    /// Property: the uniform grid always emits exactly cols x rows squares
    /// of one shared side length.
    #[test]
    fn grid_emits_equal_squares(canvas in sane_canvas()) {
        let layout = create_layout(None, TemplateKind::Default, canvas);
        prop_assert_eq!(layout.slots.len(), 12);
        prop_assert_eq!(layout.size, 12);

        let side = layout.slots[0].width;
        for slot in &layout.slots {
            prop_assert!(slot.width > 0.0);
            prop_assert!((slot.width - slot.height).abs() < EPS);
            prop_assert!((slot.width - side).abs() < EPS);
        }
    }

    /// Property: grid slots stay inside the outer margins and never overlap
    /// pairwise.
    #[test]
    fn grid_slots_are_contained_and_disjoint(canvas in sane_canvas()) {
        let layout = create_layout(None, TemplateKind::Default, canvas);
        for slot in &layout.slots {
            prop_assert!(slot.x >= 150.0 - EPS);
            prop_assert!(slot.y >= 200.0 - EPS);
            prop_assert!(slot.right() <= canvas.width - 150.0 + EPS);
            prop_assert!(slot.bottom() <= canvas.height - 200.0 + EPS);
        }
        for (i, a) in layout.slots.iter().enumerate() {
            for b in layout.slots.iter().skip(i + 1) {
                prop_assert!(!a.overlaps(b), "slots {} and {} overlap", a.id, b.id);
            }
        }
    }

    /// Property: tier bands stack in strictly increasing, non-overlapping
    /// vertical spans and every slot references a generated band whose
    /// content sub-band centers it.
    #[test]
    fn tier_bands_stack_and_own_their_slots(canvas in sane_canvas()) {
        let (categories, slots) = tier_bands(canvas, 4);
        prop_assert_eq!(categories.len(), 4);

        for pair in categories.windows(2) {
            prop_assert!(pair[0].y_position < pair[1].y_position);
            prop_assert!(!pair[0].overlaps(&pair[1]));
        }

        for slot in &slots {
            prop_assert!(slot.width > 0.0 && slot.height > 0.0);
            prop_assert!(slot.right() <= canvas.width - 30.0 + EPS);
            let id = slot.category_id.as_deref().expect("tier slot has a band");
            let category = categories
                .iter()
                .find(|c| c.id == id)
                .expect("band id was generated");
            let content_top = category.y_position + 60.0;
            let content_center = content_top + (category.height - 60.0) / 2.0;
            prop_assert!((slot.center_y() - content_center).abs() < EPS);
        }
    }

    /// Property: occupancy mutations preserve slot count and geometry.
    #[test]
    fn mutations_never_move_slots(canvas in sane_canvas(), pick in 0usize..12) {
        let layout = create_layout(None, TemplateKind::Default, canvas);
        let slot_id = layout.slots[pick].id.clone();
        let geometry: Vec<(f64, f64, f64, f64)> = layout
            .slots
            .iter()
            .map(|s| (s.x, s.y, s.width, s.height))
            .collect();

        let layout = assign_user(layout, &slot_id, sample_user("ada"));
        let layout = clear_all(layout);

        prop_assert_eq!(layout.slots.len(), geometry.len());
        for (slot, (x, y, w, h)) in layout.slots.iter().zip(geometry) {
            prop_assert_eq!(slot.x, x);
            prop_assert_eq!(slot.y, y);
            prop_assert_eq!(slot.width, w);
            prop_assert_eq!(slot.height, h);
        }
    }
}
