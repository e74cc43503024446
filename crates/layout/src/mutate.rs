//! Pure partial updates over an existing layout.
//!
//! Every operation consumes a layout and returns the transformed value,
//! refreshing `updated_at`. Geometry and slot count never change here; a
//! slot id that matches nothing is a silent miss, not an error.

use serde::{Deserialize, Serialize};

use tiergrid_core::{Layout, TextPosition, User};

/// Replace the user occupying `slot_id`.
///
/// Unknown ids leave every slot untouched but still stamp `updated_at`.
pub fn assign_user(mut layout: Layout, slot_id: &str, user: User) -> Layout {
    for slot in &mut layout.slots {
        if slot.id == slot_id {
            slot.user = Some(user);
            break;
        }
    }
    layout.touch();
    layout
}

/// Empty the slot identified by `slot_id`; same miss policy as assignment.
pub fn clear_user(mut layout: Layout, slot_id: &str) -> Layout {
    for slot in &mut layout.slots {
        if slot.id == slot_id {
            slot.user = None;
            break;
        }
    }
    layout.touch();
    layout
}

/// Empty every slot in one pass.
pub fn clear_all(mut layout: Layout) -> Layout {
    for slot in &mut layout.slots {
        slot.user = None;
    }
    layout.touch();
    layout
}

/// Replace the layout's background spec.
pub fn with_background(mut layout: Layout, color: &str) -> Layout {
    layout.background_color = color.to_string();
    layout.touch();
    layout
}

/// A partial update over the mutable slot fields.
///
/// Absent fields keep their current value; `id` and occupancy are not
/// patchable (occupancy has its own operations). Out-of-range numbers are
/// not validated here — input constraints belong to the editing surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotPatch {
    /// New left edge.
    pub x: Option<f64>,
    /// New top edge.
    pub y: Option<f64>,
    /// New width.
    pub width: Option<f64>,
    /// New height.
    pub height: Option<f64>,
    /// New rotation in degrees.
    pub rotation: Option<f64>,
    /// New uniform scale.
    pub scale: Option<f64>,
    /// New fill color.
    pub background_color: Option<String>,
    /// New border color.
    pub border_color: Option<String>,
    /// New border width.
    pub border_width: Option<f64>,
    /// New corner radius.
    pub border_radius: Option<f64>,
    /// New opacity.
    pub opacity: Option<f64>,
    /// New shadow blur radius.
    pub shadow_blur: Option<f64>,
    /// New shadow color.
    pub shadow_color: Option<String>,
    /// New shadow x offset.
    pub shadow_offset_x: Option<f64>,
    /// New shadow y offset.
    pub shadow_offset_y: Option<f64>,
    /// New label color.
    pub text_color: Option<String>,
    /// New label size.
    pub text_size: Option<f64>,
    /// New label placement.
    pub text_position: Option<TextPosition>,
    /// Toggle for the follower count line.
    pub show_followers: Option<bool>,
    /// Toggle for the description line.
    pub show_description: Option<bool>,
    /// New owning category reference (soft key, not validated here).
    pub category_id: Option<Option<String>>,
}

/// Shallow-merge `patch` into the slot identified by `slot_id`.
pub fn update_slot(mut layout: Layout, slot_id: &str, patch: &SlotPatch) -> Layout {
    for slot in &mut layout.slots {
        if slot.id != slot_id {
            continue;
        }
        if let Some(x) = patch.x {
            slot.x = x;
        }
        if let Some(y) = patch.y {
            slot.y = y;
        }
        if let Some(width) = patch.width {
            slot.width = width;
        }
        if let Some(height) = patch.height {
            slot.height = height;
        }
        if let Some(rotation) = patch.rotation {
            slot.rotation = rotation;
        }
        if let Some(scale) = patch.scale {
            slot.scale = scale;
        }
        if let Some(color) = &patch.background_color {
            slot.style.background_color = color.clone();
        }
        if let Some(color) = &patch.border_color {
            slot.style.border_color = color.clone();
        }
        if let Some(width) = patch.border_width {
            slot.style.border_width = width;
        }
        if let Some(radius) = patch.border_radius {
            slot.style.border_radius = radius;
        }
        if let Some(opacity) = patch.opacity {
            slot.style.opacity = opacity;
        }
        if let Some(blur) = patch.shadow_blur {
            slot.style.shadow_blur = blur;
        }
        if let Some(color) = &patch.shadow_color {
            slot.style.shadow_color = color.clone();
        }
        if let Some(dx) = patch.shadow_offset_x {
            slot.style.shadow_offset_x = dx;
        }
        if let Some(dy) = patch.shadow_offset_y {
            slot.style.shadow_offset_y = dy;
        }
        if let Some(color) = &patch.text_color {
            slot.style.text_color = color.clone();
        }
        if let Some(size) = patch.text_size {
            slot.style.text_size = size;
        }
        if let Some(position) = patch.text_position {
            slot.style.text_position = position;
        }
        if let Some(show) = patch.show_followers {
            slot.style.show_followers = show;
        }
        if let Some(show) = patch.show_description {
            slot.style.show_description = show;
        }
        if let Some(category_id) = &patch.category_id {
            slot.category_id = category_id.clone();
        }
        break;
    }
    layout.touch();
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::create_layout;
    use tiergrid_core::{Canvas, TemplateKind};
    use tiergrid_testkit::sample_user;

    fn grid() -> Layout {
        create_layout(None, TemplateKind::Default, Canvas::default())
    }

    #[test]
    fn assign_and_clear_round_trip() {
        let layout = grid();
        let slot_id = layout.slots[3].id.clone();

        let layout = assign_user(layout, &slot_id, sample_user("ada"));
        assert_eq!(layout.occupied_count(), 1);
        assert_eq!(
            layout.slot(&slot_id).and_then(|s| s.user.as_ref()).map(|u| u.screen_name.as_str()),
            Some("ada")
        );

        let layout = clear_user(layout, &slot_id);
        assert_eq!(layout.occupied_count(), 0);
    }

    #[test]
    fn unknown_slot_id_is_a_silent_miss_that_still_stamps() {
        let layout = grid();
        let before = layout.clone();

        let layout = assign_user(layout, "nonexistent-id", sample_user("ada"));
        assert_eq!(layout.slots, before.slots);
        assert_eq!(layout.slots.len(), before.slots.len());
        assert!(layout.updated_at >= before.updated_at);
    }

    #[test]
    fn empty_patch_changes_nothing_but_the_stamp() {
        let layout = grid();
        let slot_id = layout.slots[0].id.clone();
        let before = layout.clone();

        let layout = update_slot(layout, &slot_id, &SlotPatch::default());
        assert_eq!(layout.slots, before.slots);
        assert_eq!(layout.name, before.name);
        assert_eq!(layout.background_color, before.background_color);
    }

    #[test]
    fn patch_merges_only_the_present_fields() {
        let layout = grid();
        let slot_id = layout.slots[0].id.clone();
        let original_y = layout.slots[0].y;

        let patch = SlotPatch {
            x: Some(42.0),
            rotation: Some(370.0),
            text_position: Some(TextPosition::Overlay),
            show_followers: Some(true),
            ..SlotPatch::default()
        };
        let layout = update_slot(layout, &slot_id, &patch);

        let slot = layout.slot(&slot_id).expect("slot survives");
        assert_eq!(slot.x, 42.0);
        assert_eq!(slot.y, original_y);
        assert_eq!(slot.rotation, 370.0);
        assert_eq!(slot.style.text_position, TextPosition::Overlay);
        assert!(slot.style.show_followers);
        assert!(!slot.style.show_description);
    }

    #[test]
    fn patch_can_detach_a_slot_from_its_band() {
        let layout = create_layout(None, TemplateKind::TierList, Canvas::default());
        let slot_id = layout.slots[0].id.clone();

        let patch = SlotPatch {
            category_id: Some(None),
            ..SlotPatch::default()
        };
        let layout = update_slot(layout, &slot_id, &patch);
        assert!(layout.slot(&slot_id).expect("slot survives").category_id.is_none());
    }

    #[test]
    fn clear_all_empties_every_slot_in_one_pass() {
        let mut layout = grid();
        let ids: Vec<String> = layout.slots.iter().map(|s| s.id.clone()).collect();
        for id in &ids {
            layout = assign_user(layout, id, sample_user(id));
        }
        assert_eq!(layout.occupied_count(), ids.len());

        let layout = clear_all(layout);
        assert_eq!(layout.occupied_count(), 0);
        assert_eq!(layout.slots.len(), ids.len());
    }

    #[test]
    fn background_replacement_keeps_everything_else() {
        let layout = grid();
        let slots_before = layout.slots.clone();
        let layout = with_background(layout, "#112233");
        assert_eq!(layout.background_color, "#112233");
        assert_eq!(layout.slots, slots_before);
    }
}
