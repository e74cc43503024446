//! Slots: rectangular placeholders that may hold a user profile.

use serde::{Deserialize, Serialize};

use crate::id::new_id;
use crate::user::User;

/// Where a slot's label text is drawn relative to the slot rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    /// Above the slot.
    Top,
    /// Below the slot.
    #[default]
    Bottom,
    /// Centered inside the slot.
    Center,
    /// Inside the slot, along its lower edge.
    Overlay,
}

/// Visual and text styling of a slot.
///
/// Every field is independently mutable; there are no cross-field
/// invariants. The default value is the single source of slot styling used
/// by the slot factory — call sites never re-derive these numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotStyle {
    /// Fill color behind the card.
    pub background_color: String,
    /// Border stroke color.
    pub border_color: String,
    /// Border stroke width in pixels.
    pub border_width: f64,
    /// Corner radius in pixels.
    pub border_radius: f64,
    /// Whole-slot opacity in `0..=1`.
    pub opacity: f64,
    /// Shadow blur radius in pixels.
    pub shadow_blur: f64,
    /// Shadow color.
    pub shadow_color: String,
    /// Shadow x offset in pixels.
    pub shadow_offset_x: f64,
    /// Shadow y offset in pixels.
    pub shadow_offset_y: f64,
    /// Label text color.
    pub text_color: String,
    /// Label text size in pixels.
    pub text_size: f64,
    /// Label placement.
    pub text_position: TextPosition,
    /// Whether the follower count line is drawn.
    pub show_followers: bool,
    /// Whether the description line is drawn.
    pub show_description: bool,
}

impl Default for SlotStyle {
    fn default() -> Self {
        Self {
            background_color: "rgba(255, 255, 255, 0.05)".to_string(),
            border_color: "rgba(255, 255, 255, 0.3)".to_string(),
            border_width: 2.0,
            border_radius: 15.0,
            opacity: 1.0,
            shadow_blur: 0.0,
            shadow_color: "rgba(0, 0, 0, 0.5)".to_string(),
            shadow_offset_x: 0.0,
            shadow_offset_y: 0.0,
            text_color: "#ffffff".to_string(),
            text_size: 8.0,
            text_position: TextPosition::Bottom,
            show_followers: false,
            show_description: false,
        }
    }
}

/// A positioned rectangular placeholder on the canvas.
///
/// Slots are created exclusively by the layout generator and are never
/// destroyed individually — only as part of whole-layout deletion. Every
/// field except `id` may change afterward through the mutation operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique identifier, fixed for the slot's lifetime.
    pub id: String,
    /// Occupant, if any.
    pub user: Option<User>,
    /// Left edge in canvas coordinates.
    pub x: f64,
    /// Top edge in canvas coordinates.
    pub y: f64,
    /// Width in pixels, positive.
    pub width: f64,
    /// Height in pixels, positive.
    pub height: f64,
    /// Rotation in degrees, interpreted mod 360.
    pub rotation: f64,
    /// Uniform scale factor, positive.
    pub scale: f64,
    /// Visual and text styling.
    #[serde(flatten)]
    pub style: SlotStyle,
    /// Owning category, present only in tier-list layouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl Slot {
    /// Create an unoccupied square slot at `(x, y)` with the default style.
    ///
    /// `side` must be positive. Final placement (including category
    /// membership) is the caller's concern; the factory knows nothing about
    /// the layout's grouping context.
    pub fn at(x: f64, y: f64, side: f64) -> Self {
        Self {
            id: new_id(),
            user: None,
            x,
            y,
            width: side,
            height: side,
            rotation: 0.0,
            scale: 1.0,
            style: SlotStyle::default(),
            category_id: None,
        }
    }

    /// Whether a user currently occupies the slot.
    pub fn is_occupied(&self) -> bool {
        self.user.is_some()
    }

    /// Right edge in canvas coordinates.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge in canvas coordinates.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Vertical center in canvas coordinates.
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Whether this slot's bounding box intersects another's.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_builds_square_unoccupied_slot_with_default_style() {
        let slot = Slot::at(10.0, 20.0, 100.0);
        assert_eq!(slot.width, slot.height);
        assert!(!slot.is_occupied());
        assert!(slot.category_id.is_none());
        assert_eq!(slot.rotation, 0.0);
        assert_eq!(slot.scale, 1.0);
        assert_eq!(slot.style, SlotStyle::default());
    }

    #[test]
    fn style_fields_serialize_flattened() {
        let slot = Slot::at(0.0, 0.0, 50.0);
        let json = serde_json::to_value(&slot).expect("slot serializes");
        assert_eq!(json["border_radius"], 15.0);
        assert_eq!(json["text_position"], "bottom");
        assert!(json.get("category_id").is_none());
    }

    #[test]
    fn overlap_is_strict_about_touching_edges() {
        let a = Slot::at(0.0, 0.0, 100.0);
        let b = Slot::at(100.0, 0.0, 100.0);
        let c = Slot::at(99.0, 0.0, 100.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }
}
