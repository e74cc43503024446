//! Categories: labeled horizontal bands used by tier-list layouts.

use serde::{Deserialize, Serialize};

/// A labeled horizontal band grouping slots in a tier-list layout.
///
/// Slots reference their band through `Slot::category_id` — a soft foreign
/// key, not an ownership link — so a slot can be reassigned or orphaned
/// without cascading structural changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: String,
    /// Label drawn in the band header.
    pub title: String,
    /// Top edge of the band in canvas coordinates.
    pub y_position: f64,
    /// Total band height (header plus content sub-band).
    pub height: f64,
    /// Band tint color.
    pub background_color: String,
    /// Label text color.
    pub text_color: String,
    /// Label font size in pixels.
    pub font_size: f64,
    /// Optional icon drawn next to the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Category {
    /// Bottom edge of the band in canvas coordinates.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y_position + self.height
    }

    /// Whether a canvas y-coordinate falls within the band's vertical span.
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.y_position && y <= self.bottom()
    }

    /// Whether this band's vertical span intersects another's.
    pub fn overlaps(&self, other: &Category) -> bool {
        self.y_position < other.bottom() && other.y_position < self.bottom()
    }
}
