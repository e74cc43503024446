//! The layout aggregate: canvas settings, slots and categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::slot::Slot;

/// Generation strategy selector for new layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateKind {
    /// Uniform centered grid.
    #[default]
    #[serde(rename = "default")]
    Default,
    /// Categorized rows under labeled bands.
    #[serde(rename = "tierList")]
    TierList,
}

/// Fixed output dimensions a layout is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
}

impl Canvas {
    /// Create a canvas with explicit dimensions.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

/// The full saved/editable unit combining canvas settings, slots and
/// categories.
///
/// The layout exclusively owns its slots and categories. Slot count and
/// geometry are fixed at creation for a given template kind and canvas
/// size; only slot contents and style change afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Slot count, used for display and preview grids.
    pub size: usize,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Background color or gradient spec, passed through to the renderer
    /// opaquely.
    pub background_color: String,
    /// Optional background image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    /// Slots in generation order (row-major for grids, band-major for tier
    /// lists).
    pub slots: Vec<Slot>,
    /// Category bands; present only for tier-list layouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    /// The strategy this layout was generated with.
    pub template_kind: TemplateKind,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last mutation instant.
    pub updated_at: DateTime<Utc>,
}

impl Layout {
    /// The canvas this layout was generated for.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Look up a slot by id.
    pub fn slot(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    /// Look up a category by id.
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories
            .as_deref()
            .and_then(|cats| cats.iter().find(|c| c.id == category_id))
    }

    /// Category bands, empty for uniform layouts.
    pub fn categories(&self) -> &[Category] {
        self.categories.as_deref().unwrap_or_default()
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    /// Refresh the last-mutation timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Category ids referenced by slots but absent from the category list.
    ///
    /// Orphaned references are a data-integrity warning, not an error: the
    /// association is a deliberate weak reference and stale ids are
    /// tolerated rather than repaired.
    pub fn orphaned_category_ids(&self) -> Vec<&str> {
        let mut orphans: Vec<&str> = self
            .slots
            .iter()
            .filter_map(|s| s.category_id.as_deref())
            .filter(|id| self.category(id).is_none())
            .collect();
        orphans.sort_unstable();
        orphans.dedup();
        orphans
    }
}
