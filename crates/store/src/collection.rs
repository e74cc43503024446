//! The saved layout collection and the current-layout reference.

use chrono::Utc;
use tracing::warn;

use tiergrid_core::{new_id, Layout};

use crate::kv::KvStore;

/// Key the serialized collection lives under.
pub const COLLECTION_KEY: &str = "layouts";

/// Saved layouts plus the single layout currently open for editing.
///
/// The collection is read once at startup and written back whole on every
/// mutating call. A missing or unparseable persisted value degrades to an
/// empty collection; a failed write logs a warning and leaves the session
/// running in memory. Neither case is an error to callers.
pub struct LayoutStore<S: KvStore> {
    store: S,
    layouts: Vec<Layout>,
    current: Option<Layout>,
}

impl<S: KvStore> LayoutStore<S> {
    /// Open the collection backed by `store`.
    pub fn open(store: S) -> Self {
        let layouts = match store.get(COLLECTION_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Layout>>(&raw) {
                Ok(layouts) => layouts,
                Err(err) => {
                    warn!("Failed to parse saved layouts: {err}. Starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        for layout in &layouts {
            let orphans = layout.orphaned_category_ids();
            if !orphans.is_empty() {
                warn!(
                    "Layout {} references missing categories: {}",
                    layout.id,
                    orphans.join(", ")
                );
            }
        }

        Self {
            store,
            layouts,
            current: None,
        }
    }

    /// Number of saved layouts.
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Saved layouts in insertion order.
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    /// Fetch a saved layout without making it current.
    pub fn get(&self, id: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.id == id)
    }

    /// The layout currently open for editing, if any.
    pub fn current(&self) -> Option<&Layout> {
        self.current.as_ref()
    }

    /// Replace the current layout reference without persisting anything.
    pub fn set_current(&mut self, layout: Option<Layout>) {
        self.current = layout;
    }

    /// Take the current layout out of the session, leaving none.
    pub fn take_current(&mut self) -> Option<Layout> {
        self.current.take()
    }

    /// Upsert `layout` into the collection, stamping `updated_at`, and
    /// persist. If the saved layout is also the current one, the current
    /// reference picks up the stamped value.
    pub fn save(&mut self, mut layout: Layout) {
        layout.touch();

        if let Some(existing) = self.layouts.iter_mut().find(|l| l.id == layout.id) {
            *existing = layout.clone();
        } else {
            self.layouts.push(layout.clone());
        }

        if self.current.as_ref().is_some_and(|c| c.id == layout.id) {
            self.current = Some(layout);
        }

        self.persist();
    }

    /// Return the saved layout with `id` and make it current.
    ///
    /// Not-found is a recoverable signal: callers fall back to creating a
    /// fresh layout under the requested id.
    pub fn load(&mut self, id: &str) -> Option<&Layout> {
        let layout = self.layouts.iter().find(|l| l.id == id)?.clone();
        self.current = Some(layout);
        self.current.as_ref()
    }

    /// Remove the layout with `id` from the collection and persist.
    ///
    /// Clears the current reference when it pointed at the deleted layout.
    pub fn delete(&mut self, id: &str) {
        self.layouts.retain(|l| l.id != id);
        if self.current.as_ref().is_some_and(|c| c.id == id) {
            self.current = None;
        }
        self.persist();
    }

    /// Deep-copy the layout with `id` under fresh identity.
    ///
    /// The copy gets a new layout id, new ids for every slot, fresh
    /// timestamps and a "(Copy)" name suffix; categories are copied
    /// verbatim so slot references stay valid. The copy is inserted into
    /// the collection but not made current.
    pub fn duplicate(&mut self, id: &str) -> Option<Layout> {
        let original = self.layouts.iter().find(|l| l.id == id)?;

        let mut copy = original.clone();
        copy.id = new_id();
        copy.name = format!("{} (Copy)", original.name);
        let now = Utc::now();
        copy.created_at = now;
        copy.updated_at = now;
        for slot in &mut copy.slots {
            slot.id = new_id();
        }

        self.layouts.push(copy.clone());
        self.persist();
        Some(copy)
    }

    /// Write the whole collection back to storage.
    ///
    /// An unavailable store degrades to an in-memory-only session.
    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.layouts) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!("Failed to serialize layout collection: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(COLLECTION_KEY, &serialized) {
            warn!("Failed to persist layout collection: {err}. Continuing in memory");
        }
    }
}
