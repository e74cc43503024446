//! Editing session state: the saved collection plus the open layout.
//!
//! Explicit context object passed to commands, initialized at session
//! start and torn down at session end; every mutating call persists
//! through the underlying store.

use tiergrid_core::{Canvas, Layout, TemplateKind, User};
use tiergrid_layout::{
    assign_user, clear_all, clear_user, create_layout, update_slot, with_background, SlotPatch,
};
use tiergrid_store::{KvStore, LayoutStore};

/// One user's editing session.
pub struct EditorSession<S: KvStore> {
    store: LayoutStore<S>,
    canvas: Canvas,
}

impl<S: KvStore> EditorSession<S> {
    /// Start a session over `store`, generating new layouts for `canvas`.
    pub fn new(store: S, canvas: Canvas) -> Self {
        Self {
            store: LayoutStore::open(store),
            canvas,
        }
    }

    /// Saved layouts in insertion order.
    pub fn layouts(&self) -> &[Layout] {
        self.store.layouts()
    }

    /// Fetch a saved layout without opening it.
    pub fn get(&self, id: &str) -> Option<&Layout> {
        self.store.get(id)
    }

    /// The layout currently open for editing.
    pub fn current(&self) -> Option<&Layout> {
        self.store.current()
    }

    /// Generate a new layout, save it and open it for editing.
    pub fn create(&mut self, name: Option<&str>, kind: TemplateKind) -> &Layout {
        let layout = create_layout(name, kind, self.canvas);
        self.store.save(layout.clone());
        self.store.set_current(Some(layout));
        self.store.current().expect("current was just set")
    }

    /// Open the layout saved under `id`, or — when it does not exist —
    /// create a fresh `kind` layout that keeps the requested id, save it
    /// and open that instead.
    pub fn open(&mut self, id: &str, kind: TemplateKind) -> &Layout {
        if self.store.load(id).is_none() {
            let mut fresh = create_layout(None, kind, self.canvas);
            fresh.id = id.to_string();
            self.store.save(fresh.clone());
            self.store.set_current(Some(fresh));
        }
        self.store.current().expect("open always leaves a current layout")
    }

    /// Persist the current layout into the collection.
    ///
    /// Returns false when no layout is open.
    pub fn save_current(&mut self) -> bool {
        match self.store.current().cloned() {
            Some(current) => {
                self.store.save(current);
                true
            }
            None => false,
        }
    }

    /// Delete a saved layout; a matching open layout closes.
    pub fn delete(&mut self, id: &str) {
        self.store.delete(id);
    }

    /// Copy a saved layout under fresh identity without opening the copy.
    pub fn duplicate(&mut self, id: &str) -> Option<Layout> {
        self.store.duplicate(id)
    }

    /// Put `user` into a slot of the open layout.
    pub fn assign_user(&mut self, slot_id: &str, user: User) -> bool {
        self.edit(|layout| assign_user(layout, slot_id, user))
    }

    /// Empty a slot of the open layout.
    pub fn clear_slot(&mut self, slot_id: &str) -> bool {
        self.edit(|layout| clear_user(layout, slot_id))
    }

    /// Empty every slot of the open layout.
    pub fn clear_all_slots(&mut self) -> bool {
        self.edit(clear_all)
    }

    /// Patch a slot of the open layout.
    pub fn update_slot(&mut self, slot_id: &str, patch: &SlotPatch) -> bool {
        self.edit(|layout| update_slot(layout, slot_id, patch))
    }

    /// Replace the open layout's background spec.
    pub fn set_background(&mut self, color: &str) -> bool {
        self.edit(|layout| with_background(layout, color))
    }

    /// Apply a pure transformation to the open layout.
    ///
    /// Returns false (leaving everything untouched) when none is open.
    fn edit(&mut self, f: impl FnOnce(Layout) -> Layout) -> bool {
        match self.store.take_current() {
            Some(current) => {
                self.store.set_current(Some(f(current)));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiergrid_store::MemoryStore;
    use tiergrid_testkit::sample_user;

    fn session() -> EditorSession<MemoryStore> {
        EditorSession::new(MemoryStore::new(), Canvas::default())
    }

    #[test]
    fn open_of_a_missing_id_creates_under_that_id() {
        let mut session = session();
        let layout = session.open("wanted-id", TemplateKind::Default);
        assert_eq!(layout.id, "wanted-id");
        assert_eq!(layout.slots.len(), 12);

        // The fallback layout was saved, not just opened.
        assert!(session.get("wanted-id").is_some());
    }

    #[test]
    fn open_of_a_saved_id_loads_it() {
        let mut session = session();
        let id = session.create(Some("Board"), TemplateKind::TierList).id.clone();
        session.open("other", TemplateKind::Default);

        let layout = session.open(&id, TemplateKind::Default);
        assert_eq!(layout.name, "Board");
        assert_eq!(layout.template_kind, TemplateKind::TierList);
    }

    #[test]
    fn edits_require_an_open_layout() {
        let mut session = session();
        assert!(!session.set_background("#fff"));
        assert!(!session.clear_all_slots());

        session.create(None, TemplateKind::Default);
        assert!(session.set_background("#fff"));
        assert_eq!(
            session.current().map(|l| l.background_color.as_str()),
            Some("#fff")
        );
    }

    #[test]
    fn assignment_flows_into_the_saved_copy_only_on_save() {
        let mut session = session();
        let id = session.create(None, TemplateKind::Default).id.clone();
        let slot_id = session.current().expect("open").slots[0].id.clone();

        session.assign_user(&slot_id, sample_user("ada"));
        assert_eq!(session.get(&id).expect("saved").occupied_count(), 0);

        assert!(session.save_current());
        assert_eq!(session.get(&id).expect("saved").occupied_count(), 1);
    }

    #[test]
    fn deleting_the_open_layout_closes_it() {
        let mut session = session();
        let id = session.create(None, TemplateKind::Default).id.clone();
        session.delete(&id);
        assert!(session.current().is_none());
        assert!(session.get(&id).is_none());
    }
}
