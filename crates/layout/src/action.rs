//! Pointer activation contract between the editing surface and the core.
//!
//! Click handling is a synchronous request/response decision based purely
//! on slot occupancy — no hidden control flow.

use tiergrid_core::Layout;

/// Editor response to pointer activity on a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotAction {
    /// Prompt the user picker for the slot.
    OpenUserPicker(String),
    /// Select or deselect the slot.
    ToggleSelection(String),
}

/// Decide the response to a single click on `slot_id`.
///
/// An empty slot prompts for an occupant; a filled slot toggles selection.
/// Unknown ids produce no action.
pub fn slot_activate(layout: &Layout, slot_id: &str) -> Option<SlotAction> {
    let slot = layout.slot(slot_id)?;
    if slot.is_occupied() {
        Some(SlotAction::ToggleSelection(slot.id.clone()))
    } else {
        Some(SlotAction::OpenUserPicker(slot.id.clone()))
    }
}

/// Decide the response to a double click on `slot_id`.
///
/// A filled slot re-prompts for its occupant; an empty slot does nothing
/// (the single-click path already opened the picker).
pub fn slot_activate_double(layout: &Layout, slot_id: &str) -> Option<SlotAction> {
    let slot = layout.slot(slot_id)?;
    slot.is_occupied()
        .then(|| SlotAction::OpenUserPicker(slot.id.clone()))
}
