#![warn(missing_docs)]
//! Layout generation and editing.
//!
//! The generator computes the full set of slots (and, for tier lists,
//! category bands) for a template kind and canvas size in one deterministic
//! pass. The mutation module then transforms the resulting layout through
//! pure, non-destructive updates; slot count and geometry never change after
//! creation.

pub mod action;
pub mod generate;
pub mod mutate;
pub mod template;

pub use action::{slot_activate, slot_activate_double, SlotAction};
pub use generate::create_layout;
pub use mutate::{assign_user, clear_all, clear_user, update_slot, with_background, SlotPatch};
