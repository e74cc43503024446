#![warn(missing_docs)]
//! Drawing-surface contract and scene composition.
//!
//! Rendering itself is an external collaborator: this crate defines the
//! [`Surface`] trait the editor drives and builds the paint-ordered
//! [`Scene`] a surface consumes. Nothing here rasterizes.

pub mod scene;
pub mod surface;

pub use scene::{DrawOp, ExportFormat, ExportOptions, Scene, Shadow, TextAlign};
pub use surface::{present, RecordingSurface, Surface};
