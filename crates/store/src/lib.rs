#![warn(missing_docs)]
//! Persistence for the layout collection.
//!
//! A [`KvStore`] is the narrow storage seam (one key holds the whole
//! serialized collection); [`LayoutStore`] layers the collection and
//! current-layout semantics on top. Storage trouble degrades — corrupt
//! state reads as an empty collection and failed writes leave the session
//! in-memory — it never terminates the editor.

pub mod collection;
pub mod kv;

pub use collection::{LayoutStore, COLLECTION_KEY};
pub use kv::{FileStore, KvStore, MemoryStore, StoreError};
