//! Domain Layer
//!
//! Item records and report payloads.
//! No I/O here, only serde and chrono.

mod draft;
mod item;

pub use draft::{ItemDraft, NewItemRecord, STATUS_ACTIVE};
pub use item::{parse_timestamp, Item, ItemId, ItemKind, TaggedItem};
