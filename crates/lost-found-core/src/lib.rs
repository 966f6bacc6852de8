//! Lost & Found Core
//!
//! Everything the board does that is not rendering:
//! - domain: item records and report payloads
//! - repository: REST client with degrade-on-read / propagate-on-write policies
//! - filter, pagination, view_state: the items board pipeline
//! - report, dashboard: form coercion and the per-user view
//! - storage, config: remembered user name and fixed settings

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod filter;
pub mod pagination;
pub mod report;
pub mod repository;
pub mod storage;
pub mod view_state;

pub use config::ClientConfig;
pub use domain::{Item, ItemDraft, ItemId, ItemKind, TaggedItem};
pub use filter::{aggregate, DateRange, ItemFilter, KindFilter};
pub use pagination::{paginate, Page, PageControls};
pub use repository::{ApiError, ApiResult, HttpItemApi, ItemApi, ItemCollections, ItemRepository};
pub use view_state::{FilterChange, FilterEdit, ViewState};
