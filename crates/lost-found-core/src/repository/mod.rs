//! Repository Layer
//!
//! - traits: the `ItemApi` transport abstraction
//! - http: reqwest implementation against the REST store
//! - client: `ItemRepository`, the read/write policies the pages use

mod client;
mod error;
mod http;
mod traits;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{ItemCollections, ItemRepository};
pub use error::{ApiError, ApiResult};
pub use http::{collection_url, item_url, HttpItemApi};
pub use traits::ItemApi;
