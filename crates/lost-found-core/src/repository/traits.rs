//! Repository Layer - Transport Trait
//!
//! The raw REST operations on one collection. Implementations report every
//! failure; the read/write policies live in [`super::ItemRepository`].

use async_trait::async_trait;

use super::ApiResult;
use crate::domain::{Item, ItemId, ItemKind, NewItemRecord};

/// CRUD over the `lostItems` / `foundItems` collections.
///
/// Futures are `?Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait ItemApi {
    /// `GET /{collection}`, optionally `?userName=` exact match
    async fn list(&self, kind: ItemKind, user_name: Option<&str>) -> ApiResult<Vec<Item>>;

    /// `POST /{collection}`
    async fn create(&self, kind: ItemKind, record: &NewItemRecord) -> ApiResult<Item>;

    /// `PUT /{collection}/{id}` (full replace)
    async fn update(&self, kind: ItemKind, id: &ItemId, item: &Item) -> ApiResult<Item>;

    /// `DELETE /{collection}/{id}`
    async fn delete(&self, kind: ItemKind, id: &ItemId) -> ApiResult<()>;
}
