//! Item Repository Client
//!
//! Read/write policies on top of an [`ItemApi`]:
//! - reads log and degrade to empty results, they never fail;
//! - writes log and hand the error back to the caller.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use super::{ApiResult, ItemApi};
use crate::domain::{Item, ItemDraft, ItemId, ItemKind, TaggedItem};
use crate::filter::tag_items;

/// Both collections as fetched, untagged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCollections {
    pub lost: Vec<Item>,
    pub found: Vec<Item>,
}

impl ItemCollections {
    pub fn tagged(&self) -> Vec<TaggedItem> {
        tag_items(&self.lost, &self.found)
    }

    pub fn total(&self) -> usize {
        self.lost.len() + self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone)]
pub struct ItemRepository<A> {
    api: A,
}

impl<A: ItemApi> ItemRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// All records of one collection; empty on any failure
    pub async fn list(&self, kind: ItemKind) -> Vec<Item> {
        self.list_matching(kind, None).await
    }

    async fn list_matching(&self, kind: ItemKind, user_name: Option<&str>) -> Vec<Item> {
        match self.api.list(kind, user_name).await {
            Ok(items) => {
                log::debug!("Fetched {} {} items", items.len(), kind);
                items
            }
            Err(e) => {
                log::error!("Failed to fetch {} items: {}", kind, e);
                Vec::new()
            }
        }
    }

    /// Report a new item, stamped with the current time
    pub async fn create(&self, kind: ItemKind, draft: ItemDraft) -> ApiResult<Item> {
        self.create_at(kind, draft, Utc::now()).await
    }

    /// Report a new item stamped with `now`
    pub async fn create_at(&self, kind: ItemKind, draft: ItemDraft, now: DateTime<Utc>) -> ApiResult<Item> {
        let record = draft.stamp(now);
        match self.api.create(kind, &record).await {
            Ok(created) => {
                log::info!("Reported {} item {}", kind, created.id);
                Ok(created)
            }
            Err(e) => {
                log::error!("Failed to report {} item: {}", kind, e);
                Err(e)
            }
        }
    }

    /// Full replace of the record with `id`
    pub async fn update(&self, kind: ItemKind, id: &ItemId, item: &Item) -> ApiResult<Item> {
        self.api.update(kind, id, item).await.map_err(|e| {
            log::error!("Failed to update {} item {}: {}", kind, id, e);
            e
        })
    }

    pub async fn delete(&self, kind: ItemKind, id: &ItemId) -> ApiResult<()> {
        match self.api.delete(kind, id).await {
            Ok(()) => {
                log::info!("Deleted {} item {}", kind, id);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to delete {} item {}: {}", kind, id, e);
                Err(e)
            }
        }
    }

    /// Both collections, fetched concurrently
    pub async fn list_all(&self) -> ItemCollections {
        let (lost, found) = futures::join!(self.list(ItemKind::Lost), self.list(ItemKind::Found));
        ItemCollections { lost, found }
    }

    /// Both collections filtered server-side by exact `userName`
    pub async fn list_by_user(&self, user_name: &str) -> ItemCollections {
        let (lost, found) = futures::join!(
            self.list_matching(ItemKind::Lost, Some(user_name)),
            self.list_matching(ItemKind::Found, Some(user_name))
        );
        ItemCollections { lost, found }
    }

    /// Newest `limit` records across both collections by `createdAt`
    pub async fn list_recent(&self, limit: usize) -> Vec<TaggedItem> {
        let mut items = self.list_all().await.tagged();
        items.sort_by_cached_key(|tagged| Reverse(tagged.item.created_date()));
        items.truncate(limit);
        items
    }
}
