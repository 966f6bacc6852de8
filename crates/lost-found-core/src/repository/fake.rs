//! In-memory `ItemApi` for tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{ApiError, ApiResult, ItemApi};
use crate::domain::{Item, ItemId, ItemKind, NewItemRecord};

#[derive(Default)]
pub struct FakeItemApi {
    pub lost: RefCell<Vec<Item>>,
    pub found: RefCell<Vec<Item>>,
    /// Every call as `METHOD collection[/id][?userName=..]`
    pub calls: RefCell<Vec<String>>,
    /// Collection whose reads fail with 500
    pub failing_reads: Cell<Option<ItemKind>>,
    /// Status returned by every write when set
    pub failing_writes: Cell<Option<u16>>,
    next_id: Cell<u64>,
}

impl FakeItemApi {
    pub fn with_items(lost: Vec<Item>, found: Vec<Item>) -> Self {
        let next = (lost.len() + found.len()) as u64 + 100;
        let api = Self { lost: RefCell::new(lost), found: RefCell::new(found), ..Default::default() };
        api.next_id.set(next);
        api
    }

    fn store(&self, kind: ItemKind) -> &RefCell<Vec<Item>> {
        match kind {
            ItemKind::Lost => &self.lost,
            ItemKind::Found => &self.found,
        }
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn write_failure(&self, kind: ItemKind) -> ApiResult<()> {
        match self.failing_writes.get() {
            Some(status) => Err(ApiError::Status {
                collection: kind.collection(),
                status,
                reason: "Internal Server Error".to_string(),
            }),
            None => Ok(()),
        }
    }
}

pub fn item(id: u64, name: &str, user: &str, created_at: &str) -> Item {
    Item {
        id: ItemId::Number(id),
        item_name: name.to_string(),
        category: None,
        location: None,
        date: None,
        description: String::new(),
        user_name: user.to_string(),
        contact: format!("{}@example.com", user),
        created_at: created_at.to_string(),
        status: Some("active".to_string()),
        turned_in: None,
    }
}

#[async_trait(?Send)]
impl ItemApi for FakeItemApi {
    async fn list(&self, kind: ItemKind, user_name: Option<&str>) -> ApiResult<Vec<Item>> {
        match user_name {
            Some(name) => self.record(format!("GET {}?userName={}", kind.collection(), name)),
            None => self.record(format!("GET {}", kind.collection())),
        }
        if self.failing_reads.get() == Some(kind) {
            return Err(ApiError::Status {
                collection: kind.collection(),
                status: 500,
                reason: "Internal Server Error".to_string(),
            });
        }
        let items = self.store(kind).borrow();
        Ok(items
            .iter()
            .filter(|item| user_name.map_or(true, |name| item.user_name == name))
            .cloned()
            .collect())
    }

    async fn create(&self, kind: ItemKind, record: &NewItemRecord) -> ApiResult<Item> {
        self.record(format!("POST {}", kind.collection()));
        self.write_failure(kind)?;

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let mut value = serde_json::to_value(record).expect("record serializes");
        value["id"] = serde_json::json!(id);
        let created: Item = serde_json::from_value(value).expect("record deserializes as item");
        self.store(kind).borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, kind: ItemKind, id: &ItemId, item: &Item) -> ApiResult<Item> {
        self.record(format!("PUT {}/{}", kind.collection(), id));
        self.write_failure(kind)?;

        let mut items = self.store(kind).borrow_mut();
        match items.iter_mut().find(|existing| &existing.id == id) {
            Some(existing) => {
                *existing = Item { id: id.clone(), ..item.clone() };
                Ok(existing.clone())
            }
            None => Err(ApiError::Status {
                collection: kind.collection(),
                status: 404,
                reason: "Not Found".to_string(),
            }),
        }
    }

    async fn delete(&self, kind: ItemKind, id: &ItemId) -> ApiResult<()> {
        self.record(format!("DELETE {}/{}", kind.collection(), id));
        self.write_failure(kind)?;

        let mut items = self.store(kind).borrow_mut();
        let before = items.len();
        items.retain(|existing| &existing.id != id);
        if items.len() == before {
            return Err(ApiError::Status {
                collection: kind.collection(),
                status: 404,
                reason: "Not Found".to_string(),
            });
        }
        Ok(())
    }
}
