//! Backend Calls
//!
//! Every call goes through the core repository, so reads degrade to empty
//! results and writes come back as display strings.

use lost_found_core::dashboard::{confirm_delete, DeleteDialog, DeleteOutcome};
use lost_found_core::report::ReportForm;
use lost_found_core::{ClientConfig, HttpItemApi, Item, ItemCollections, ItemKind, ItemRepository, TaggedItem};

pub fn config() -> ClientConfig {
    ClientConfig::default()
}

fn repository() -> ItemRepository<HttpItemApi> {
    ItemRepository::new(HttpItemApi::from_config(&config()))
}

pub async fn list_recent() -> Vec<TaggedItem> {
    repository().list_recent(config().recent_limit).await
}

pub async fn list_all() -> ItemCollections {
    repository().list_all().await
}

pub async fn list_by_user(user_name: &str) -> ItemCollections {
    repository().list_by_user(user_name).await
}

pub async fn report_item(kind: ItemKind, form: &ReportForm) -> Result<Item, String> {
    repository()
        .create(kind, form.to_draft(kind))
        .await
        .map_err(|e| e.to_string())
}

pub async fn delete_item(dialog: &DeleteDialog) -> DeleteOutcome {
    confirm_delete(&repository(), dialog).await
}
