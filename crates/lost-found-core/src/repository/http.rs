//! HTTP transport
//!
//! [`ItemApi`] over a JSON REST store using reqwest (fetch in the browser).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, ItemApi};
use crate::config::ClientConfig;
use crate::domain::{Item, ItemId, ItemKind, NewItemRecord};

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone)]
pub struct HttpItemApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpItemApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client: reqwest::Client::new(), base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// `{base}/{collection}` plus the encoded `userName` filter
pub fn collection_url(base_url: &str, kind: ItemKind, user_name: Option<&str>) -> String {
    match user_name {
        Some(name) => format!(
            "{}/{}?userName={}",
            base_url,
            kind.collection(),
            utf8_percent_encode(name, URI_COMPONENT)
        ),
        None => format!("{}/{}", base_url, kind.collection()),
    }
}

/// `{base}/{collection}/{id}`
pub fn item_url(base_url: &str, kind: ItemKind, id: &ItemId) -> String {
    format!(
        "{}/{}/{}",
        base_url,
        kind.collection(),
        utf8_percent_encode(&id.to_string(), URI_COMPONENT)
    )
}

fn transport(kind: ItemKind) -> impl FnOnce(reqwest::Error) -> ApiError {
    move |source| ApiError::Transport { collection: kind.collection(), source }
}

/// Any non-2xx status is a failure
fn ensure_success(kind: ItemKind, response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            collection: kind.collection(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(kind: ItemKind, response: reqwest::Response) -> ApiResult<T> {
    ensure_success(kind, response)?
        .json::<T>()
        .await
        .map_err(transport(kind))
}

#[async_trait(?Send)]
impl ItemApi for HttpItemApi {
    async fn list(&self, kind: ItemKind, user_name: Option<&str>) -> ApiResult<Vec<Item>> {
        let response = self
            .client
            .get(collection_url(&self.base_url, kind, user_name))
            .send()
            .await
            .map_err(transport(kind))?;
        read_json(kind, response).await
    }

    async fn create(&self, kind: ItemKind, record: &NewItemRecord) -> ApiResult<Item> {
        let response = self
            .client
            .post(collection_url(&self.base_url, kind, None))
            .json(record)
            .send()
            .await
            .map_err(transport(kind))?;
        read_json(kind, response).await
    }

    async fn update(&self, kind: ItemKind, id: &ItemId, item: &Item) -> ApiResult<Item> {
        let response = self
            .client
            .put(item_url(&self.base_url, kind, id))
            .json(item)
            .send()
            .await
            .map_err(transport(kind))?;
        read_json(kind, response).await
    }

    async fn delete(&self, kind: ItemKind, id: &ItemId) -> ApiResult<()> {
        let response = self
            .client
            .delete(item_url(&self.base_url, kind, id))
            .send()
            .await
            .map_err(transport(kind))?;
        ensure_success(kind, response).map(|_| ())
    }
}
