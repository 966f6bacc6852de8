//! Client Configuration
//!
//! Fixed constants of the board. The backend address is compiled in.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address of the REST store
    pub api_url: String,
    /// Cards per page on the items board
    pub page_size: usize,
    /// Cards on the home page
    pub recent_limit: usize,
    /// Numbered buttons in the pagination bar
    pub max_page_buttons: usize,
    /// Characters of description shown on preview cards
    pub description_preview_len: usize,
    /// How long report banners stay up
    pub banner_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: 9,
            recent_limit: 6,
            max_page_buttons: 5,
            description_preview_len: 100,
            banner_timeout: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    pub fn with_api_url(self, api_url: impl Into<String>) -> Self {
        Self { api_url: api_url.into(), ..self }
    }
}
