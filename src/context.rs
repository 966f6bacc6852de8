//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use lost_found_core::storage::UserNameCache;
use lost_found_core::ItemKind;

use crate::storage::BrowserUserNameCache;

/// Pages of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    ViewItems,
    Report(ItemKind),
    Dashboard,
}

impl Page {
    pub const NAV: [Page; 5] = [
        Page::Home,
        Page::ViewItems,
        Page::Report(ItemKind::Lost),
        Page::Report(ItemKind::Found),
        Page::Dashboard,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::ViewItems => "View Items",
            Page::Report(ItemKind::Lost) => "Report Lost",
            Page::Report(ItemKind::Found) => "Report Found",
            Page::Dashboard => "Dashboard",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page on screen - read
    pub page: ReadSignal<Page>,
    /// Page on screen - write
    set_page: WriteSignal<Page>,
    /// Last reporter name, mirrored from localStorage - read
    pub user_name: ReadSignal<Option<String>>,
    /// Last reporter name - write
    set_user_name: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        user_name: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            user_name: user_name.0,
            set_user_name: user_name.1,
        }
    }

    /// Switch page and jump back to the top
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
        scroll_to_top();
    }

    /// Cache the reporter name for the next form and the dashboard
    pub fn remember_user(&self, user_name: &str) {
        BrowserUserNameCache.save(user_name);
        self.set_user_name.set(Some(user_name.to_string()));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}
