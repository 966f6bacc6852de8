//! Banner Component
//!
//! Success/error messages above the report form. Each banner removes itself
//! after the configured timeout; several can be up at once.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    fn class(&self) -> &'static str {
        match self {
            BannerKind::Success => "alert alert-success",
            BannerKind::Error => "alert alert-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Banner {
    id: u32,
    kind: BannerKind,
    text: String,
}

/// Banners currently on screen
#[derive(Clone, Copy)]
pub struct Banners {
    items: RwSignal<Vec<Banner>>,
    next_id: RwSignal<u32>,
}

impl Default for Banners {
    fn default() -> Self {
        Self::new()
    }
}

impl Banners {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn show(&self, kind: BannerKind, text: String, timeout: Duration) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.items.update(|items| items.push(Banner { id, kind, text }));

        let items = self.items;
        let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            // The page may be gone by now
            items.try_update(|items| items.retain(|banner| banner.id != id));
        });
    }
}

#[component]
pub fn BannerStack(banners: Banners) -> impl IntoView {
    view! {
        <div class="banner-stack">
            <For
                each=move || banners.items.get()
                key=|banner| banner.id
                children=|banner| {
                    view! { <div class=banner.kind.class()>{banner.text}</div> }
                }
            />
        </div>
    }
}
