//! View Items Page
//!
//! The full board: both collections fetched once, then filtered, sorted and
//! paged locally on every change of the view state.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::dashboard::EmptyState;
use lost_found_core::{paginate, FilterChange, ItemCollections, KindFilter, TaggedItem, ViewState};

use crate::api;
use crate::components::{FilterBar, ItemCard, PaginationBar, TabBar};
use crate::context::scroll_to_top;

fn show_contact(contact: &str) {
    if let Err(e) = window().alert_with_message(&format!("Contact Information: {}", contact)) {
        log::warn!("Failed to show contact: {:?}", e);
    }
}

#[component]
pub fn ViewItemsPage() -> impl IntoView {
    let config = api::config();
    let page_size = config.page_size;
    let max_buttons = config.max_page_buttons;

    // None while loading
    let (collections, set_collections) = signal::<Option<ItemCollections>>(None);
    let (state, set_state) = signal(ViewState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = api::list_all().await;
            log::info!("Loaded {} lost and {} found items", loaded.lost.len(), loaded.found.len());
            set_collections.set(Some(loaded));
        });
    });

    let filtered = Memo::new(move |_| {
        collections.with(|loaded| {
            loaded
                .as_ref()
                .map(|c| state.with(|s| s.apply(&c.lost, &c.found, &Local::now())))
        })
    });

    let current_page = move || {
        let requested = state.with(|s| s.page);
        filtered.with(|items| {
            items.as_ref().map(|items| {
                let page = paginate(items, page_size, requested);
                (page.items.to_vec(), page.controls(max_buttons))
            })
        })
    };

    let tab = Memo::new(move |_| state.with(|s| s.filter.tab));

    view! {
        <section class="view-items">
            <h1>"Lost & Found Items"</h1>
            <FilterBar on_change=move |change: FilterChange| set_state.update(|s| *s = s.with_change(change)) />
            <TabBar current=tab on_change=move |tab: KindFilter| set_state.update(|s| *s = s.with_tab(tab)) />
            {move || match current_page() {
                None => view! { <div class="loading">"Loading items..."</div> }.into_any(),
                Some((items, _)) if items.is_empty() => {
                    let empty = EmptyState::no_matches();
                    view! {
                        <div class="empty-state">
                            <h3>{empty.title}</h3>
                            <p>{empty.message}</p>
                        </div>
                    }
                    .into_any()
                }
                Some((items, controls)) => view! {
                    <div class="items-grid">
                        {items.into_iter().enumerate().map(|(index, item)| board_card(item, index)).collect_view()}
                    </div>
                    <PaginationBar
                        controls=controls
                        on_select=move |page: usize| {
                            set_state.update(|s| *s = s.with_page(page));
                            scroll_to_top();
                        }
                    />
                }
                .into_any(),
            }}
        </section>
    }
}

fn board_card(item: TaggedItem, index: usize) -> impl IntoView {
    let poster = item.item.user_name.clone();
    let contact = item.item.contact.clone();
    view! {
        <ItemCard item=item index=index>
            <span class="item-poster">"Posted by: " {poster}</span>
            <button class="btn btn-primary contact-btn" on:click=move |_| show_contact(&contact)>
                "Contact"
            </button>
        </ItemCard>
    }
}
