//! Home Page
//!
//! Hero with the two report actions and the most recently created items.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::{ItemKind, TaggedItem};

use crate::api;
use crate::components::{ItemCard, ReportLinks};
use crate::context::{use_app_context, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let preview_len = api::config().description_preview_len;
    // None while loading
    let (recent, set_recent) = signal::<Option<Vec<TaggedItem>>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = api::list_recent().await;
            log::info!("Loaded {} recent items", loaded.len());
            set_recent.set(Some(loaded));
        });
    });

    view! {
        <section class="hero">
            <h1>"Lost Something? Found Something?"</h1>
            <p>"Report lost and found items and help them find their way home."</p>
            <ReportLinks kinds=ItemKind::ALL.to_vec() />
        </section>
        <section class="recent-items">
            <h2>"Recently Reported Items"</h2>
            {move || match recent.get() {
                None => view! { <div class="loading">"Loading recent items..."</div> }.into_any(),
                Some(items) if items.is_empty() => view! {
                    <div class="empty-state">
                        <h3>"No Items Yet"</h3>
                        <p>"Be the first to report a lost or found item!"</p>
                        <ReportLinks kinds=ItemKind::ALL.to_vec() />
                    </div>
                }
                .into_any(),
                Some(items) => view! {
                    <div class="items-grid">
                        {items
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let poster = item.item.user_name.clone();
                                view! {
                                    <ItemCard item=item index=index preview_len=Some(preview_len)>
                                        <span class="item-poster">"Posted by: " {poster}</span>
                                        <button
                                            class="btn btn-primary contact-btn"
                                            on:click=move |_| ctx.navigate(Page::ViewItems)
                                        >
                                            "View Details"
                                        </button>
                                    </ItemCard>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
