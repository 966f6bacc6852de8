//! Dashboard Page
//!
//! Items reported under one user name, with per-item delete.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::dashboard::{tab_items, DeleteDialog, DeleteOutcome, EmptyState, UserStats};
use lost_found_core::storage::normalize_user_name;
use lost_found_core::{ItemCollections, ItemId, ItemKind, KindFilter, TaggedItem};

use crate::api;
use crate::components::{DeleteConfirmModal, ItemCard, ReportLinks, TabBar};
use crate::context::use_app_context;

#[component]
fn StatCard(label: &'static str, value: Signal<Option<usize>>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">
                {move || value.get().map(|n| n.to_string()).unwrap_or_else(|| "...".to_string())}
            </span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();

    let login_input = RwSignal::new(ctx.user_name.get_untracked().unwrap_or_default());
    // None shows the login prompt
    let user = RwSignal::new(None::<String>);
    // None while loading
    let items = RwSignal::new(None::<ItemCollections>);
    let tab = RwSignal::new(KindFilter::All);
    let dialog = RwSignal::new(None::<DeleteDialog>);

    let load = move |user_name: String| {
        user.set(Some(user_name.clone()));
        items.set(None);
        spawn_local(async move {
            let loaded = api::list_by_user(&user_name).await;
            log::info!("Loaded {} items for {}", loaded.total(), user_name);
            // Ignore a response for a user that was switched away from
            if user.try_with_untracked(|current| current.as_deref() == Some(user_name.as_str())) == Some(true) {
                items.set(Some(loaded));
            }
        });
    };

    // Cached name logs straight in
    if let Some(cached) = ctx.user_name.get_untracked().as_deref().and_then(normalize_user_name) {
        load(cached);
    }

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_name) = normalize_user_name(&login_input.get_untracked()) else {
            return;
        };
        ctx.remember_user(&user_name);
        load(user_name);
    };

    let change_user = move |_: leptos::ev::MouseEvent| {
        user.set(None);
        items.set(None);
        dialog.set(None);
    };

    let confirm_delete = move || {
        let Some(current) = dialog.get_untracked() else {
            return;
        };
        if current.is_busy() {
            return;
        }
        let pending = current.deleting();
        dialog.set(Some(pending.clone()));
        spawn_local(async move {
            match api::delete_item(&pending).await {
                DeleteOutcome::Deleted => {
                    dialog.try_set(None);
                    if let Some(user_name) = user.try_get_untracked().flatten() {
                        load(user_name);
                    }
                }
                DeleteOutcome::Failed(open) => {
                    // Only if the same dialog is still up
                    dialog.try_update(|d| {
                        if d.as_ref().is_some_and(|d| d.kind == open.kind && d.id == open.id) {
                            *d = Some(open);
                        }
                    });
                }
            }
        });
    };

    let stats = Memo::new(move |_| items.with(|loaded| loaded.as_ref().map(UserStats::of)));
    let visible = move || items.with(|loaded| loaded.as_ref().map(|c| tab_items(c, tab.get())));

    view! {
        <section class="dashboard">
            {move || match user.get() {
                None => view! {
                    <div class="login-section">
                        <h2>"View Your Reported Items"</h2>
                        <p>"Enter the name you used when reporting items."</p>
                        <form class="login-form" on:submit=on_login>
                            <input
                                type="text"
                                id="username"
                                placeholder="Your name"
                                required
                                prop:value=move || login_input.get()
                                on:input=move |ev| login_input.set(event_target_value(&ev))
                            />
                            <button type="submit" class="btn btn-primary">"View My Items"</button>
                        </form>
                    </div>
                }
                .into_any(),
                Some(user_name) => view! {
                    <div class="dashboard-header">
                        <h2>"Welcome, " {user_name} "!"</h2>
                        <button class="btn btn-secondary" on:click=change_user>"Change User"</button>
                    </div>
                    <div class="stats">
                        <StatCard label="Lost Items" value=Signal::derive(move || stats.get().map(|s| s.lost)) />
                        <StatCard label="Found Items" value=Signal::derive(move || stats.get().map(|s| s.found)) />
                        <StatCard label="Total Items" value=Signal::derive(move || stats.get().map(|s| s.total)) />
                    </div>
                    <TabBar current=tab on_change=move |next: KindFilter| tab.set(next) />
                    {move || match visible() {
                        None => view! { <div class="loading">"Loading your items..."</div> }.into_any(),
                        Some(list) if list.is_empty() => empty_tab(tab.get()).into_any(),
                        Some(list) => view! {
                            <div class="items-grid">
                                {list
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, item)| {
                                        dashboard_card(item, index, move |kind, id| {
                                            dialog.set(Some(DeleteDialog::open(kind, id)));
                                        })
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any(),
                    }}
                }
                .into_any(),
            }}
            {move || dialog.get().map(|current| view! {
                <DeleteConfirmModal
                    dialog=current
                    on_cancel=move |_: ()| dialog.set(None)
                    on_confirm=move |_: ()| confirm_delete()
                />
            })}
        </section>
    }
}

fn empty_tab(tab: KindFilter) -> impl IntoView {
    let empty = EmptyState::for_tab(tab);
    view! {
        <div class="no-items">
            <h3>{empty.title}</h3>
            <p>{empty.message}</p>
            <ReportLinks kinds=empty.report_links />
        </div>
    }
}

fn dashboard_card(
    item: TaggedItem,
    index: usize,
    on_delete: impl Fn(ItemKind, ItemId) + Send + Sync + 'static,
) -> impl IntoView {
    let kind = item.kind;
    let id = item.item.id.clone();
    let reported_on = item.item.display_created_date(&Local);
    view! {
        <ItemCard item=item index=index holder="you">
            <span class="item-reported">"Reported on " {reported_on}</span>
            <button class="btn btn-danger delete-btn" on:click=move |_| on_delete(kind, id.clone())>
                "Delete"
            </button>
        </ItemCard>
    }
}
