//! Lost & Found Frontend App
//!
//! Navigation bar over a single page slot.

use leptos::prelude::*;
use lost_found_core::storage::UserNameCache;

use crate::components::NavBar;
use crate::context::{AppContext, Page};
use crate::pages::{DashboardPage, HomePage, ReportPage, ViewItemsPage};
use crate::storage::BrowserUserNameCache;

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);
    let (user_name, set_user_name) = signal(BrowserUserNameCache.load());

    let ctx = AppContext::new((page, set_page), (user_name, set_user_name));
    provide_context(ctx);

    Effect::new(move |_| {
        log::info!("Showing {}", page.get().title());
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::ViewItems => view! { <ViewItemsPage /> }.into_any(),
                    Page::Report(kind) => view! { <ReportPage kind=kind /> }.into_any(),
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                }}
            </main>
            <footer class="app-footer">
                <p>"Lost & Found Board"</p>
            </footer>
        </div>
    }
}
