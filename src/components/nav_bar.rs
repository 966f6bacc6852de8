//! Navigation Bar Component
//!
//! Top bar with the board title and one button per page.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="navbar">
            <button class="navbar-brand" on:click=move |_| ctx.navigate(Page::Home)>
                "Lost & Found"
            </button>
            <nav class="navbar-links">
                {Page::NAV
                    .into_iter()
                    .map(|page| {
                        let link_class = move || {
                            if ctx.page.get() == page { "nav-link active" } else { "nav-link" }
                        };
                        view! {
                            <button class=link_class on:click=move |_| ctx.navigate(page)>
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
