//! Pagination Bar Component

use leptos::prelude::*;
use lost_found_core::PageControls;

/// Prev / numbered window / next. Renders nothing for a single page.
#[component]
pub fn PaginationBar(
    controls: PageControls,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    if !controls.is_visible() {
        return ().into_any();
    }
    let prev = controls.prev_page();
    let next = controls.next_page();
    let current = controls.current;

    view! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled=prev.is_none()
                on:click=move |_| {
                    if let Some(page) = prev {
                        on_select.run(page);
                    }
                }
            >
                "«"
            </button>
            {controls
                .buttons
                .clone()
                .map(|page| {
                    let page_class = if page == current { "page-btn active" } else { "page-btn" };
                    view! {
                        <button class=page_class on:click=move |_| on_select.run(page)>
                            {page}
                        </button>
                    }
                })
                .collect_view()}
            <button
                class="page-btn"
                disabled=next.is_none()
                on:click=move |_| {
                    if let Some(page) = next {
                        on_select.run(page);
                    }
                }
            >
                "»"
            </button>
        </div>
    }
    .into_any()
}
