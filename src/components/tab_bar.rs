//! Tab Bar Component
//!
//! All / Lost / Found tabs shared by the items board and the dashboard.

use leptos::prelude::*;
use lost_found_core::KindFilter;

#[component]
pub fn TabBar(
    #[prop(into)] current: Signal<KindFilter>,
    #[prop(into)] on_change: Callback<KindFilter>,
) -> impl IntoView {
    view! {
        <div class="tabs">
            {KindFilter::ALL
                .into_iter()
                .map(|tab| {
                    let tab_class = move || {
                        if current.get() == tab { "tab-btn active" } else { "tab-btn" }
                    };
                    view! {
                        <button class=tab_class data-tab=tab.as_str() on:click=move |_| on_change.run(tab)>
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
