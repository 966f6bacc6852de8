//! Filter Bar Component
//!
//! Search box plus type, category and date selects for the items board.

use leptos::prelude::*;
use lost_found_core::{DateRange, FilterChange, FilterEdit, KindFilter};

/// Categories offered by the report form and the category filter
pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Accessories",
    "Bags",
    "Books",
    "Keys",
    "ID Cards",
    "Other",
];

/// Filter bar
///
/// The search button, Enter and every select change report the search box
/// text as it currently reads.
#[component]
pub fn FilterBar(#[prop(into)] on_change: Callback<FilterChange>) -> impl IntoView {
    let (search_text, set_search_text) = signal(String::new());
    let emit = move |edit: FilterEdit| {
        on_change.run(FilterChange { search: search_text.get_untracked(), edit });
    };
    let submit_search = move || emit(FilterEdit::Search);

    view! {
        <div class="filter-bar">
            <div class="search-box">
                <input
                    type="text"
                    id="search-input"
                    placeholder="Search items..."
                    prop:value=move || search_text.get()
                    on:input=move |ev| set_search_text.set(event_target_value(&ev))
                    on:keyup=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit_search();
                        }
                    }
                />
                <button class="btn btn-primary" on:click=move |_| submit_search()>
                    "Search"
                </button>
            </div>
            <div class="filter-selects">
                <select
                    id="filter-type"
                    on:change=move |ev| emit(FilterEdit::Kind(KindFilter::parse(&event_target_value(&ev))))
                >
                    {KindFilter::ALL
                        .into_iter()
                        .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    id="filter-category"
                    on:change=move |ev| emit(FilterEdit::Category(event_target_value(&ev)))
                >
                    <option value="all">"All Categories"</option>
                    {CATEGORIES
                        .iter()
                        .map(|category| view! { <option value=*category>{*category}</option> })
                        .collect_view()}
                </select>
                <select
                    id="filter-date"
                    on:change=move |ev| emit(FilterEdit::DateRange(DateRange::parse(&event_target_value(&ev))))
                >
                    {DateRange::ALL
                        .into_iter()
                        .map(|range| view! { <option value=range.as_str()>{range.label()}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
