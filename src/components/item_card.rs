//! Item Card Component
//!
//! One record of the board. Pages supply the footer (poster, contact,
//! delete) as children.

use chrono::Local;
use leptos::prelude::*;
use lost_found_core::TaggedItem;

#[component]
fn Detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="item-detail">
            <span class="item-detail-label">{label}</span>
            <span>{value}</span>
        </div>
    }
}

/// Item card
///
/// # Arguments
/// * `index` - Position in the grid, staggers the fade-in
/// * `preview_len` - Truncate the description to this many characters
/// * `holder` - Who keeps a found item that was not turned in
#[component]
pub fn ItemCard(
    item: TaggedItem,
    index: usize,
    #[prop(default = None)] preview_len: Option<usize>,
    #[prop(default = "finder")] holder: &'static str,
    children: Children,
) -> impl IntoView {
    let kind = item.kind;
    let custody = item.custody_status(holder);
    let description = match preview_len {
        Some(max_chars) => item.item.description_preview(max_chars),
        None => item.item.description.clone(),
    };
    let card_class = format!("item-card fade-in {}", kind.as_str());
    let card_style = format!("animation-delay: {:.1}s", index as f64 * 0.1);

    view! {
        <div class=card_class style=card_style>
            <div class="item-card-header">
                <h3 class="item-card-title">{item.item.item_name.clone()}</h3>
                <span class=format!("item-type {}", kind.as_str())>{kind.label()}</span>
            </div>
            <div class="item-card-body">
                <Detail label="Category:" value=item.item.category_label().to_string() />
                <Detail label="Location:" value=item.item.location_label().to_string() />
                <Detail label="Date:" value=item.item.display_date(&Local) />
                {custody.map(|status| view! { <Detail label="Status:" value=status /> })}
                <p class="item-description">{description}</p>
            </div>
            <div class="item-card-footer">{children()}</div>
        </div>
    }
}
