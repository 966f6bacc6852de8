use leptos::prelude::*;
use lost_found_core::dashboard::report_link_label;
use lost_found_core::ItemKind;

use crate::context::{use_app_context, Page};

/// "Report Lost Item" / "Report Found Item" calls to action
#[component]
pub fn ReportLinks(kinds: Vec<ItemKind>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="report-links">
            {kinds
                .into_iter()
                .map(|kind| {
                    let button_class = match kind {
                        ItemKind::Lost => "btn btn-primary",
                        ItemKind::Found => "btn btn-secondary",
                    };
                    view! {
                        <button class=button_class on:click=move |_| ctx.navigate(Page::Report(kind))>
                            {report_link_label(kind)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
