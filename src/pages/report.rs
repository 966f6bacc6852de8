//! Report Page
//!
//! Lost and found report forms. The reporter name is cached before the
//! request goes out; the outcome is shown as a banner.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::report::{outcome_message, today_input_value, ReportField, ReportForm};
use lost_found_core::ItemKind;

use crate::api;
use crate::components::{BannerKind, BannerStack, Banners, CATEGORIES};
use crate::context::use_app_context;

/// Text-like input bound to one form field
#[component]
fn FormInput(
    form: RwSignal<ReportForm>,
    field: ReportField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = false)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.name()>{label}</label>
            <input
                type=input_type
                id=field.name()
                name=field.name()
                placeholder=placeholder
                required=required
                prop:value=move || form.with(|f| field.get(f).to_string())
                on:input=move |ev| form.update(|f| field.set(f, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn ReportPage(kind: ItemKind) -> impl IntoView {
    let ctx = use_app_context();
    let banner_timeout = api::config().banner_timeout;
    let banners = Banners::new();

    let blank_form = move || {
        let cached = ctx.user_name.get_untracked();
        ReportForm::blank(&today_input_value(Utc::now()), cached.as_deref())
    };
    let form = RwSignal::new(blank_form());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let values = form.get_untracked();
        ctx.remember_user(&values.user_name);
        set_submitting.set(true);

        spawn_local(async move {
            match api::report_item(kind, &values).await {
                Ok(_) => {
                    banners.show(BannerKind::Success, outcome_message(kind, None), banner_timeout);
                    form.try_set(blank_form());
                }
                Err(e) => {
                    banners.show(BannerKind::Error, outcome_message(kind, Some(&e)), banner_timeout);
                }
            }
            set_submitting.try_set(false);
        });
    };

    let (title, intro, date_label, location_label) = match kind {
        ItemKind::Lost => (
            "Report a Lost Item",
            "Tell us what you lost and where you last saw it.",
            "Date Lost",
            "Last Seen Location",
        ),
        ItemKind::Found => (
            "Report a Found Item",
            "Tell us what you found so its owner can get it back.",
            "Date Found",
            "Location Found",
        ),
    };

    view! {
        <section class="report-page">
            <h1>{title}</h1>
            <p class="report-intro">{intro}</p>
            <BannerStack banners=banners />
            <form class=format!("report-form {}", kind.as_str()) on:submit=on_submit>
                <FormInput form=form field=ReportField::ItemName label="Item Name" required=true />
                <div class="form-group">
                    <label for="category">"Category"</label>
                    <select
                        id="category"
                        name="category"
                        prop:value=move || form.with(|f| f.category.clone())
                        on:change=move |ev| form.update(|f| ReportField::Category.set(f, event_target_value(&ev)))
                    >
                        <option value="">"Select a category"</option>
                        {CATEGORIES
                            .iter()
                            .map(|category| view! { <option value=*category>{*category}</option> })
                            .collect_view()}
                    </select>
                </div>
                <FormInput form=form field=ReportField::Date label=date_label input_type="date" />
                <FormInput form=form field=ReportField::Location label=location_label />
                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        name="description"
                        rows="4"
                        required
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| ReportField::Description.set(f, event_target_value(&ev)))
                    ></textarea>
                </div>
                {(kind == ItemKind::Found).then(|| view! {
                    <div class="form-group">
                        <label for="turnedIn">"Turned in to the Lost & Found Office?"</label>
                        <select
                            id="turnedIn"
                            name="turnedIn"
                            prop:value=move || form.with(|f| f.turned_in.clone())
                            on:change=move |ev| form.update(|f| ReportField::TurnedIn.set(f, event_target_value(&ev)))
                        >
                            <option value="false">"No, I still have it"</option>
                            <option value="true">"Yes, it was turned in"</option>
                        </select>
                    </div>
                })}
                <FormInput form=form field=ReportField::UserName label="Your Name" required=true />
                <FormInput
                    form=form
                    field=ReportField::Contact
                    label="Contact Information"
                    placeholder="Email or phone number"
                    required=true
                />
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit Report" }}
                </button>
            </form>
        </section>
    }
}
