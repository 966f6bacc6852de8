//! Delete Confirm Modal Component
//!
//! Modal confirmation for deleting one of the user's items.

use leptos::prelude::*;
use lost_found_core::dashboard::DeleteDialog;

/// Delete confirmation modal
///
/// A failed delete is shown inline in place of the prompt; confirm stays
/// available for a retry.
///
/// # Arguments
/// * `dialog` - Current dialog state
/// * `on_cancel` - Close without deleting
/// * `on_confirm` - Issue the delete
#[component]
pub fn DeleteConfirmModal(
    dialog: DeleteDialog,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let busy = dialog.is_busy();
    let confirm_label = dialog.confirm_label();
    let body = match dialog.error.clone() {
        Some(error) => view! { <p class="error-message">{error}</p> }.into_any(),
        None => view! { <p>{dialog.prompt()}</p> }.into_any(),
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h3>"Confirm Deletion"</h3>
                </div>
                <div class="modal-body">{body}</div>
                <div class="modal-footer">
                    <button
                        class="btn btn-secondary"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_cancel.run(());
                        }
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn-danger"
                        disabled=busy
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_confirm.run(());
                        }
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
