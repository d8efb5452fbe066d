//! Edit List Entry Component
//!
//! One row in the uploads view with edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::format::upload_date_label;
use crate::models::PatchSummary;
use crate::store::{store_remove_user_patch, use_app_store};

/// A single upload row
///
/// # Arguments
/// * `patch` - The upload
/// * `on_edit` - Runs with the patch id when "Edit" is clicked
#[component]
pub fn EditListEntry(patch: PatchSummary, #[prop(into)] on_edit: Callback<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let api = StoredValue::new_local(use_api());

    let deleting = RwSignal::new(false);

    let edit_id = patch.id.clone();
    let delete_id = patch.id.clone();

    let on_delete = Callback::new(move |_| {
        // One request per row
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        let api = api.get_value();
        let id = delete_id.clone();
        spawn_local(async move {
            match api.delete_patch(&id).await {
                Ok(()) => {
                    log::info!("[EditListEntry] Deleted {}", id);
                    store_remove_user_patch(&store, &id);
                    ctx.notify("Patch deleted.");
                }
                Err(e) => {
                    log::error!("[EditListEntry] Error deleting {}: {}", id, e);
                    let _ = deleting.try_set(false);
                    ctx.notify("Failed to delete patch.");
                }
            }
        });
    });

    view! {
        <li class="upload-row">
            <span class="patch-name">{patch.name.clone()}</span>
            <span class="patch-date">{upload_date_label(patch.upload_date)}</span>
            <span class="patch-likes">{patch.like_count()} " ♥"</span>
            <button
                class="edit-btn"
                disabled=move || deleting.get()
                on:click=move |_| on_edit.run(edit_id.clone())
            >
                "Edit"
            </button>
            <DeleteConfirmButton pending=deleting on_confirm=on_delete />
        </li>
    }
}
