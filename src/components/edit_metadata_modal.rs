//! Edit Metadata Modal Component
//!
//! Form for renaming, re-tagging and re-describing one upload, with an
//! optional replacement cover image.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::api::use_api;
use crate::components::{TagSelect, Tooltip};
use crate::context::use_app_context;
use crate::metadata::{check_image, ImageUpload, MetadataForm, INVALID_IMAGE, NAME_HINT};

const UPDATED_MESSAGE: &str = "Patch updated successfully!";
const UPDATE_FAILED_MESSAGE: &str = "Failed to update patch.";

/// Read a picked file into memory
async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Whether a fetch started for `requested` may still fill the form
fn still_editing(is_open: bool, editing: Option<&str>, requested: &str) -> bool {
    is_open && editing == Some(requested)
}

/// Modal editor for one upload's metadata
///
/// # Arguments
/// * `is_open` - Whether the modal is visible
/// * `patch_id` - Upload being edited; its current metadata is fetched on open
/// * `on_close` - Runs on cancel, backdrop click and after a save
/// * `on_saved` - Runs after the server accepted the update
#[component]
pub fn EditMetadataModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] patch_id: Signal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();

    let name = RwSignal::new(String::new());
    let primary_tag = RwSignal::new(String::new());
    let secondary_tag = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let selected_image = RwSignal::new(None::<ImageUpload>);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let reset = move || {
        name.set(String::new());
        primary_tag.set(String::new());
        secondary_tag.set(String::new());
        description.set(String::new());
        selected_image.set(None);
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };
    let close = move || {
        reset();
        on_close.run(());
    };

    // Fill the form whenever the modal opens for a patch
    let fetch_api = api.clone();
    Effect::new(move |_| {
        let (true, Some(id)) = (is_open.get(), patch_id.get()) else {
            return;
        };
        let api = fetch_api.clone();
        spawn_local(async move {
            let result = api.get_full_patch_info(&id).await;
            let open = is_open.try_get_untracked().unwrap_or(false);
            let editing = patch_id.try_get_untracked().flatten();
            if !still_editing(open, editing.as_deref(), &id) {
                log::debug!("[EditMetadataModal] Dropping stale metadata for {}", id);
                return;
            }
            match result {
                Ok(meta) => {
                    let form = MetadataForm::from_metadata(&meta);
                    name.set(form.name);
                    primary_tag.set(form.primary_tag);
                    secondary_tag.set(form.secondary_tag);
                    description.set(form.description);
                }
                Err(e) => {
                    log::error!("[EditMetadataModal] Error fetching {}: {}", id, e);
                }
            }
        });
    });

    let on_image_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if let Err(message) = check_image(&file.type_(), file.size() as u64) {
            ctx.notify(message);
            input.set_value("");
            selected_image.set(None);
            return;
        }

        spawn_local(async move {
            match read_file(&file).await {
                Ok(bytes) => selected_image.set(Some(ImageUpload {
                    file_name: file.name(),
                    bytes,
                })),
                Err(e) => {
                    log::error!("[EditMetadataModal] Error reading image: {}", e);
                    ctx.notify(INVALID_IMAGE);
                }
            }
        });
    };

    let on_save = move |_| {
        let form = MetadataForm {
            name: name.get_untracked(),
            primary_tag: primary_tag.get_untracked(),
            secondary_tag: secondary_tag.get_untracked(),
            description: description.get_untracked(),
        };
        let update = match form.validate() {
            Ok(update) => update,
            Err(message) => {
                ctx.notify(message);
                return;
            }
        };
        let Some(id) = patch_id.get_untracked() else {
            return;
        };
        let image = selected_image.get_untracked();
        let api = api.clone();

        spawn_local(async move {
            match api.update_patch(&id, &update, image).await {
                Ok(()) => {
                    log::info!("[EditMetadataModal] Updated {}", id);
                    ctx.notify(UPDATED_MESSAGE);
                    on_saved.run(());
                    close();
                }
                Err(e) => {
                    log::error!("[EditMetadataModal] Error updating {}: {}", id, e);
                    ctx.notify(UPDATE_FAILED_MESSAGE);
                }
            }
        });
    };

    view! {
        <div
            class=move || if is_open.get() { "modal-backdrop open" } else { "modal-backdrop hidden" }
            on:click=move |_| close()
        >
            <div class="modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <h2>"Edit Patch"</h2>
                <div class="form-row">
                    <label class="label-with-hint">"Name:" <Tooltip message=NAME_HINT /></label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <TagSelect label="Primary Tag:" placeholder="Select Primary" value=primary_tag />
                <TagSelect label="Secondary Tag:" placeholder="Select Secondary" value=secondary_tag />
                <div class="form-row">
                    <label>"Description:"</label>
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-row">
                    <label>"Image (Max 500kb):"</label>
                    <input node_ref=file_input type="file" accept="image/jpeg" on:change=on_image_change />
                </div>
                <div class="modal-actions">
                    <button class="cancel-btn" on:click=move |_| close()>"Cancel"</button>
                    <button class="save-btn" on:click=on_save>"Save"</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_response_for_other_patch_is_dropped() {
        // Opened for A, then reopened for B before A's metadata arrived
        assert!(!still_editing(true, Some("patch-b"), "patch-a"));
        assert!(still_editing(true, Some("patch-b"), "patch-b"));
    }

    #[test]
    fn test_late_response_after_cancel_is_dropped() {
        assert!(!still_editing(false, None, "patch-a"));
        assert!(!still_editing(false, Some("patch-a"), "patch-a"));
    }
}
