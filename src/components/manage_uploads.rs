//! Manage Uploads Component
//!
//! The signed-in user's uploads with the metadata editor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, ApiClient};
use crate::components::{EditListEntry, EditMetadataModal};
use crate::context::{use_app_context, AppContext};
use crate::store::{store_user_id, use_app_store, AppStateStoreFields, AppStore};

/// Reload the uploads of the signed-in user into the store
fn load_user_patches(api: ApiClient, store: AppStore, ctx: AppContext) {
    let Some(user_id) = store_user_id(&store) else {
        return;
    };
    spawn_local(async move {
        match api.list_user_patches(&user_id).await {
            Ok(patches) => {
                log::info!("[ManageUploads] Loaded {} uploads", patches.len());
                *store.user_patches().write() = patches;
            }
            Err(e) => {
                log::error!("[ManageUploads] Error loading uploads: {}", e);
                ctx.notify("Failed to load your uploads.");
            }
        }
    });
}

#[component]
pub fn ManageUploads() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let api = use_api();

    let (editing, set_editing) = signal::<Option<String>>(None);
    let (reload, set_reload) = signal(0u32);

    // Load on mount, on sign-in and after every save
    Effect::new(move |_| {
        let _ = reload.get();
        let _ = store.current_user().get();
        load_user_patches(api.clone(), store, ctx);
    });

    let on_edit = Callback::new(move |id: String| set_editing.set(Some(id)));
    let on_close = Callback::new(move |_| set_editing.set(None));
    let on_saved = Callback::new(move |_| set_reload.update(|n| *n += 1));

    view! {
        <section class="manage-uploads">
            <h2>"Your uploads"</h2>
            <Show
                when=move || store.current_user().with(|user| user.is_some())
                fallback=|| view! { <p>"Sign in to manage your uploads."</p> }
            >
                <ul class="upload-rows">
                    <For
                        each=move || store.user_patches().get()
                        key=|patch| (patch.id.clone(), patch.name.clone())
                        children=move |patch| view! { <EditListEntry patch=patch on_edit=on_edit /> }
                    />
                </ul>
            </Show>
            <EditMetadataModal
                is_open=Signal::derive(move || editing.get().is_some())
                patch_id=editing
                on_close=on_close
                on_saved=on_saved
            />
        </section>
    }
}
