//! Patch List Component
//!
//! Browse view: every patch, or only one artist's.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::ListEntry;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PatchList(
    /// Restrict the list to this artist
    #[prop(optional)]
    artist: Option<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let api = use_api();
    let (loading, set_loading) = signal(true);

    // Load patches on mount
    spawn_local(async move {
        match api.list_patches().await {
            Ok(loaded) => {
                log::info!("[PatchList] Loaded {} patches", loaded.len());
                *store.patches().write() = loaded;
            }
            Err(e) => {
                log::error!("[PatchList] Error loading patches: {}", e);
                ctx.notify("Failed to load patches.");
            }
        }
        set_loading.set(false);
    });

    let is_artist_page = artist.is_some();
    let title = match &artist {
        Some(name) => format!("Patches by {}", name),
        None => "Patches".to_string(),
    };
    let visible = move || {
        let patches = store.patches().get();
        match &artist {
            Some(name) => patches.into_iter().filter(|p| &p.username == name).collect(),
            None => patches,
        }
    };

    view! {
        <section class="patch-list">
            <h2>{title}</h2>
            <Show when=move || !loading.get() fallback=|| view! { <div>"Loading..."</div> }>
                <ul class="patch-rows">
                    <For
                        each=visible.clone()
                        key=|patch| patch.id.clone()
                        children=move |patch| view! { <ListEntry patch=patch is_artist_page=is_artist_page /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
