//! Patch Page Component
//!
//! Detail view for one patch, addressed by artist and patch name.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{LikeButton, LikeSeed};
use crate::format::{jpeg_data_url, tags_label, upload_date_label};
use crate::models::PatchDetail;
use crate::store::{use_app_store, AppStateStoreFields};

const FETCH_ERROR: &str = "Failed to fetch patch information";

#[component]
pub fn PatchPage(username: String, patchname: String) -> impl IntoView {
    let store = use_app_store();
    let api = use_api();
    let (patch_info, set_patch_info) = signal::<Option<PatchDetail>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api.get_patch_by_artist(&username, &patchname).await {
            Ok(detail) => set_patch_info.set(Some(detail)),
            Err(e) => {
                log::error!("[PatchPage] Error loading {}/{}: {}", username, patchname, e);
                set_error.set(Some(FETCH_ERROR.to_string()));
            }
        }
        set_loading.set(false);
    });

    move || {
        if loading.get() {
            return view! { <div>"Loading..."</div> }.into_any();
        }
        if let Some(message) = error.get() {
            return view! { <div>"Error: " {message}</div> }.into_any();
        }
        let Some(patch) = patch_info.get() else {
            return view! { <div></div> }.into_any();
        };

        // Re-seeds when the viewer signs in or out; other views toggling the
        // same patch do not reach into this page
        let seed = {
            let patch_id = patch.id.clone();
            let likes = patch.likes.clone();
            Signal::derive(move || {
                let user_id = store.current_user().with(|user| user.as_ref().map(|u| u.id.clone()));
                LikeSeed::for_patch(&patch_id, &likes, user_id.as_deref(), &store.liked_patches().read_untracked())
            })
        };
        let patch_id = patch.id.clone();

        view! {
            <div class="patch-page">
                <div class="patch-header">
                    {patch.image.as_deref().map(|image| view! {
                        <img class="patch-cover" src=jpeg_data_url(image) alt=patch.name.clone() />
                    })}
                    <div class="patch-title">
                        <h1>{patch.name.clone()}</h1>
                        <p class="patch-artist">{patch.username.clone()}</p>
                    </div>
                </div>
                <table class="patch-details">
                    <thead>
                        <tr>
                            <th>"Description"</th>
                            <th>"Tags"</th>
                            <th>"Upload date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr>
                            <td>{patch.description.clone()}</td>
                            <td>{tags_label(&patch.tags)}</td>
                            <td>{upload_date_label(patch.upload_date)}</td>
                        </tr>
                        <tr>
                            <td>
                                <button
                                    class="load-patch-btn"
                                    on:click=move |_| *store.selected_patch().write() = Some(patch_id.clone())
                                >
                                    "Load Patch"
                                </button>
                            </td>
                            <td>
                                <LikeButton patch_id=patch.id.clone() seed=seed show_count=true />
                            </td>
                            <td></td>
                        </tr>
                    </tbody>
                </table>
            </div>
        }.into_any()
    }
}
