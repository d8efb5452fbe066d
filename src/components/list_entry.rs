//! List Entry Component
//!
//! One patch row: thumbnail, name, artist, age and a hover-revealed like
//! button.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::{LikeButton, LikeSeed};
use crate::context::{use_app_context, Route};
use crate::format::{jpeg_data_url, time_since};
use crate::models::PatchSummary;
use crate::store::{use_app_store, AppStateStoreFields};

fn row_class(hovered: bool, selected: bool) -> &'static str {
    match (hovered, selected) {
        (_, true) => "patch-row selected",
        (true, false) => "patch-row hovered",
        (false, false) => "patch-row",
    }
}

/// A single patch row
#[component]
pub fn ListEntry(
    patch: PatchSummary,
    /// Artist name is plain text instead of a link on the artist's own page
    #[prop(optional)]
    is_artist_page: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (is_hovered, set_is_hovered) = signal(false);

    // Re-seeds on sign-in and sign-out, not on other rows' toggles
    let seed = {
        let patch_id = patch.id.clone();
        let likes = patch.likes.clone();
        Signal::derive(move || {
            let user_id = store.current_user().with(|user| user.as_ref().map(|u| u.id.clone()));
            LikeSeed::for_patch(&patch_id, &likes, user_id.as_deref(), &store.liked_patches().read_untracked())
        })
    };
    let id = patch.id.clone();
    let is_selected = {
        let id = patch.id.clone();
        move || store.selected_patch().with(|selected| selected.as_deref() == Some(id.as_str()))
    };
    let username = patch.username.clone();
    let patchname = patch.name.clone();
    let age = time_since(patch.upload_date, Utc::now());

    let select_patch = move |_| {
        *store.selected_patch().write() = Some(id.clone());
    };

    let open_patch = {
        let username = username.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            ctx.navigate(Route::Patch {
                username: username.clone(),
                patchname: patchname.clone(),
            });
        }
    };

    view! {
        <li
            class=move || row_class(is_hovered.get(), is_selected())
            on:click=select_patch
            on:mouseenter=move |_| set_is_hovered.set(true)
            on:mouseleave=move |_| set_is_hovered.set(false)
        >
            {patch.image.as_deref().map(|image| view! {
                <img class="patch-thumb" src=jpeg_data_url(image) alt=patch.name.clone() />
            })}
            <span class="patch-name" on:click=open_patch>{patch.name.clone()}</span>
            <span class="patch-artist" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                {if is_artist_page {
                    view! { <span>{username.clone()}</span> }.into_any()
                } else {
                    let artist = username.clone();
                    view! {
                        <a href="#" on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            ctx.navigate(Route::Artist(artist.clone()));
                        }>
                            {username.clone()}
                        </a>
                    }.into_any()
                }}
            </span>
            <span class="patch-age">{age}</span>
            <div
                class="patch-like"
                style=move || if is_hovered.get() { "opacity: 1;" } else { "opacity: 0;" }
            >
                <LikeButton patch_id=patch.id.clone() seed=seed />
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_row_stays_marked_under_hover() {
        assert_eq!(row_class(false, false), "patch-row");
        assert_eq!(row_class(true, false), "patch-row hovered");
        assert_eq!(row_class(true, true), "patch-row selected");
        assert_eq!(row_class(false, true), "patch-row selected");
    }
}
