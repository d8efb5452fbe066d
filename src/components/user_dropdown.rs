//! User Dropdown Component
//!
//! Account menu in the header; closes on any mousedown outside it.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{use_app_context, Route};

/// Account menu for the signed-in user
///
/// `on_logout` runs when "Sign Out" is picked.
#[component]
pub fn UserDropdown(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (is_open, set_is_open) = signal(false);
    let container = NodeRef::<Div>::new();

    let handle = window_event_listener(ev::mousedown, move |ev| {
        if !is_open.get_untracked() {
            return;
        }
        let Some(root) = container.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !root.contains(target.as_ref()) {
            set_is_open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    let manage_uploads = move |_| {
        set_is_open.set(false);
        ctx.navigate(Route::ManageUploads);
    };
    let sign_out = move |_| {
        set_is_open.set(false);
        on_logout.run(());
    };

    view! {
        <div class="user-dropdown" node_ref=container>
            <button class="user-dropdown-toggle" on:click=move |_| set_is_open.update(|open| *open = !*open)>
                "User"
            </button>
            <Show when=move || is_open.get()>
                <ul class="user-dropdown-menu">
                    <li on:click=manage_uploads>"Manage uploads"</li>
                    <li on:click=sign_out>"Sign Out"</li>
                </ul>
            </Show>
        </div>
    }
}
