//! PatchShare Frontend App
//!
//! Header, routed main area and the toast.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::use_api;
use crate::components::{ManageUploads, Notification, PatchList, PatchPage, UserDropdown};
use crate::config::AppConfig;
use crate::context::{AppContext, Notices, Route};
use crate::store::{store_sign_out, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);
    let store = Store::new(AppState::default());
    provide_context(store);
    let ctx = AppContext::new(signal(Notices::default()), signal(Route::Browse));
    provide_context(ctx);

    let api = use_api();

    // Load the signed-in user and their likes on mount
    let session_api = api.clone();
    spawn_local(async move {
        let user = match session_api.current_user().await {
            Ok(user) => user,
            Err(e) => {
                log::error!("[App] Error loading current user: {}", e);
                return;
            }
        };
        let Some(user) = user else {
            log::info!("[App] No signed-in user");
            return;
        };
        log::info!("[App] Signed in as {}", user.username);

        let liked = session_api.list_liked_patches(&user.id).await;
        *store.current_user().write() = Some(user);
        match liked {
            Ok(ids) => store.liked_patches().write().replace(ids),
            Err(e) => {
                log::error!("[App] Error loading liked patches: {}", e);
                ctx.notify("Failed to load your Favourites.");
            }
        }
    });

    let api = StoredValue::new_local(api);
    let on_logout = Callback::new(move |_| {
        let api = api.get_value();
        spawn_local(async move {
            match api.logout().await {
                Ok(()) => {
                    store_sign_out(&store);
                    ctx.navigate(Route::Browse);
                }
                Err(e) => {
                    log::error!("[App] Error signing out: {}", e);
                    ctx.notify("Failed to sign out.");
                }
            }
        });
    });

    let main_view = move || match ctx.route.get() {
        Route::Browse => view! { <PatchList /> }.into_any(),
        Route::Artist(name) => view! { <PatchList artist=name /> }.into_any(),
        Route::Patch { username, patchname } => {
            view! { <PatchPage username=username patchname=patchname /> }.into_any()
        }
        Route::ManageUploads => view! { <ManageUploads /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <a href="#" class="app-title" on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ctx.navigate(Route::Browse);
                }>
                    "PatchShare"
                </a>
                <Show when=move || store.current_user().with(|user| user.is_some())>
                    <UserDropdown on_logout=on_logout />
                </Show>
            </header>
            <main class="main-content">{main_view}</main>
            <Notification />
        </div>
    }
}
