//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use optimistic_toggle::LikedPatches;
use reactive_stores::Store;

use crate::models::{PatchSummary, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Patches shown in the browse and artist views
    pub patches: Vec<PatchSummary>,
    /// Uploads of the signed-in user
    pub user_patches: Vec<PatchSummary>,
    /// Patches the signed-in user likes (seed source for like buttons)
    pub liked_patches: LikedPatches,
    pub current_user: Option<User>,
    /// Patch loaded into the player; list rows mark it, and the player
    /// embedding the page picks it up from here
    pub selected_patch: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Id of the signed-in user, read without subscribing
pub fn store_user_id(store: &AppStore) -> Option<String> {
    store.current_user().read_untracked().as_ref().map(|user| user.id.clone())
}

/// Record a confirmed like/unlike
pub fn store_record_like(store: &AppStore, patch_id: &str, liked: bool) {
    store.liked_patches().write().record(patch_id, liked);
}

/// Remove an upload from the store by ID
pub fn store_remove_user_patch(store: &AppStore, patch_id: &str) {
    store.user_patches().write().retain(|patch| patch.id != patch_id);
}

/// Forget everything tied to the signed-in user
pub fn store_sign_out(store: &AppStore) {
    *store.current_user().write() = None;
    store.liked_patches().write().clear();
    store.user_patches().write().clear();
}
