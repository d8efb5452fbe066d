//! Like Button Component
//!
//! Heart toggle backed by one `LikeToggle`. List rows and the patch page
//! both render this instead of carrying their own like logic.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use optimistic_toggle::{
    LikeApi, LikedPatches, LikeToggle, LocalSleep, Timer, ToggleError, ToggleOutcome, ToggleSnapshot,
};

use crate::api::{use_api, HttpLikeApi};
use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::store::{store_record_like, store_user_id, use_app_store};

const SIGN_IN_MESSAGE: &str = "Sign in to add Favourites";
const ADDED_MESSAGE: &str = "Added to your Favourites";
const REMOVED_MESSAGE: &str = "Removed from your Favourites";
const FAILED_MESSAGE: &str = "Could not update Favourites";

/// Server snapshot a like button is seeded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikeSeed {
    pub has_liked: bool,
    pub like_count: u32,
}

impl LikeSeed {
    /// Seed for one patch from the server snapshot
    ///
    /// The patch's own liker ids decide `has_liked` once the viewer is known,
    /// so a row rendered before the relation cache arrives is still right.
    /// The cache covers likes confirmed in this session.
    pub fn for_patch(patch_id: &str, likes: &[String], user_id: Option<&str>, liked: &LikedPatches) -> Self {
        let has_liked = match user_id {
            Some(user_id) => liked.contains(patch_id) || likes.iter().any(|id| id == user_id),
            None => false,
        };
        Self {
            has_liked,
            like_count: u32::try_from(likes.len()).unwrap_or(u32::MAX),
        }
    }
}

/// Mutation timeouts on the browser event loop
struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalSleep {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(millis))
    }
}

fn confirmation_message(outcome: ToggleOutcome) -> &'static str {
    match outcome {
        ToggleOutcome::Added => ADDED_MESSAGE,
        ToggleOutcome::Removed => REMOVED_MESSAGE,
    }
}

/// Like/unlike control for one patch
///
/// # Arguments
/// * `patch_id` - Patch the control belongs to
/// * `seed` - Server snapshot; a changed value re-seeds the control when no toggle is in flight
/// * `show_count` - Render "Like count: N" next to the heart
#[component]
pub fn LikeButton(
    #[prop(into)] patch_id: String,
    #[prop(into)] seed: Signal<LikeSeed>,
    #[prop(optional)] show_count: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let config = expect_context::<AppConfig>();

    let initial = seed.get_untracked();
    let snapshot = RwSignal::new(ToggleSnapshot::seeded(initial.has_liked, initial.like_count));

    let api: Rc<dyn LikeApi> = Rc::new(HttpLikeApi::new(use_api()));
    let mut toggle = LikeToggle::new(api, patch_id, initial.has_liked, initial.like_count)
        .on_change(move |next| {
            // The view may already be gone when a slow request settles
            let _ = snapshot.try_set(next);
        });
    if let Some(after) = config.like_timeout() {
        toggle = toggle.with_timeout(Rc::new(BrowserTimer), after);
    }
    let toggle = StoredValue::new_local(toggle);

    Effect::new(move |_| {
        let next = seed.get();
        toggle.with_value(|toggle| {
            toggle.reseed(next.has_liked, next.like_count);
        });
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let user_id = store_user_id(&store);
        let toggle = toggle.get_value();

        spawn_local(async move {
            match toggle.toggle(user_id.as_deref()).await {
                Ok(outcome) => {
                    store_record_like(&store, toggle.patch_id(), outcome.is_liked());
                    ctx.notify(confirmation_message(outcome));
                }
                Err(ToggleError::Unauthenticated) => ctx.notify(SIGN_IN_MESSAGE),
                Err(err) if err.is_silent() => {}
                Err(err) => {
                    log::error!("[LikeButton] {}: {}", toggle.patch_id(), err);
                    ctx.notify(FAILED_MESSAGE);
                }
            }
        });
    };

    view! {
        <div class="like-control">
            <button
                class=move || if snapshot.get().pending { "like-btn pending" } else { "like-btn" }
                title=move || if snapshot.get().liked { "Remove from Favourites" } else { "Add to Favourites" }
                on:click=on_click
            >
                {move || if snapshot.get().liked { "♥" } else { "♡" }}
            </button>
            {show_count.then(|| view! {
                <span class="like-count">"Like count: " {move || snapshot.get().count}</span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn likers(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_seed_before_relation_cache_loads() {
        let likes = likers(&["u1", "u2", "u3"]);
        let empty = LikedPatches::new();

        // Anonymous until the session request returns
        assert_eq!(
            LikeSeed::for_patch("p1", &likes, None, &empty),
            LikeSeed { has_liked: false, like_count: 3 }
        );
        // Viewer known, cache still empty: the snapshot alone decides
        assert_eq!(
            LikeSeed::for_patch("p1", &likes, Some("u2"), &empty),
            LikeSeed { has_liked: true, like_count: 3 }
        );
        assert_eq!(
            LikeSeed::for_patch("p1", &likes, Some("u9"), &empty),
            LikeSeed { has_liked: false, like_count: 3 }
        );
    }

    #[test]
    fn test_seed_uses_relation_cache() {
        let liked: LikedPatches = ["p1".to_string()].into_iter().collect();
        let seed = LikeSeed::for_patch("p1", &[], Some("u9"), &liked);
        assert!(seed.has_liked);
        assert_eq!(seed.like_count, 0);
    }

    #[test]
    fn test_confirmation_messages_differ() {
        assert_eq!(confirmation_message(ToggleOutcome::Added), "Added to your Favourites");
        assert_eq!(confirmation_message(ToggleOutcome::Removed), "Removed from your Favourites");
    }
}
