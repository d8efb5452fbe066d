//! Notification Component
//!
//! Single toast fed from the app context. Each message hides itself after
//! the configured delay; a click hides it at once.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::context::use_app_context;

#[component]
pub fn Notification() -> impl IntoView {
    let ctx = use_app_context();
    let delay_ms = expect_context::<AppConfig>().notification_ms;

    // Schedule a dismiss for every new notice; dismissing by id leaves a
    // newer notice alone
    Effect::new(move |_| {
        let Some(id) = ctx.notices.with(|notices| notices.current().map(|n| n.id)) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            ctx.dismiss(id);
        });
    });

    move || {
        ctx.notices.with(|notices| notices.current().cloned()).map(|notice| {
            let id = notice.id;
            view! {
                <div class="notification" role="status" on:click=move |_| ctx.dismiss(id)>
                    {notice.message}
                </div>
            }
        })
    }
}
