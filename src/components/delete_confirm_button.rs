//! Delete Confirm Button Component
//!
//! Two-step delete control that stays locked while the request is in flight.

use leptos::prelude::*;

/// What the control shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteStage {
    Ready,
    Confirming,
    Deleting,
}

/// An in-flight request wins over everything else
fn delete_stage(confirming: bool, pending: bool) -> DeleteStage {
    if pending {
        DeleteStage::Deleting
    } else if confirming {
        DeleteStage::Confirming
    } else {
        DeleteStage::Ready
    }
}

/// Delete button with inline "Delete?" confirmation
///
/// # Arguments
/// * `pending` - True while the owner's delete request is in flight; no
///   control is clickable until it settles
/// * `on_confirm` - Runs once per confirmation
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    move || match delete_stage(confirming.get(), pending.get()) {
        DeleteStage::Ready => view! {
            <button
                class="delete-btn"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "Delete"
            </button>
        }
        .into_any(),
        DeleteStage::Confirming => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        if !pending.get_untracked() {
                            on_confirm.run(());
                        }
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        }
        .into_any(),
        DeleteStage::Deleting => view! {
            <button class="delete-btn" disabled=true>"Deleting..."</button>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_request_locks_the_control() {
        // Confirmed and waiting on the server: nothing to click
        assert_eq!(delete_stage(true, true), DeleteStage::Deleting);
        assert_eq!(delete_stage(false, true), DeleteStage::Deleting);
    }

    #[test]
    fn test_failed_request_returns_to_ready() {
        assert_eq!(delete_stage(false, false), DeleteStage::Ready);
        assert_eq!(delete_stage(true, false), DeleteStage::Confirming);
    }
}
