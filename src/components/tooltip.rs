//! Tooltip Component

use leptos::prelude::*;

/// Info glyph that reveals `message` on hover
#[component]
pub fn Tooltip(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <span class="tooltip">
            <span class="tooltip-bubble" role="tooltip">{message}</span>
            <span class="tooltip-icon">"ℹ️"</span>
        </span>
    }
}
