//! Tag Select Component
//!
//! Dropdown over the fixed tag options.

use leptos::prelude::*;

use crate::metadata::TAG_OPTIONS;

/// Labelled tag dropdown; an empty value means "no tag"
#[component]
pub fn TagSelect(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-row">
            <label>{label}</label>
            <select on:change=move |ev| value.set(event_target_value(&ev))>
                <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
                {TAG_OPTIONS.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {option}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
