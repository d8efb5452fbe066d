//! PatchShare Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod format;
mod metadata;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if rolling_logger::init_logger(config.log_capacity, config.log_level_filter()).is_ok() {
        let _ = rolling_logger::info(&format!("[main] PatchShare starting against {}", config.api_base));
    }

    mount_to_body(move || view! { <App config=config /> });
}
