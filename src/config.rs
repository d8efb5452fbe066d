//! Frontend Configuration
//!
//! Read once at startup from the optional `window.__PATCHSHARE_CONFIG__`
//! object; anything missing falls back to defaults and the page origin.

use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Name of the JS global holding configuration overrides
pub const CONFIG_GLOBAL: &str = "__PATCHSHARE_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Base URL of the patch server; empty means the page origin
    pub api_base: String,
    /// Give up on a like/unlike after this long; 0 disables the timeout
    pub like_timeout_ms: u32,
    /// How long a notification toast stays up
    pub notification_ms: u32,
    /// Records kept by the in-memory logger
    pub log_capacity: usize,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            like_timeout_ms: 10_000,
            notification_ms: 3_000,
            log_capacity: 500,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load overrides from the page, then fill in the API origin
    pub fn load() -> Self {
        let mut config = Self::from_global().unwrap_or_default();
        if config.api_base.is_empty() {
            config.api_base = page_origin().unwrap_or_default();
        }
        config
    }

    fn from_global() -> Option<Self> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        match serde_wasm_bindgen::from_value(value) {
            Ok(config) => Some(config),
            Err(e) => {
                // Logger is not up yet; go straight to the console
                web_sys::console::warn_1(&format!("[Config] Ignoring {}: {}", CONFIG_GLOBAL, e).into());
                None
            }
        }
    }

    pub fn like_timeout(&self) -> Option<Duration> {
        (self.like_timeout_ms > 0).then(|| Duration::from_millis(u64::from(self.like_timeout_ms)))
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"apiBase": "https://patches.example", "likeTimeoutMs": 0}"#).unwrap();
        assert_eq!(config.api_base, "https://patches.example");
        assert_eq!(config.like_timeout(), None);
        assert_eq!(config.notification_ms, 3_000);
    }

    #[test]
    fn test_default_timeout_and_level() {
        let config = AppConfig::default();
        assert_eq!(config.like_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level_filter(), LevelFilter::Info);

        let config = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level_filter(), LevelFilter::Debug);
    }
}
