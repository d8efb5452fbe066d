//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Which view the main area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// All patches
    Browse,
    /// Patches uploaded by one artist
    Artist(String),
    /// Detail page for one patch
    Patch { username: String, patchname: String },
    /// The signed-in user's uploads
    ManageUploads,
}

/// One toast message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Current toast plus a sequence number so a stale auto-dismiss timer never
/// hides a newer message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    seq: u64,
    current: Option<Notice>,
}

impl Notices {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn push(&mut self, message: String) -> u64 {
        self.seq += 1;
        self.current = Some(Notice { id: self.seq, message });
        self.seq
    }

    /// Hide notice `id` if it is still the one showing
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Toast state
    pub notices: ReadSignal<Notices>,
    set_notices: WriteSignal<Notices>,
    /// Current view - read
    pub route: ReadSignal<Route>,
    /// Current view - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(
        notices: (ReadSignal<Notices>, WriteSignal<Notices>),
        route: (ReadSignal<Route>, WriteSignal<Route>),
    ) -> Self {
        Self {
            notices: notices.0,
            set_notices: notices.1,
            route: route.0,
            set_route: route.1,
        }
    }

    /// Show a toast
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        self.set_notices.update(|notices| {
            notices.push(message);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.set_notices.update(|notices| notices.dismiss(id));
    }

    pub fn navigate(&self, route: Route) {
        log::debug!("[App] Navigate to {:?}", route);
        self.set_route.set(route);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let mut notices = Notices::default();
        let first = notices.push("Added to your Favourites".into());
        notices.dismiss(first);
        assert_eq!(notices.current(), None);

        let stale = notices.push("one".into());
        let fresh = notices.push("two".into());
        assert_ne!(stale, fresh);

        notices.dismiss(stale);
        assert_eq!(notices.current().map(|n| n.message.as_str()), Some("two"));

        notices.dismiss(fresh);
        assert_eq!(notices.current(), None);
    }
}
