//! Like Toggle Controller
//!
//! Drives a `ToggleState` against a `LikeApi`: flip locally, issue exactly
//! one remote mutation, then confirm or roll back.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{select, Either};

use crate::error::{RemoteError, ToggleError, ToggleResult};
use crate::remote::{LikeApi, Timer};
use crate::state::{LikeAction, ToggleSnapshot, ToggleState};

/// Confirmation signal after the server accepted a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Patch was added to the viewer's likes
    Added,
    /// Patch was removed from the viewer's likes
    Removed,
}

impl ToggleOutcome {
    /// Relation value the server now holds
    pub fn is_liked(&self) -> bool {
        matches!(self, ToggleOutcome::Added)
    }
}

impl From<LikeAction> for ToggleOutcome {
    fn from(action: LikeAction) -> Self {
        match action {
            LikeAction::Like => ToggleOutcome::Added,
            LikeAction::Unlike => ToggleOutcome::Removed,
        }
    }
}

#[derive(Clone)]
struct MutationTimeout {
    timer: Rc<dyn Timer>,
    after: Duration,
}

/// Optimistic like/unlike controller for one patch as seen by one view.
///
/// Cloning is cheap and clones share state, so an event handler can move a
/// clone into a spawned future. Two views of the same patch should each own
/// a separate controller; they reconcile independently.
#[derive(Clone)]
pub struct LikeToggle {
    patch_id: Rc<str>,
    state: Rc<RefCell<ToggleState>>,
    api: Rc<dyn LikeApi>,
    timeout: Option<MutationTimeout>,
    observer: Option<Rc<dyn Fn(ToggleSnapshot)>>,
}

impl LikeToggle {
    /// Initialize from the server snapshot the owning view received
    pub fn new(
        api: Rc<dyn LikeApi>,
        patch_id: impl Into<Rc<str>>,
        has_liked: bool,
        like_count: u32,
    ) -> Self {
        Self {
            patch_id: patch_id.into(),
            state: Rc::new(RefCell::new(ToggleState::new(has_liked, like_count))),
            api,
            timeout: None,
            observer: None,
        }
    }

    /// Treat a remote call that takes longer than `after` as failed
    pub fn with_timeout(mut self, timer: Rc<dyn Timer>, after: Duration) -> Self {
        self.timeout = Some(MutationTimeout { timer, after });
        self
    }

    /// Called with a fresh snapshot after every state transition
    pub fn on_change(mut self, observer: impl Fn(ToggleSnapshot) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn patch_id(&self) -> &str {
        &self.patch_id
    }

    pub fn snapshot(&self) -> ToggleSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    /// Adopt a newer server snapshot. Ignored while a mutation is in flight.
    pub fn reseed(&self, has_liked: bool, like_count: u32) -> bool {
        let applied = self.state.borrow_mut().reseed(has_liked, like_count);
        if applied {
            self.notify();
        }
        applied
    }

    /// Flip the like relation for `user_id`.
    ///
    /// The visible state changes before the remote call is issued. On
    /// failure it is rolled back and `RemoteMutationFailed` is returned.
    pub async fn toggle(&self, user_id: Option<&str>) -> ToggleResult<ToggleOutcome> {
        let user_id = match user_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                log::info!("[LikeToggle] {}: toggle without a signed-in user", self.patch_id);
                return Err(ToggleError::Unauthenticated);
            }
        };

        let begun = self.state.borrow_mut().begin();
        let action = match begun {
            Ok(action) => action,
            Err(err) => {
                log::debug!("[LikeToggle] {}: {}", self.patch_id, err);
                return Err(err);
            }
        };
        self.notify();
        log::debug!("[LikeToggle] {}: optimistic {} for {}", self.patch_id, action.as_str(), user_id);

        match self.send(action, user_id).await {
            Ok(()) => {
                self.state.borrow_mut().confirm();
                self.notify();
                log::info!("[LikeToggle] {}: {} confirmed", self.patch_id, action.as_str());
                Ok(ToggleOutcome::from(action))
            }
            Err(err) => {
                self.state.borrow_mut().rollback();
                self.notify();
                log::warn!("[LikeToggle] {}: {} failed, rolled back: {}", self.patch_id, action.as_str(), err);
                Err(ToggleError::RemoteMutationFailed(err))
            }
        }
    }

    async fn send(&self, action: LikeAction, user_id: &str) -> Result<(), RemoteError> {
        let call = async {
            match action {
                LikeAction::Like => self.api.like(user_id, &self.patch_id).await,
                LikeAction::Unlike => self.api.unlike(user_id, &self.patch_id).await,
            }
        };

        let Some(timeout) = &self.timeout else {
            return call.await;
        };

        match select(Box::pin(call), timeout.timer.sleep(timeout.after)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(RemoteError::TimedOut),
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        if let Some(observer) = &self.observer {
            observer(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::LocalSleep;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    enum Reply {
        Now(Result<(), RemoteError>),
        Later(oneshot::Receiver<Result<(), RemoteError>>),
        Never,
    }

    /// Remote double that records calls and answers from a script
    #[derive(Default)]
    struct ScriptedApi {
        calls: RefCell<Vec<(LikeAction, String, String)>>,
        replies: RefCell<VecDeque<Reply>>,
    }

    impl ScriptedApi {
        fn reply(&self, reply: Reply) {
            self.replies.borrow_mut().push_back(reply);
        }

        fn calls(&self) -> Vec<(LikeAction, String, String)> {
            self.calls.borrow().clone()
        }

        async fn answer(&self, action: LikeAction, user_id: &str, patch_id: &str) -> Result<(), RemoteError> {
            self.calls.borrow_mut().push((action, user_id.to_string(), patch_id.to_string()));
            let reply = self.replies.borrow_mut().pop_front();
            match reply.unwrap_or(Reply::Now(Ok(()))) {
                Reply::Now(result) => result,
                Reply::Later(rx) => rx.await.unwrap_or(Err(RemoteError::Other("reply dropped".into()))),
                Reply::Never => futures::future::pending().await,
            }
        }
    }

    #[async_trait(?Send)]
    impl LikeApi for ScriptedApi {
        async fn like(&self, user_id: &str, patch_id: &str) -> Result<(), RemoteError> {
            self.answer(LikeAction::Like, user_id, patch_id).await
        }

        async fn unlike(&self, user_id: &str, patch_id: &str) -> Result<(), RemoteError> {
            self.answer(LikeAction::Unlike, user_id, patch_id).await
        }
    }

    struct TokioTimer;

    impl Timer for TokioTimer {
        fn sleep(&self, duration: Duration) -> LocalSleep {
            Box::pin(tokio::time::sleep(duration))
        }
    }

    fn setup(has_liked: bool, like_count: u32) -> (Rc<ScriptedApi>, LikeToggle) {
        let api = Rc::new(ScriptedApi::default());
        let toggle = LikeToggle::new(api.clone(), "patch-1", has_liked, like_count);
        (api, toggle)
    }

    #[tokio::test]
    async fn test_round_trip_restores_state() {
        for initial in [false, true] {
            let (api, toggle) = setup(initial, 4);

            toggle.toggle(Some("user-1")).await.expect("first toggle");
            assert_eq!(toggle.snapshot().liked, !initial);
            toggle.toggle(Some("user-1")).await.expect("second toggle");

            assert_eq!(toggle.snapshot(), ToggleSnapshot::seeded(initial, 4));
            assert_eq!(api.calls().len(), 2);
        }
    }

    #[tokio::test]
    async fn test_failure_rolls_back() {
        let (api, toggle) = setup(false, 5);
        let (tx, rx) = oneshot::channel();
        api.reply(Reply::Later(rx));

        let mut pending = std::pin::pin!(toggle.toggle(Some("user-1")));
        assert!(futures::poll!(pending.as_mut()).is_pending());
        assert_eq!(toggle.snapshot(), ToggleSnapshot { liked: true, count: 6, pending: true });

        tx.send(Err(RemoteError::Status(500))).unwrap();
        let result = pending.await;

        assert_eq!(result, Err(ToggleError::RemoteMutationFailed(RemoteError::Status(500))));
        assert_eq!(toggle.snapshot(), ToggleSnapshot::seeded(false, 5));
    }

    #[tokio::test]
    async fn test_second_toggle_while_pending_is_dropped() {
        let (api, toggle) = setup(false, 0);
        let (tx, rx) = oneshot::channel();
        api.reply(Reply::Later(rx));

        let mut first = std::pin::pin!(toggle.toggle(Some("user-1")));
        assert!(futures::poll!(first.as_mut()).is_pending());

        let second = toggle.toggle(Some("user-1")).await;
        assert_eq!(second, Err(ToggleError::ConcurrentToggleIgnored));

        tx.send(Ok(())).unwrap();
        assert_eq!(first.await, Ok(ToggleOutcome::Added));
        assert_eq!(api.calls(), vec![(LikeAction::Like, "user-1".to_string(), "patch-1".to_string())]);
        assert_eq!(toggle.snapshot(), ToggleSnapshot::seeded(true, 1));
    }

    #[tokio::test]
    async fn test_unauthenticated_toggle_changes_nothing() {
        let (api, toggle) = setup(false, 2);

        assert_eq!(toggle.toggle(None).await, Err(ToggleError::Unauthenticated));
        assert_eq!(toggle.toggle(Some("  ")).await, Err(ToggleError::Unauthenticated));

        assert!(api.calls().is_empty());
        assert_eq!(toggle.snapshot(), ToggleSnapshot::seeded(false, 2));
    }

    #[tokio::test]
    async fn test_like_then_failed_unlike() {
        let (api, toggle) = setup(false, 5);

        assert_eq!(toggle.toggle(Some("user-1")).await, Ok(ToggleOutcome::Added));
        assert_eq!(toggle.snapshot(), ToggleSnapshot::seeded(true, 6));

        let (tx, rx) = oneshot::channel();
        api.reply(Reply::Later(rx));
        let mut unlike = std::pin::pin!(toggle.toggle(Some("user-1")));
        assert!(futures::poll!(unlike.as_mut()).is_pending());
        assert_eq!(toggle.snapshot(), ToggleSnapshot { liked: false, count: 5, pending: true });

        tx.send(Err(RemoteError::Network("offline".into()))).unwrap();
        assert!(unlike.await.is_err());
        assert_eq!(toggle.snapshot(), ToggleSnapshot::seeded(true, 6));

        let actions: Vec<LikeAction> = api.calls().into_iter().map(|(action, _, _)| action).collect();
        assert_eq!(actions, vec![LikeAction::Like, LikeAction::Unlike]);
    }

    #[tokio::test]
    async fn test_views_reconcile_independently() {
        let api = Rc::new(ScriptedApi::default());
        let list_row = LikeToggle::new(api.clone(), "patch-1", false, 3);
        let detail_page = LikeToggle::new(api.clone(), "patch-1", false, 3);

        list_row.toggle(Some("user-1")).await.unwrap();

        assert_eq!(list_row.snapshot(), ToggleSnapshot::seeded(true, 4));
        assert_eq!(detail_page.snapshot(), ToggleSnapshot::seeded(false, 3));

        // Detail page re-fetches its snapshot
        assert!(detail_page.reseed(true, 4));
        assert_eq!(detail_page.snapshot(), ToggleSnapshot::seeded(true, 4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_call_times_out() {
        let (api, toggle) = setup(false, 1);
        let toggle = toggle.with_timeout(Rc::new(TokioTimer), Duration::from_secs(10));
        api.reply(Reply::Never);

        let result = toggle.toggle(Some("user-1")).await;

        assert_eq!(result, Err(ToggleError::RemoteMutationFailed(RemoteError::TimedOut)));
        assert_eq!(toggle.snapshot(), ToggleSnapshot::seeded(false, 1));
        assert!(!toggle.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_call_beats_timeout() {
        let (_api, toggle) = setup(true, 1);
        let toggle = toggle.with_timeout(Rc::new(TokioTimer), Duration::from_secs(10));

        assert_eq!(toggle.toggle(Some("user-1")).await, Ok(ToggleOutcome::Removed));
        assert_eq!(toggle.snapshot(), ToggleSnapshot::seeded(false, 0));
    }

    #[tokio::test]
    async fn test_reseed_ignored_while_pending() {
        let (api, toggle) = setup(false, 1);
        let (tx, rx) = oneshot::channel();
        api.reply(Reply::Later(rx));

        let mut pending = std::pin::pin!(toggle.toggle(Some("user-1")));
        assert!(futures::poll!(pending.as_mut()).is_pending());
        assert!(!toggle.reseed(false, 1));

        tx.send(Ok(())).unwrap();
        pending.await.unwrap();
        assert_eq!(toggle.snapshot(), ToggleSnapshot::seeded(true, 2));
    }

    #[tokio::test]
    async fn test_observer_sees_every_transition() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let api = Rc::new(ScriptedApi::default());
        api.reply(Reply::Now(Err(RemoteError::Status(502))));
        let toggle = LikeToggle::new(api, "patch-1", false, 0)
            .on_change(move |snapshot| sink.borrow_mut().push(snapshot));

        let _ = toggle.toggle(Some("user-1")).await;

        assert_eq!(
            *seen.borrow(),
            vec![
                ToggleSnapshot { liked: true, count: 1, pending: true },
                ToggleSnapshot::seeded(false, 0),
            ]
        );
    }
}
