//! Remote Contract
//!
//! What the controller needs from the outside world: the like/unlike
//! mutations and a way to sleep for timeouts.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::RemoteError;

/// Remote like/unlike endpoints.
///
/// Futures are not required to be `Send`; the controller runs on a single
/// cooperative thread (the browser event loop).
#[async_trait(?Send)]
pub trait LikeApi {
    /// Record that `user_id` likes `patch_id`. Liking twice must not create a
    /// duplicate relation.
    async fn like(&self, user_id: &str, patch_id: &str) -> Result<(), RemoteError>;

    /// Remove the relation between `user_id` and `patch_id`
    async fn unlike(&self, user_id: &str, patch_id: &str) -> Result<(), RemoteError>;
}

/// Boxed sleep future returned by a `Timer`
pub type LocalSleep = Pin<Box<dyn Future<Output = ()>>>;

/// Runtime-specific sleep used for mutation timeouts
pub trait Timer {
    fn sleep(&self, duration: Duration) -> LocalSleep;
}
