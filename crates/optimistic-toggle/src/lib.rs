//! Optimistic Toggle
//!
//! A small controller for binary user preferences (liked / not liked) that
//! live on a remote server. The local value flips immediately, exactly one
//! remote mutation is issued, and the value is rolled back if the server
//! rejects it.
//!
//! Layers:
//! - state: the pure state machine (`ToggleState`)
//! - remote: the consumed remote contract (`LikeApi`) and the `Timer` seam
//! - controller: `LikeToggle`, which drives the state machine against a remote
//! - relation: `LikedPatches`, the shared relation cache views seed from

mod controller;
mod error;
mod relation;
mod remote;
mod state;

pub use controller::{LikeToggle, ToggleOutcome};
pub use error::{RemoteError, ToggleError, ToggleResult};
pub use relation::LikedPatches;
pub use remote::{LikeApi, LocalSleep, Timer};
pub use state::{LikeAction, Phase, ToggleSnapshot, ToggleState};
