//! Toggle State Machine
//!
//! Pure local replica of one (user, patch) like relation.
//!
//! States: `Idle(liked)`, `Idle(unliked)`, `Pending(liked -> unliked)`,
//! `Pending(unliked -> liked)`. `begin` moves Idle to Pending, `confirm`
//! and `rollback` move Pending back to Idle.

use crate::error::{ToggleError, ToggleResult};

/// Remote mutation a toggle issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikeAction {
    Like,
    Unlike,
}

impl LikeAction {
    /// Action that moves the relation to `liked`
    pub fn towards(liked: bool) -> Self {
        if liked {
            LikeAction::Like
        } else {
            LikeAction::Unlike
        }
    }

    /// Relation value after the action succeeds
    pub fn target(&self) -> bool {
        matches!(self, LikeAction::Like)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LikeAction::Like => "like",
            LikeAction::Unlike => "unlike",
        }
    }
}

/// Position in the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle { liked: bool },
    Pending { from: bool, to: bool },
}

/// Copyable view of the state, handed to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleSnapshot {
    pub liked: bool,
    pub count: u32,
    pub pending: bool,
}

impl ToggleSnapshot {
    /// Snapshot of a freshly seeded, idle toggle
    pub fn seeded(has_liked: bool, like_count: u32) -> Self {
        Self {
            liked: has_liked,
            count: like_count,
            pending: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    action: LikeAction,
    /// Whether the optimistic step actually moved the count (false when an
    /// unlike would have taken it below zero)
    counted: bool,
}

/// Local replica: optimistic value, last confirmed value, visible count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleState {
    current: bool,
    baseline: bool,
    count: u32,
    in_flight: Option<InFlight>,
}

impl ToggleState {
    /// Seed from a server snapshot
    pub fn new(has_liked: bool, like_count: u32) -> Self {
        Self {
            current: has_liked,
            baseline: has_liked,
            count: like_count,
            in_flight: None,
        }
    }

    pub fn is_liked(&self) -> bool {
        self.current
    }

    /// Last server-confirmed value
    pub fn baseline(&self) -> bool {
        self.baseline
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn phase(&self) -> Phase {
        match self.in_flight {
            Some(_) => Phase::Pending {
                from: self.baseline,
                to: self.current,
            },
            None => Phase::Idle { liked: self.current },
        }
    }

    pub fn snapshot(&self) -> ToggleSnapshot {
        ToggleSnapshot {
            liked: self.current,
            count: self.count,
            pending: self.is_pending(),
        }
    }

    /// Optimistic step: flip the value, move the count, enter Pending.
    ///
    /// Returns the remote action to issue. Rejected while another toggle is
    /// in flight.
    pub fn begin(&mut self) -> ToggleResult<LikeAction> {
        if self.in_flight.is_some() {
            return Err(ToggleError::ConcurrentToggleIgnored);
        }

        let action = LikeAction::towards(!self.current);
        let counted = match action {
            LikeAction::Like => {
                self.count = self.count.saturating_add(1);
                true
            }
            LikeAction::Unlike if self.count > 0 => {
                self.count -= 1;
                true
            }
            LikeAction::Unlike => false,
        };

        self.current = action.target();
        self.in_flight = Some(InFlight { action, counted });
        Ok(action)
    }

    /// Server accepted the in-flight mutation; the optimistic value becomes
    /// the new baseline
    pub fn confirm(&mut self) -> Option<LikeAction> {
        let in_flight = self.in_flight.take()?;
        self.baseline = self.current;
        Some(in_flight.action)
    }

    /// Server rejected the in-flight mutation; restore the baseline and undo
    /// exactly the count change `begin` made
    pub fn rollback(&mut self) -> Option<LikeAction> {
        let in_flight = self.in_flight.take()?;
        self.current = self.baseline;
        if in_flight.counted {
            self.count = match in_flight.action {
                LikeAction::Like => self.count.saturating_sub(1),
                LikeAction::Unlike => self.count.saturating_add(1),
            };
        }
        Some(in_flight.action)
    }

    /// Replace the replica with a fresh server snapshot.
    ///
    /// Ignored while a mutation is in flight; returns whether it applied.
    pub fn reseed(&mut self, has_liked: bool, like_count: u32) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        *self = Self::new(has_liked, like_count);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state_is_idle() {
        let state = ToggleState::new(false, 5);
        assert_eq!(state.phase(), Phase::Idle { liked: false });
        assert_eq!(state.snapshot(), ToggleSnapshot::seeded(false, 5));
        assert!(!state.baseline());
    }

    #[test]
    fn test_begin_flips_and_counts() {
        let mut state = ToggleState::new(false, 5);
        assert_eq!(state.begin(), Ok(LikeAction::Like));
        assert!(state.is_liked());
        assert_eq!(state.count(), 6);
        assert_eq!(state.phase(), Phase::Pending { from: false, to: true });
    }

    #[test]
    fn test_begin_while_pending_is_rejected() {
        let mut state = ToggleState::new(true, 3);
        state.begin().unwrap();
        assert_eq!(state.begin(), Err(ToggleError::ConcurrentToggleIgnored));
        assert!(!state.is_liked());
        assert_eq!(state.count(), 2);
    }

    #[test]
    fn test_confirm_moves_baseline() {
        let mut state = ToggleState::new(true, 3);
        state.begin().unwrap();
        assert_eq!(state.confirm(), Some(LikeAction::Unlike));
        assert_eq!(state.phase(), Phase::Idle { liked: false });
        assert!(!state.baseline());
        assert_eq!(state.count(), 2);
    }

    #[test]
    fn test_rollback_restores_baseline() {
        let mut state = ToggleState::new(false, 5);
        state.begin().unwrap();
        assert_eq!(state.rollback(), Some(LikeAction::Like));
        assert_eq!(state.snapshot(), ToggleSnapshot::seeded(false, 5));
    }

    #[test]
    fn test_rollback_after_saturated_unlike() {
        // Liked but the server snapshot reported zero likes
        let mut state = ToggleState::new(true, 0);
        state.begin().unwrap();
        assert_eq!(state.count(), 0);
        state.rollback();
        assert_eq!(state.snapshot(), ToggleSnapshot::seeded(true, 0));
    }

    #[test]
    fn test_settle_without_flight_is_noop() {
        let mut state = ToggleState::new(true, 1);
        assert_eq!(state.confirm(), None);
        assert_eq!(state.rollback(), None);
        assert_eq!(state.snapshot(), ToggleSnapshot::seeded(true, 1));
    }

    #[test]
    fn test_reseed_only_when_idle() {
        let mut state = ToggleState::new(false, 1);
        state.begin().unwrap();
        assert!(!state.reseed(false, 10));
        assert_eq!(state.count(), 2);

        state.confirm();
        assert!(state.reseed(false, 10));
        assert_eq!(state.snapshot(), ToggleSnapshot::seeded(false, 10));
    }
}
