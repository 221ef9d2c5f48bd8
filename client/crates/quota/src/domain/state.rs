//! Quota State Machine
//!
//! ```text
//! Uninitialized -> Loading -> Ready(n) -> Exhausted
//!        \            \          \           \
//!         +------------+----------+-----------+--> AuthenticatedBypass (terminal)
//! ```
//!
//! Every transition is a pure function returning the next state. Transitions
//! that do not apply to the current state return it unchanged.

use serde::Serialize;

use crate::domain::guest_session::GuestSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuotaState {
    /// Auth state not resolved yet
    #[default]
    Uninitialized,
    /// Guest session fetch in flight
    Loading,
    /// Checks left today; `remaining` is never 0
    Ready { remaining: u32, daily_limit: u32 },
    /// No checks left; submissions are blocked
    Exhausted { daily_limit: u32 },
    /// A signed-in user is present; quota no longer applies
    AuthenticatedBypass,
}

impl QuotaState {
    /// `Ready` for a positive count, `Exhausted` at zero
    fn settle(remaining: u32, daily_limit: u32) -> Self {
        let daily_limit = daily_limit.max(1);
        match remaining.min(daily_limit) {
            0 => QuotaState::Exhausted { daily_limit },
            remaining => QuotaState::Ready {
                remaining,
                daily_limit,
            },
        }
    }

    /// Auth resolved to guest
    pub fn begin_loading(self) -> Self {
        match self {
            QuotaState::Uninitialized => QuotaState::Loading,
            other => other,
        }
    }

    /// Guest session fetched; server counters replace local ones
    pub fn loaded(self, session: &GuestSession) -> Self {
        match self {
            QuotaState::AuthenticatedBypass => self,
            _ => Self::settle(session.checks_remaining(), session.daily_limit()),
        }
    }

    /// Guest session fetch failed; assume the full fallback limit
    pub fn load_failed(self, fallback_limit: u32) -> Self {
        match self {
            QuotaState::Loading => Self::settle(fallback_limit, fallback_limit),
            other => other,
        }
    }

    /// A check completed
    ///
    /// With `server_remaining` the counter resynchronizes to it; without,
    /// it is decremented by exactly one.
    pub fn record_success(self, server_remaining: Option<u32>) -> Self {
        match (self, server_remaining) {
            (
                QuotaState::Ready { daily_limit, .. } | QuotaState::Exhausted { daily_limit },
                Some(server),
            ) => Self::settle(server, daily_limit),
            (
                QuotaState::Ready {
                    remaining,
                    daily_limit,
                },
                None,
            ) => Self::settle(remaining.saturating_sub(1), daily_limit),
            (other, _) => other,
        }
    }

    /// The backend rejected a submission for quota reasons
    pub fn record_quota_rejection(self, fallback_limit: u32) -> Self {
        match self {
            QuotaState::AuthenticatedBypass => self,
            QuotaState::Ready { daily_limit, .. } | QuotaState::Exhausted { daily_limit } => {
                QuotaState::Exhausted { daily_limit }
            }
            QuotaState::Uninitialized | QuotaState::Loading => QuotaState::Exhausted {
                daily_limit: fallback_limit.max(1),
            },
        }
    }

    /// A signed-in user appeared
    pub fn authenticate(self) -> Self {
        QuotaState::AuthenticatedBypass
    }

    /// Checks left, when known
    pub fn remaining(&self) -> Option<u32> {
        match self {
            QuotaState::Ready { remaining, .. } => Some(*remaining),
            QuotaState::Exhausted { .. } => Some(0),
            _ => None,
        }
    }

    pub fn daily_limit(&self) -> Option<u32> {
        match self {
            QuotaState::Ready { daily_limit, .. } | QuotaState::Exhausted { daily_limit } => {
                Some(*daily_limit)
            }
            _ => None,
        }
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, QuotaState::Exhausted { .. })
    }

    #[inline]
    pub fn is_bypassed(&self) -> bool {
        matches!(self, QuotaState::AuthenticatedBypass)
    }

    /// Quota rules are in force (a resolved guest)
    pub fn is_guest(&self) -> bool {
        matches!(
            self,
            QuotaState::Loading | QuotaState::Ready { .. } | QuotaState::Exhausted { .. }
        )
    }
}
