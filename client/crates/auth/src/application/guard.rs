//! Route Guards
//!
//! Pure decisions over the current auth state. While the state is loading,
//! guards answer `Wait` so pages show a spinner instead of redirecting early.

use crate::domain::state::AuthState;
use crate::domain::value_object::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Wait,
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Signed-in users only
pub fn require_auth(state: &AuthState, login_route: &'static str) -> GuardDecision {
    if state.is_loading() {
        GuardDecision::Wait
    } else if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(login_route)
    }
}

/// Signed-in users with at least `role`; others go to `fallback_route`
pub fn require_role(
    state: &AuthState,
    role: UserRole,
    login_route: &'static str,
    fallback_route: &'static str,
) -> GuardDecision {
    match require_auth(state, login_route) {
        GuardDecision::Allow => match state.user() {
            Some(user) if user.role.satisfies(role) => GuardDecision::Allow,
            _ => {
                tracing::debug!(required = %role, "Role guard rejected user");
                GuardDecision::Redirect(fallback_route)
            }
        },
        other => other,
    }
}

/// Guest-only pages (login, sign-up)
pub fn guest_only(state: &AuthState, home_route: &'static str) -> GuardDecision {
    if state.is_loading() {
        GuardDecision::Wait
    } else if state.is_authenticated() {
        GuardDecision::Redirect(home_route)
    } else {
        GuardDecision::Allow
    }
}
