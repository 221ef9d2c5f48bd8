//! Auth State
//!
//! The value every page observes. Exactly one of three situations holds:
//! still loading, signed in (`user` present), or guest (`guest_id` present).

use kernel::id::GuestId;

use crate::domain::user::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub guest_id: Option<GuestId>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the identity provider has answered
    pub fn loading() -> Self {
        Self {
            user: None,
            guest_id: None,
            loading: true,
        }
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            guest_id: None,
            loading: false,
        }
    }

    pub fn guest(guest_id: Option<GuestId>) -> Self {
        Self {
            user: None,
            guest_id,
            loading: false,
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// Resolved and nobody is signed in
    #[inline]
    pub fn is_guest(&self) -> bool {
        !self.loading && self.user.is_none()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}
