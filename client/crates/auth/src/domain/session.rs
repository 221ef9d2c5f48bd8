//! Session Entity
//!
//! An authenticated session: the user plus the bearer token the backend
//! accepts on their behalf.

use serde::{Deserialize, Serialize};

use crate::domain::user::User;
use crate::domain::value_object::Email;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user.id)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Sign-in form input
#[derive(Clone)]
pub struct SignInRequest {
    pub email: Email,
    pub password: String,
}

impl SignInRequest {
    pub fn new(email: Email, password: impl Into<String>) -> Self {
        Self {
            email,
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
