use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Role of a signed-in user
///
/// Guests have no role; they are represented by the absence of a user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    #[display("user")]
    User,
    #[display("moderator")]
    Moderator,
    #[display("admin")]
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            User => "user",
            Moderator => "moderator",
            Admin => "admin",
        }
    }

    /// Parse a role code sent by the identity provider
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "user" => Some(User),
            "moderator" => Some(Moderator),
            "admin" => Some(Admin),
            _ => {
                tracing::warn!(code, "Unknown user role code");
                None
            }
        }
    }

    /// Whether this role grants at least `required`
    #[inline]
    pub fn satisfies(&self, required: UserRole) -> bool {
        *self >= required
    }
}
