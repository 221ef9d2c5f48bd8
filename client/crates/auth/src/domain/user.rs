//! User Entity
//!
//! Profile of a signed-in user as reported by the identity provider. A copy
//! is cached locally so the last-known profile can be shown offline.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{Email, UserRole};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Email,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.satisfies(UserRole::Admin)
    }

    /// Name for greetings: the profile name, or the email local part
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            self.email.as_str().split('@').next().unwrap_or_default()
        } else {
            name
        }
    }
}
