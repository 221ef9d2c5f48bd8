//! Error Category - How a failure is surfaced to the user
//!
//! Four categories cover every recoverable failure in the client:
//!
//! | Category     | Example                          | Surface                      |
//! |--------------|----------------------------------|------------------------------|
//! | `Validation` | blank text, oversized file       | inline, never leaves the form|
//! | `Network`    | backend 5xx, connection refused  | dismissible banner, resubmit |
//! | `Degraded`   | guest session / feed fetch fails | silent default data          |
//! | `Auth`       | identity provider error code     | dedicated auth error page    |

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Validation,
    Network,
    Degraded,
    Auth,
}

impl Category {
    /// Whether the user can recover by resubmitting the same input
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Category::Network)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Validation => "validation",
            Category::Network => "network",
            Category::Degraded => "degraded",
            Category::Auth => "auth",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
