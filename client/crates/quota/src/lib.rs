//! Guest Quota Module
//!
//! Clean Architecture structure:
//! - `domain/` - Guest session entity, quota state machine, upgrade prompt policy
//! - `application/` - The [`GuestQuotaTracker`] driven by auth state and check results
//! - `infra/` - Guest session source backed by the analysis API
//!
//! ## Quota Model
//! - The server is the source of truth; every check response resynchronizes
//!   the local counter to its `remaining_checks`
//! - A failed guest-session fetch falls back to a permissive default limit
//! - Failed submissions never consume a check
//! - Once a signed-in user appears the tracker bypasses itself for good

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::QuotaConfig;
pub use application::tracker::GuestQuotaTracker;
pub use domain::prompt::{PromptSlot, UpgradePrompt, Urgency};
pub use domain::source::GuestSessionSource;
pub use domain::state::QuotaState;
pub use error::{QuotaError, QuotaResult};
pub use infra::backend_source::BackendSessionSource;

pub mod models {
    pub use crate::domain::guest_session::*;
}
