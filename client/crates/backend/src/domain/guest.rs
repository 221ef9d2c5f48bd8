//! Guest session wire model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend view of a guest's daily quota
///
/// The server is the source of truth; the client displays these numbers and
/// never recomputes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSessionDto {
    pub checks_remaining: u32,
    pub daily_limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
