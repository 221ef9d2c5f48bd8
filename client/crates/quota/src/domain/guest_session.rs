//! Guest Session Entity

use backend::models::GuestSessionDto;
use chrono::{DateTime, Utc};
use kernel::id::GuestId;

/// An unauthenticated visitor's quota record
///
/// Always satisfies `0 <= checks_remaining <= daily_limit` and
/// `daily_limit > 0`; out-of-range input is clamped on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestSession {
    guest_id: GuestId,
    checks_remaining: u32,
    daily_limit: u32,
    created_at: Option<DateTime<Utc>>,
}

impl GuestSession {
    pub fn new(
        guest_id: GuestId,
        checks_remaining: u32,
        daily_limit: u32,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        let daily_limit = daily_limit.max(1);
        if checks_remaining > daily_limit {
            tracing::debug!(checks_remaining, daily_limit, "Clamping remaining checks to daily limit");
        }
        Self {
            guest_id,
            checks_remaining: checks_remaining.min(daily_limit),
            daily_limit,
            created_at,
        }
    }

    /// Full quota under an assumed limit, used when the backend is unreachable
    pub fn fallback(guest_id: GuestId, daily_limit: u32) -> Self {
        Self::new(guest_id, daily_limit, daily_limit, None)
    }

    pub fn from_dto(guest_id: GuestId, dto: GuestSessionDto) -> Self {
        Self::new(guest_id, dto.checks_remaining, dto.daily_limit, dto.created_at)
    }

    pub fn guest_id(&self) -> GuestId {
        self.guest_id
    }

    pub fn checks_remaining(&self) -> u32 {
        self.checks_remaining
    }

    pub fn daily_limit(&self) -> u32 {
        self.daily_limit
    }

    pub fn checks_used(&self) -> u32 {
        self.daily_limit - self.checks_remaining
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_out_of_range_counts() {
        let session = GuestSession::new(GuestId::new(), 15, 10, None);
        assert_eq!(session.checks_remaining(), 10);
        assert_eq!(session.checks_used(), 0);

        let session = GuestSession::new(GuestId::new(), 0, 0, None);
        assert_eq!(session.daily_limit(), 1);
        assert_eq!(session.checks_remaining(), 0);
    }

    #[test]
    fn test_from_dto() {
        let id = GuestId::new();
        let dto = GuestSessionDto {
            checks_remaining: 7,
            daily_limit: 10,
            created_at: None,
        };
        let session = GuestSession::from_dto(id, dto);
        assert_eq!(session.guest_id(), id);
        assert_eq!(session.checks_used(), 3);
    }
}
