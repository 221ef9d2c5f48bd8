//! Guest Session Source Trait
//!
//! Where the tracker reads server-side quota counters from. The API-backed
//! implementation is in `infra/`.

use kernel::id::GuestId;

use crate::domain::guest_session::GuestSession;
use crate::error::QuotaResult;

#[trait_variant::make(GuestSessionSource: Send)]
pub trait LocalGuestSessionSource {
    /// Current counters for `guest_id`
    async fn fetch(&self, guest_id: &GuestId) -> QuotaResult<GuestSession>;
}
