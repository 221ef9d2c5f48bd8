//! Guest session source backed by the analysis API

use backend::BackendApi;
use kernel::id::GuestId;
use std::sync::Arc;

use crate::domain::guest_session::GuestSession;
use crate::domain::source::GuestSessionSource;
use crate::error::QuotaResult;

pub struct BackendSessionSource<B>
where
    B: BackendApi,
{
    api: Arc<B>,
}

impl<B> BackendSessionSource<B>
where
    B: BackendApi,
{
    pub fn new(api: Arc<B>) -> Self {
        Self { api }
    }
}

impl<B> GuestSessionSource for BackendSessionSource<B>
where
    B: BackendApi + Send + Sync,
{
    async fn fetch(&self, guest_id: &GuestId) -> QuotaResult<GuestSession> {
        let dto = self.api.guest_session(guest_id).await?;
        tracing::debug!(
            guest_id = %guest_id,
            remaining = dto.checks_remaining,
            daily_limit = dto.daily_limit,
            "Fetched guest session"
        );
        Ok(GuestSession::from_dto(*guest_id, dto))
    }
}
