//! Backend API trait
//!
//! Interface to the analysis backend. The HTTP implementation lives in
//! `infra/`; tests substitute in-memory fakes.

use kernel::id::GuestId;
use platform::http::Credentials;

use crate::domain::check::{CheckRequest, CheckResponse};
use crate::domain::content::{
    AdminStats, CommunityPost, DashboardSummary, LeaderboardEntry, LearningModule,
};
use crate::domain::guest::GuestSessionDto;
use crate::domain::upload::{FileUpload, OcrResponse, UploadResponse};
use crate::error::ApiResult;

#[trait_variant::make(BackendApi: Send)]
pub trait LocalBackendApi {
    /// Current quota counters for a guest
    async fn guest_session(&self, guest_id: &GuestId) -> ApiResult<GuestSessionDto>;

    /// Submit one check; the response carries `remaining_checks` for guests
    async fn submit_check(
        &self,
        request: &CheckRequest,
        credentials: &Credentials,
    ) -> ApiResult<CheckResponse>;

    /// A previously computed check
    async fn get_check(&self, check_id: &str, credentials: &Credentials)
    -> ApiResult<CheckResponse>;

    /// Host a file and return its URL
    async fn upload(&self, file: &FileUpload, credentials: &Credentials)
    -> ApiResult<UploadResponse>;

    /// Extract text from an image
    async fn ocr(&self, file: &FileUpload, credentials: &Credentials) -> ApiResult<OcrResponse>;

    async fn learning_modules(&self, credentials: &Credentials) -> ApiResult<Vec<LearningModule>>;

    async fn community_posts(&self, credentials: &Credentials) -> ApiResult<Vec<CommunityPost>>;

    async fn leaderboard(&self) -> ApiResult<Vec<LeaderboardEntry>>;

    async fn dashboard(&self, credentials: &Credentials) -> ApiResult<DashboardSummary>;

    async fn admin_stats(&self, credentials: &Credentials) -> ApiResult<AdminStats>;
}
