//! HTTP implementation of the backend API

use kernel::id::GuestId;
use platform::http::{Credentials, HttpTransport, TransportError};
use reqwest::multipart::{Form, Part};

use crate::api::BackendApi;
use crate::config::BackendConfig;
use crate::domain::check::{CheckBody, CheckRequest, CheckResponse, Payload};
use crate::domain::content::{
    AdminStats, CommunityPost, DashboardSummary, LeaderboardEntry, LearningModule,
};
use crate::domain::guest::GuestSessionDto;
use crate::domain::upload::{FileUpload, OcrResponse, UploadResponse};
use crate::error::{ApiError, ApiResult};

/// reqwest-backed API client
#[derive(Debug, Clone)]
pub struct HttpBackend {
    transport: HttpTransport,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> ApiResult<Self> {
        let transport = HttpTransport::new(config.base_url.clone(), config.timeout)?;
        Ok(Self { transport })
    }

    pub fn from_transport(transport: HttpTransport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    fn file_part(file: &FileUpload) -> ApiResult<Part> {
        Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| ApiError::Transport(TransportError::Network(e)))
    }

    fn file_form(file: &FileUpload) -> ApiResult<Form> {
        Ok(Form::new().part("file", Self::file_part(file)?))
    }
}

/// Backend-issued ids are opaque but must stay a single path segment
fn check_path(check_id: &str) -> ApiResult<String> {
    let id = check_id.trim();
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));
    if !valid {
        return Err(ApiError::Status {
            status: 400,
            message: format!("Invalid analysis id: {check_id}"),
        });
    }
    Ok(format!("check/{id}"))
}

impl BackendApi for HttpBackend {
    async fn guest_session(&self, guest_id: &GuestId) -> ApiResult<GuestSessionDto> {
        let path = format!("guest/session/{guest_id}");
        self.transport
            .get_json(&path, &Credentials::Guest(*guest_id))
            .await
            .map_err(ApiError::from_transport)
    }

    async fn submit_check(
        &self,
        request: &CheckRequest,
        credentials: &Credentials,
    ) -> ApiResult<CheckResponse> {
        tracing::debug!(kind = %request.kind, "Submitting check");

        let result = match &request.payload {
            Payload::Text(content) => {
                let body = CheckBody {
                    kind: request.kind,
                    payload: content,
                    language: request.language.as_deref(),
                };
                self.transport.post_json("check", &body, credentials).await
            }
            Payload::Binary(file) => {
                let mut form = Form::new()
                    .text("kind", request.kind.as_str())
                    .part("file", Self::file_part(file)?);
                if let Some(language) = &request.language {
                    form = form.text("language", language.clone());
                }
                self.transport
                    .post_multipart("check/file", form, credentials)
                    .await
            }
        };

        result.map_err(ApiError::from_transport)
    }

    async fn get_check(
        &self,
        check_id: &str,
        credentials: &Credentials,
    ) -> ApiResult<CheckResponse> {
        let path = check_path(check_id)?;
        self.transport
            .get_json(&path, credentials)
            .await
            .map_err(ApiError::from_transport)
    }

    async fn upload(&self, file: &FileUpload, credentials: &Credentials) -> ApiResult<UploadResponse> {
        let form = Self::file_form(file)?;
        self.transport
            .post_multipart("upload", form, credentials)
            .await
            .map_err(ApiError::from_transport)
    }

    async fn ocr(&self, file: &FileUpload, credentials: &Credentials) -> ApiResult<OcrResponse> {
        let form = Self::file_form(file)?;
        self.transport
            .post_multipart("ocr", form, credentials)
            .await
            .map_err(ApiError::from_transport)
    }

    async fn learning_modules(&self, credentials: &Credentials) -> ApiResult<Vec<LearningModule>> {
        self.transport
            .get_json("learning/modules", credentials)
            .await
            .map_err(ApiError::from_transport)
    }

    async fn community_posts(&self, credentials: &Credentials) -> ApiResult<Vec<CommunityPost>> {
        self.transport
            .get_json("community/posts", credentials)
            .await
            .map_err(ApiError::from_transport)
    }

    async fn leaderboard(&self) -> ApiResult<Vec<LeaderboardEntry>> {
        self.transport
            .get_json("leaderboard", &Credentials::Anonymous)
            .await
            .map_err(ApiError::from_transport)
    }

    async fn dashboard(&self, credentials: &Credentials) -> ApiResult<DashboardSummary> {
        self.transport
            .get_json("dashboard", credentials)
            .await
            .map_err(ApiError::from_transport)
    }

    async fn admin_stats(&self, credentials: &Credentials) -> ApiResult<AdminStats> {
        self.transport
            .get_json("admin/stats", credentials)
            .await
            .map_err(ApiError::from_transport)
    }
}
