//! Backend API Error Types
//!
//! Classifies transport failures into the few outcomes callers act on:
//! quota rejection, other backend rejection, and "could not talk to the
//! backend at all". Integrates with the unified `kernel::error::AppError`.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::TransportError;
use serde::Deserialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error codes the backend uses for exhausted guest quotas
const QUOTA_ERROR_CODES: &[&str] = &["quota_exceeded", "guest_limit_reached", "daily_limit_reached"];

#[derive(Debug, Error)]
pub enum ApiError {
    /// The guest (or user) has no checks left today
    #[error("Daily check limit reached: {message}")]
    QuotaExceeded { message: String },

    /// Backend answered with a non-2xx status
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Network failure, undecodable body or misconfiguration
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Error body shapes the backend is known to send
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl ErrorBody {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    fn message(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error.as_deref())
    }

    fn is_quota(&self) -> bool {
        [self.code.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .any(|code| QUOTA_ERROR_CODES.contains(&code.to_ascii_lowercase().as_str()))
    }
}

impl ApiError {
    /// Classify a transport error
    ///
    /// 429 is always a quota rejection; 402/403 are when the body carries a
    /// known quota error code.
    pub fn from_transport(err: TransportError) -> Self {
        match err {
            TransportError::Status { status, body } => {
                let parsed = ErrorBody::parse(&body);
                let message = parsed
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| ErrorKind::from_status(status).as_str().to_string());

                let quota = status == 429 || (matches!(status, 402 | 403) && parsed.is_quota());
                if quota {
                    ApiError::QuotaExceeded { message }
                } else {
                    ApiError::Status { status, message }
                }
            }
            other => ApiError::Transport(other),
        }
    }

    pub fn is_quota(&self) -> bool {
        matches!(self, ApiError::QuotaExceeded { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::QuotaExceeded { .. } => Some(429),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::QuotaExceeded { .. } => ErrorKind::TooManyRequests,
            ApiError::Status { status, .. } => ErrorKind::from_status(*status),
            ApiError::Transport(TransportError::Decode(_)) => ErrorKind::BadGateway,
            ApiError::Transport(TransportError::InvalidBaseUrl(_)) => ErrorKind::InternalServerError,
            ApiError::Transport(_) => ErrorKind::ServiceUnavailable,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            ApiError::QuotaExceeded { .. } => {
                tracing::info!("Backend rejected check: quota exhausted");
            }
            ApiError::Status { status, message } if *status >= 500 => {
                tracing::error!(status = *status, message = %message, "Backend server error");
            }
            ApiError::Status { status, message } => {
                tracing::warn!(status = *status, message = %message, "Backend rejected request");
            }
            ApiError::Transport(e) => {
                tracing::error!(error = %e, "Backend unreachable");
            }
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        let kind = err.kind();
        match err {
            ApiError::QuotaExceeded { message } => AppError::new(kind, message)
                .with_action("Sign up for a free account to keep checking content"),
            ApiError::Status { message, .. } => AppError::new(kind, message),
            ApiError::Transport(e) => AppError::new(kind, "Could not reach the analysis service")
                .with_source(e),
        }
    }
}
