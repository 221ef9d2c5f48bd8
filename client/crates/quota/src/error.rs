//! Quota Error Types

use backend::ApiError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type QuotaResult<T> = Result<T, QuotaError>;

#[derive(Debug, Error)]
pub enum QuotaError {
    /// Guest has no checks left today; submission is blocked before the network
    #[error("All {daily_limit} free checks used today")]
    Exhausted { daily_limit: u32 },

    /// Guest session could not be fetched
    #[error("Guest session unavailable: {0}")]
    SessionUnavailable(#[from] ApiError),
}

impl QuotaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuotaError::Exhausted { .. } => ErrorKind::TooManyRequests,
            QuotaError::SessionUnavailable(e) => e.kind(),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            QuotaError::Exhausted { daily_limit } => {
                tracing::info!(daily_limit, "Guest quota exhausted");
            }
            QuotaError::SessionUnavailable(e) => {
                tracing::warn!(error = %e, "Guest session unavailable");
            }
        }
    }
}

impl From<QuotaError> for AppError {
    fn from(err: QuotaError) -> Self {
        match err {
            QuotaError::Exhausted { daily_limit } => AppError::too_many_requests(format!(
                "You've used all {daily_limit} free checks for today"
            ))
            .with_action("Sign up for a free account to keep checking content"),
            QuotaError::SessionUnavailable(e) => e.into(),
        }
    }
}
