//! Analysis Error Types
//!
//! Validation errors stay inside the form; everything else is turned into a
//! banner through the unified `kernel::error::AppError`.

use backend::ApiError;
use kernel::error::{app_error::AppError, category::Category, kind::ErrorKind};
use platform::clipboard::ClipboardError;
use platform::download::DownloadError;
use quota::QuotaError;
use thiserror::Error;

pub type FormResult<T> = Result<T, FormError>;

/// Shown for any network or backend failure
pub const GENERIC_FAILURE: &str = "We couldn't analyze your content right now.";
pub const RETRY_ACTION: &str = "Please check your connection and submit again.";
pub const SIGN_UP_ACTION: &str = "Sign up for a free account to keep checking content";

/// Input rejected before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Choose a file to analyze.")]
    NoFile,

    #[error("The selected file is empty.")]
    EmptyFile,

    #[error("File is too large ({}). The maximum size is {}.", mb(*size), mb(*max))]
    FileTooLarge { size: u64, max: u64 },

    #[error("Unsupported file type \"{mime}\". Upload an image, a PDF or a text file.")]
    UnsupportedType { mime: String },

    #[error("Enter some text to analyze.")]
    EmptyText,

    #[error("Enter a valid link, for example https://example.com/article.")]
    InvalidUrl,
}

fn mb(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::FileTooLarge { .. } => ErrorKind::PayloadTooLarge,
            ValidationError::UnsupportedType { .. } => ErrorKind::UnsupportedMediaType,
            _ => ErrorKind::BadRequest,
        }
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A check from this form is still in flight
    #[error("A check is already in progress")]
    Busy,

    #[error(transparent)]
    Quota(#[from] QuotaError),

    #[error(transparent)]
    Backend(#[from] ApiError),
}

impl FormError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormError::Invalid(e) => e.kind(),
            FormError::Busy => ErrorKind::Conflict,
            FormError::Quota(e) => e.kind(),
            FormError::Backend(e) => e.kind(),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            FormError::Invalid(e) => tracing::debug!(reason = %e, "Check input rejected"),
            FormError::Busy => tracing::debug!("Submission ignored, check in progress"),
            FormError::Quota(e) => e.log(),
            FormError::Backend(e) => e.log(),
        }
    }

    /// What the user is told, without the underlying source
    pub fn user_error(&self) -> AppError {
        match self {
            FormError::Invalid(e) => AppError::new(e.kind(), e.to_string()),
            FormError::Busy => AppError::new(ErrorKind::Conflict, "Your previous check is still running.")
                .with_category(Category::Validation),
            FormError::Quota(QuotaError::Exhausted { daily_limit }) => QuotaError::Exhausted {
                daily_limit: *daily_limit,
            }
            .into(),
            FormError::Backend(ApiError::QuotaExceeded { message }) => {
                AppError::too_many_requests(message.clone()).with_action(SIGN_UP_ACTION)
            }
            _ => AppError::new(self.kind(), GENERIC_FAILURE)
                .with_action(RETRY_ACTION)
                .with_category(Category::Network),
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        let app = err.user_error();
        match err {
            FormError::Backend(e) => app.with_source(e),
            FormError::Quota(e) => app.with_source(e),
            _ => app,
        }
    }
}

/// Share or download of a result failed
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error("Could not encode analysis: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Clipboard(e) => {
                AppError::service_unavailable("Copy the link from the address bar instead.")
                    .with_category(Category::Degraded)
                    .with_source(e)
            }
            ExportError::Download(e) => AppError::internal("The download could not be saved.")
                .with_action("Try again")
                .with_source(e),
            ExportError::Encode(e) => {
                AppError::internal("The analysis could not be encoded.").with_source(e)
            }
        }
    }
}
