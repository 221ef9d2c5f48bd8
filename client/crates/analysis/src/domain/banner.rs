//! Error banner

use kernel::error::{app_error::AppError, category::Category};
use kernel::id::ToastId;
use serde::Serialize;

/// Inline dismissible message shown above the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub id: ToastId,
    pub category: Category,
    pub message: String,
    /// What the user can do about it
    pub action: Option<String>,
}

impl Banner {
    pub fn from_app_error(err: &AppError) -> Self {
        Self {
            id: ToastId::new(),
            category: err.category(),
            message: err.message().to_string(),
            action: err.action().map(str::to_string),
        }
    }

    /// Resubmitting may help
    pub fn is_retryable(&self) -> bool {
        self.category.is_retryable()
    }
}
