//! Page Error Types
//!
//! Guard outcomes a page cannot render past, plus local storage failures.
//! Remote data failures never show up here: they degrade to default datasets.

use auth::{AuthState, GuardDecision};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

pub type PageResult<T> = Result<T, PageError>;

#[derive(Debug, Error)]
pub enum PageError {
    /// Auth state is still being restored; show a spinner
    #[error("Waiting for the sign-in state")]
    Pending,

    /// The visitor must sign in first
    #[error("Redirecting to {0}")]
    Redirect(&'static str),

    /// Signed in, but the account lacks the role this page needs
    #[error("Not allowed here, redirecting to {0}")]
    Forbidden(&'static str),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PageError {
    /// Turn a guard decision into a result
    pub fn check(decision: GuardDecision) -> PageResult<()> {
        match decision {
            GuardDecision::Allow => Ok(()),
            GuardDecision::Wait => Err(PageError::Pending),
            GuardDecision::Redirect(route) => Err(PageError::Redirect(route)),
        }
    }

    /// Like `check`, but a redirect of a signed-in user means the role is missing
    pub fn check_role(decision: GuardDecision, state: &AuthState) -> PageResult<()> {
        match decision {
            GuardDecision::Redirect(route) if state.is_authenticated() => {
                Err(PageError::Forbidden(route))
            }
            other => Self::check(other),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PageError::Pending => ErrorKind::ServiceUnavailable,
            PageError::Redirect(_) => ErrorKind::Unauthorized,
            PageError::Forbidden(_) => ErrorKind::Forbidden,
            PageError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn log(&self) {
        match self {
            PageError::Pending | PageError::Redirect(_) | PageError::Forbidden(_) => {
                tracing::debug!(error = %self, "Page not rendered");
            }
            PageError::Storage(e) => {
                tracing::error!(error = %e, "Local storage failed");
            }
        }
    }
}

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        match err {
            PageError::Redirect(route) => {
                AppError::unauthorized("Please sign in to view this page").with_action(route)
            }
            PageError::Forbidden(route) => {
                AppError::new(ErrorKind::Forbidden, "Your account cannot view this page")
                    .with_action(route)
            }
            PageError::Pending => AppError::new(err.kind(), err.to_string()),
            PageError::Storage(e) => e.into(),
        }
    }
}
