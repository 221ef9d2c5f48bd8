//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, category::Category, kind::ErrorKind};
use platform::http::TransportError;
use platform::storage::StorageError;
use thiserror::Error;

use crate::presentation::error_page::AuthErrorCode;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Cached session no longer accepted
    #[error("Session expired")]
    SessionExpired,

    /// Provider reported one of its error codes
    #[error("Identity provider error: {0:?}")]
    Provider(AuthErrorCode),

    /// Sign-in form input rejected before contacting the provider
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Identity provider unreachable
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Local cache unavailable
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionExpired => ErrorKind::Unauthorized,
            AuthError::Provider(AuthErrorCode::AccessDenied) => ErrorKind::Forbidden,
            AuthError::Provider(_) => ErrorKind::Unauthorized,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Transport(_) => ErrorKind::ServiceUnavailable,
            AuthError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Error page code for this error
    pub fn code(&self) -> AuthErrorCode {
        match self {
            AuthError::Provider(code) => *code,
            AuthError::InvalidCredentials | AuthError::SessionExpired => AuthErrorCode::Verification,
            _ => AuthErrorCode::Default,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Auth storage error");
            }
            AuthError::Transport(e) => {
                tracing::warn!(error = %e, "Identity provider unreachable");
            }
            AuthError::InvalidCredentials => {
                tracing::info!("Sign-in rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let kind = err.kind();
        match err {
            AuthError::Validation(message) => AppError::new(kind, message),
            AuthError::Transport(e) => {
                AppError::new(kind, "Could not reach the sign-in service").with_source(e)
            }
            other => AppError::new(kind, other.code().message()).with_category(Category::Auth),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Validation(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_code_maps_to_page() {
        let err = AuthError::Provider(AuthErrorCode::AccessDenied);
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(err.code(), AuthErrorCode::AccessDenied);

        let app: AppError = err.into();
        assert_eq!(app.category(), Category::Auth);
        assert_eq!(app.message(), AuthErrorCode::AccessDenied.message());
    }

    #[test]
    fn test_validation_stays_validation() {
        let app: AppError = AuthError::Validation("Please enter your password".into()).into();
        assert_eq!(app.category(), Category::Validation);
    }
}
