//! Auth Error Page
//!
//! Identity provider failures redirect to a dedicated page with an `error`
//! query parameter. Only a small fixed set of codes is recognized; anything
//! else is shown as the default message.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AuthErrorCode {
    Configuration,
    AccessDenied,
    Verification,
    Default,
}

impl AuthErrorCode {
    /// Parse the provider's code (case-sensitive, as the provider sends it)
    pub fn from_code(code: &str) -> Self {
        match code {
            "Configuration" => AuthErrorCode::Configuration,
            "AccessDenied" => AuthErrorCode::AccessDenied,
            "Verification" => AuthErrorCode::Verification,
            _ => AuthErrorCode::Default,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            AuthErrorCode::Configuration => "Configuration",
            AuthErrorCode::AccessDenied => "AccessDenied",
            AuthErrorCode::Verification => "Verification",
            AuthErrorCode::Default => "Default",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            AuthErrorCode::Configuration => "Server error",
            AuthErrorCode::AccessDenied => "Access denied",
            AuthErrorCode::Verification => "Unable to sign in",
            AuthErrorCode::Default => "Error",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AuthErrorCode::Configuration => {
                "There is a problem with the server configuration. Please try again later."
            }
            AuthErrorCode::AccessDenied => "You do not have permission to sign in.",
            AuthErrorCode::Verification => {
                "The sign in link is no longer valid. It may have been used already or it may have expired."
            }
            AuthErrorCode::Default => "An unexpected error occurred while signing in.",
        }
    }
}

/// View model for the auth error page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthErrorPage {
    pub code: AuthErrorCode,
    pub title: &'static str,
    pub message: &'static str,
    /// Where "try again" leads
    pub retry_path: &'static str,
    pub home_path: &'static str,
}

impl AuthErrorPage {
    /// Build the page from the `error` query parameter
    pub fn from_query(error: Option<&str>) -> Self {
        let code = error.map(AuthErrorCode::from_code).unwrap_or(AuthErrorCode::Default);
        Self::for_code(code)
    }

    pub fn for_code(code: AuthErrorCode) -> Self {
        Self {
            code,
            title: code.title(),
            message: code.message(),
            retry_path: "/login",
            home_path: "/",
        }
    }
}
