//! Bearer Token Identity Provider
//!
//! Talks to an HTTP identity endpoint:
//! - `POST {sign_in_path}` with `{ email, password }` returns `{ token, user }`
//! - `GET {profile_path}` with the bearer token returns the user
//! - `POST {sign_out_path}` with the bearer token revokes it
//!
//! Error responses may carry `{ "error": "<Code>" }`; the code selects the
//! auth error page message.

use platform::http::{Credentials, HttpTransport, TransportError};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::provider::IdentityProvider;
use crate::domain::session::{Session, SignInRequest};
use crate::domain::user::User;
use crate::error::{AuthError, AuthResult};
use crate::presentation::error_page::AuthErrorCode;

#[derive(Debug, Clone)]
pub struct TokenProvider {
    transport: HttpTransport,
    config: AuthConfig,
}

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
    user: User,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: Option<String>,
}

impl TokenProvider {
    pub fn new(transport: HttpTransport, config: AuthConfig) -> Self {
        Self { transport, config }
    }

    /// Provider code carried by an error body, if any
    fn provider_code(body: &str) -> AuthErrorCode {
        serde_json::from_str::<ProviderErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .map(|code| AuthErrorCode::from_code(&code))
            .unwrap_or(AuthErrorCode::Default)
    }

    fn map_sign_in_error(err: TransportError) -> AuthError {
        match err {
            TransportError::Status { status: 400 | 401, .. } => AuthError::InvalidCredentials,
            TransportError::Status { body, .. } => AuthError::Provider(Self::provider_code(&body)),
            other => AuthError::Transport(other),
        }
    }
}

impl IdentityProvider for TokenProvider {
    async fn restore(&self, cached: Option<Session>) -> AuthResult<Option<Session>> {
        let Some(cached) = cached else {
            return Ok(None);
        };

        let credentials = Credentials::Bearer(cached.token.clone());
        match self
            .transport
            .get_json::<User>(&self.config.profile_path, &credentials)
            .await
        {
            Ok(user) => Ok(Some(Session {
                user,
                token: cached.token,
            })),
            Err(TransportError::Status { status: 401, .. }) => {
                tracing::debug!("Cached token rejected by identity provider");
                Ok(None)
            }
            Err(TransportError::Status { body, .. }) => {
                Err(AuthError::Provider(Self::provider_code(&body)))
            }
            Err(e) => Err(AuthError::Transport(e)),
        }
    }

    async fn sign_in(&self, request: &SignInRequest) -> AuthResult<Session> {
        let body = SignInBody {
            email: request.email.as_str(),
            password: &request.password,
        };
        let response: TokenResponse = self
            .transport
            .post_json(&self.config.sign_in_path, &body, &Credentials::Anonymous)
            .await
            .map_err(Self::map_sign_in_error)?;

        Ok(Session {
            user: response.user,
            token: response.token,
        })
    }

    async fn sign_out(&self, session: &Session) -> AuthResult<()> {
        let credentials = Credentials::Bearer(session.token.clone());
        let result: Result<serde_json::Value, _> = self
            .transport
            .post_json(&self.config.sign_out_path, &serde_json::json!({}), &credentials)
            .await;

        match result {
            // Empty 2xx bodies are fine.
            Ok(_) | Err(TransportError::Decode(_)) => Ok(()),
            Err(TransportError::Status { status: 401, .. }) => Ok(()),
            Err(e) => Err(AuthError::Transport(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_code_from_body() {
        assert_eq!(
            TokenProvider::provider_code(r#"{"error":"AccessDenied"}"#),
            AuthErrorCode::AccessDenied
        );
        assert_eq!(TokenProvider::provider_code("<html>"), AuthErrorCode::Default);
        assert_eq!(TokenProvider::provider_code("{}"), AuthErrorCode::Default);
    }

    #[test]
    fn test_sign_in_error_mapping() {
        let err = TokenProvider::map_sign_in_error(TransportError::Status {
            status: 401,
            body: String::new(),
        });
        assert!(matches!(err, AuthError::InvalidCredentials));

        let err = TokenProvider::map_sign_in_error(TransportError::Status {
            status: 500,
            body: r#"{"error":"Configuration"}"#.into(),
        });
        assert!(matches!(err, AuthError::Provider(AuthErrorCode::Configuration)));
    }

    #[tokio::test]
    async fn test_restore_without_cache_skips_network() {
        let transport = HttpTransport::new("http://127.0.0.1:9", None).unwrap();
        let provider = TokenProvider::new(transport, AuthConfig::default());
        assert!(provider.restore(None).await.unwrap().is_none());
    }
}
