//! HTTP transport
//!
//! Thin wrapper over `reqwest::Client` that knows the backend base URL,
//! attaches guest or bearer credentials, and turns non-2xx responses into
//! [`TransportError::Status`]. No retries and no client-side timeouts beyond
//! the optional one configured on the underlying client.

use kernel::error::app_error::AppError;
use kernel::error::kind::ErrorKind;
use kernel::id::GuestId;
use reqwest::{Client, RequestBuilder, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Header carrying the guest identifier for unauthenticated requests
pub const GUEST_ID_HEADER: &str = "X-Guest-Id";

/// Who the request is made on behalf of
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Anonymous,
    Guest(GuestId),
    Bearer(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(e) => e.into(),
            TransportError::Status { status, .. } => {
                AppError::new(ErrorKind::from_status(status), "The analysis service rejected the request")
                    .with_source(err)
            }
            TransportError::Decode(e) => e.into(),
            TransportError::InvalidBaseUrl(_) => {
                AppError::internal("The analysis service address is misconfigured").with_source(err)
            }
        }
    }
}

pub type TransportResult<T> = Result<T, TransportError>;

/// JSON-over-HTTP transport bound to one backend
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport for `base_url`
    ///
    /// `timeout` is applied per request when set.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> TransportResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(TransportError::InvalidBaseUrl(base_url));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T>(&self, path: &str, credentials: &Credentials) -> TransportResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.client.get(self.url(path));
        self.send(request, credentials).await
    }

    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        credentials: &Credentials,
    ) -> TransportResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.send(request, credentials).await
    }

    pub async fn post_multipart<T>(
        &self,
        path: &str,
        form: multipart::Form,
        credentials: &Credentials,
    ) -> TransportResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).multipart(form);
        self.send(request, credentials).await
    }

    async fn send<T>(&self, request: RequestBuilder, credentials: &Credentials) -> TransportResult<T>
    where
        T: DeserializeOwned,
    {
        let request = match credentials {
            Credentials::Anonymous => request,
            Credentials::Guest(id) => request.header(GUEST_ID_HEADER, id.to_string()),
            Credentials::Bearer(token) => request.bearer_auth(token),
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Backend returned an error status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let transport = HttpTransport::new("http://localhost:8000/api/", None).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8000/api");
        assert_eq!(transport.url("/check"), "http://localhost:8000/api/check");
        assert_eq!(transport.url("check/abc"), "http://localhost:8000/api/check/abc");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let result = HttpTransport::new("localhost:8000", None);
        assert!(matches!(result, Err(TransportError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_status_error_maps_to_app_error() {
        let err = TransportError::Status {
            status: 429,
            body: "{}".to_string(),
        };
        assert_eq!(err.status(), Some(429));
        let app: AppError = err.into();
        assert_eq!(app.kind(), ErrorKind::TooManyRequests);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_network_error() {
        // Port 9 (discard) is closed on any sane test machine.
        let transport = HttpTransport::new("http://127.0.0.1:9", None).unwrap();
        let result: TransportResult<serde_json::Value> =
            transport.get_json("health", &Credentials::Anonymous).await;
        assert!(matches!(result, Err(TransportError::Network(_))));
    }
}
