//! Backend API Client
//!
//! Typed access to the MisinfoGuard analysis backend. Every business rule
//! (scoring, OCR, fact retrieval, quota accounting) lives on the server; this
//! crate only issues requests and decodes responses.
//!
//! Structure:
//! - `domain/` - Wire models (checks, guest sessions, uploads, page content)
//! - `api` - The [`BackendApi`] trait consumed by every page
//! - `infra/` - reqwest implementation ([`HttpBackend`])

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;

pub use api::BackendApi;
pub use config::BackendConfig;
pub use error::{ApiError, ApiResult};
pub use infra::http::HttpBackend;
pub use platform::http::Credentials;

pub mod models {
    pub use crate::domain::check::*;
    pub use crate::domain::content::*;
    pub use crate::domain::guest::*;
    pub use crate::domain::upload::*;
}
