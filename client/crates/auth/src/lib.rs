//! Auth (Identity / Session) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - User, session and auth state models, identity provider trait
//! - `application/` - The single [`AuthSession`], guest identity, route guards
//! - `infra/` - Identity provider implementations (bearer token, static)
//! - `presentation/` - Auth error page messages
//!
//! ## Model
//! - One auth session per client, exposing `{ user, is_authenticated, is_guest, loading }`
//! - The identity backend is injected; pages never talk to it directly
//! - Unauthenticated visitors get a locally generated guest id, discarded on sign-in
//! - Last-known profile and bearer token are cached locally, cleared on sign-out

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::auth_session::AuthSession;
pub use application::config::AuthConfig;
pub use application::guard::{GuardDecision, guest_only, require_auth, require_role};
pub use application::guest_identity::GuestIdentity;
pub use domain::provider::IdentityProvider;
pub use domain::state::AuthState;
pub use error::{AuthError, AuthResult};
pub use infra::static_provider::StaticProvider;
pub use infra::token_provider::TokenProvider;
pub use presentation::error_page::{AuthErrorCode, AuthErrorPage};

pub mod models {
    pub use crate::domain::session::*;
    pub use crate::domain::user::*;
    pub use crate::domain::value_object::*;
}
