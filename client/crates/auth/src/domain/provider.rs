//! Identity Provider Trait
//!
//! Interface to whatever issues sessions. Implementations live in `infra/`.
//! Local caching of the profile and token is done by the auth session, not
//! by providers.

use crate::domain::session::{Session, SignInRequest};
use crate::error::AuthResult;

#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Resolve the current session at startup
    ///
    /// `cached` is the last session persisted locally, if any. Returns
    /// `Ok(None)` when nobody is signed in (or the cached session is no
    /// longer valid).
    async fn restore(&self, cached: Option<Session>) -> AuthResult<Option<Session>>;

    async fn sign_in(&self, request: &SignInRequest) -> AuthResult<Session>;

    /// Invalidate the session with the provider
    async fn sign_out(&self, session: &Session) -> AuthResult<()>;
}
