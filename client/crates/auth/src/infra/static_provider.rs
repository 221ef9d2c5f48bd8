//! Static Identity Provider
//!
//! Fixed in-memory accounts. Used by the demo shell when no identity backend
//! is configured, and by tests.

use std::collections::HashMap;

use crate::domain::provider::IdentityProvider;
use crate::domain::session::{Session, SignInRequest};
use crate::domain::user::User;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    /// Keyed by normalized email
    accounts: HashMap<String, (User, String)>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, user: User, password: impl Into<String>) -> Self {
        self.accounts
            .insert(user.email.as_str().to_string(), (user, password.into()));
        self
    }

    fn token_for(user: &User) -> String {
        format!("static-{}", user.id)
    }
}

impl IdentityProvider for StaticProvider {
    async fn restore(&self, cached: Option<Session>) -> AuthResult<Option<Session>> {
        let Some(cached) = cached else {
            return Ok(None);
        };
        let valid = self
            .accounts
            .get(cached.user.email.as_str())
            .is_some_and(|(user, _)| cached.token == Self::token_for(user));

        Ok(valid.then_some(cached))
    }

    async fn sign_in(&self, request: &SignInRequest) -> AuthResult<Session> {
        match self.accounts.get(request.email.as_str()) {
            Some((user, password)) if *password == request.password => Ok(Session {
                user: user.clone(),
                token: Self::token_for(user),
            }),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    async fn sign_out(&self, _session: &Session) -> AuthResult<()> {
        Ok(())
    }
}
