//! Auth Session
//!
//! The one auth session of the client. Wraps an injected identity provider
//! and publishes an [`AuthState`] that every page observes.
//!
//! Lifecycle:
//! - `init()` restores the cached session through the provider; if nobody is
//!   signed in, a guest id is loaded or generated
//! - `sign_in()` establishes a session, caches profile + token, drops the guest id
//! - `sign_out()` revokes with the provider (best effort), clears the cache,
//!   and turns the client back into a guest

use platform::http::Credentials;
use platform::observable::{Observable, Subscription};
use platform::storage::{LocalStore, StorageKeys, get_json, set_json};
use std::sync::{Arc, RwLock};

use crate::application::guest_identity::GuestIdentity;
use crate::domain::provider::IdentityProvider;
use crate::domain::session::{Session, SignInRequest};
use crate::domain::state::AuthState;
use crate::domain::user::User;
use crate::error::{AuthError, AuthResult};

pub struct AuthSession<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    store: Arc<dyn LocalStore>,
    guest: GuestIdentity,
    state: Observable<AuthState>,
    session: RwLock<Option<Session>>,
}

impl<P> AuthSession<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>, store: Arc<dyn LocalStore>) -> Self {
        Self {
            provider,
            guest: GuestIdentity::new(store.clone()),
            store,
            state: Observable::new(AuthState::loading()),
            session: RwLock::new(None),
        }
    }

    /// Current auth state snapshot
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    pub fn subscribe(&self) -> Subscription<AuthState> {
        self.state.subscribe()
    }

    /// Handle to the shared state store
    pub fn observable(&self) -> Observable<AuthState> {
        self.state.clone()
    }

    /// Credentials for backend requests made right now
    pub fn credentials(&self) -> Credentials {
        if let Some(token) = self.token() {
            return Credentials::Bearer(token);
        }
        match self.state.get().guest_id {
            Some(id) => Credentials::Guest(id),
            None => Credentials::Anonymous,
        }
    }

    fn token(&self) -> Option<String> {
        self.session
            .read()
            .ok()
            .and_then(|s| s.as_ref().map(|s| s.token.clone()))
    }

    /// Resolve the initial state
    pub async fn init(&self) -> AuthState {
        let cached = self.cached_session();
        let had_cache = cached.is_some();

        match self.provider.restore(cached.clone()).await {
            Ok(Some(session)) => self.establish(session),
            Ok(None) => {
                if had_cache {
                    tracing::info!("Cached session no longer valid");
                    self.clear_cache();
                }
                self.become_guest();
            }
            Err(AuthError::Transport(e)) if had_cache => {
                // Offline: keep showing the last-known profile.
                tracing::warn!(error = %e, "Identity provider unreachable, using cached session");
                if let Some(session) = cached {
                    self.establish(session);
                }
            }
            Err(e) => {
                e.log();
                self.become_guest();
            }
        }

        self.state.get()
    }

    pub async fn sign_in(&self, request: &SignInRequest) -> AuthResult<User> {
        if request.password.is_empty() {
            return Err(AuthError::Validation("Please enter your password".to_string()));
        }

        let session = self.provider.sign_in(request).await.inspect_err(|e| e.log())?;
        let user = session.user.clone();
        self.establish(session);

        tracing::info!(user_id = %user.id, "Signed in");
        Ok(user)
    }

    pub async fn sign_out(&self) -> AuthResult<()> {
        let session = self.session.write().ok().and_then(|mut s| s.take());

        if let Some(session) = &session {
            if let Err(e) = self.provider.sign_out(session).await {
                tracing::warn!(error = %e, "Provider sign-out failed, clearing local session anyway");
            }
        }

        self.clear_cache();
        self.become_guest();
        tracing::info!("Signed out");
        Ok(())
    }

    fn establish(&self, session: Session) {
        if let Err(e) = set_json(self.store.as_ref(), StorageKeys::USER_PROFILE, &session.user)
            .and_then(|_| self.store.set(StorageKeys::AUTH_TOKEN, &session.token))
        {
            tracing::warn!(error = %e, "Failed to cache session");
        }
        if let Err(e) = self.guest.clear() {
            tracing::warn!(error = %e, "Failed to clear guest id");
        }

        let user = session.user.clone();
        if let Ok(mut slot) = self.session.write() {
            *slot = Some(session);
        }
        self.state.set(AuthState::authenticated(user));
    }

    fn become_guest(&self) {
        let guest_id = match self.guest.load_or_create() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "Guest id unavailable");
                None
            }
        };
        self.state.set(AuthState::guest(guest_id));
    }

    fn cached_session(&self) -> Option<Session> {
        let user: Option<User> = match get_json(self.store.as_ref(), StorageKeys::USER_PROFILE) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding cached profile");
                None
            }
        };
        let token = self.store.get(StorageKeys::AUTH_TOKEN).ok().flatten();
        match (user, token) {
            (Some(user), Some(token)) => Some(Session { user, token }),
            _ => None,
        }
    }

    fn clear_cache(&self) {
        for key in [StorageKeys::USER_PROFILE, StorageKeys::AUTH_TOKEN] {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, error = %e, "Failed to clear cached session");
            }
        }
    }
}
