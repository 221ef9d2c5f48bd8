//! Guest Quota Tracker
//!
//! Drives the [`QuotaState`] machine from two inputs: auth state changes and
//! check outcomes. Only active while the auth session reports a guest.

use auth::AuthState;
use backend::ApiError;
use backend::models::CheckResponse;
use platform::observable::{Observable, Subscription};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::config::QuotaConfig;
use crate::domain::prompt::UpgradePrompt;
use crate::domain::source::GuestSessionSource;
use crate::domain::state::QuotaState;
use crate::error::{QuotaError, QuotaResult};

pub struct GuestQuotaTracker<S>
where
    S: GuestSessionSource,
{
    source: Arc<S>,
    config: QuotaConfig,
    state: Observable<QuotaState>,
    fetches: AtomicUsize,
}

impl<S> GuestQuotaTracker<S>
where
    S: GuestSessionSource,
{
    pub fn new(source: Arc<S>, config: QuotaConfig) -> Self {
        Self {
            source,
            config,
            state: Observable::new(QuotaState::Uninitialized),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &QuotaConfig {
        &self.config
    }

    pub fn state(&self) -> QuotaState {
        self.state.get()
    }

    pub fn subscribe(&self) -> Subscription<QuotaState> {
        self.state.subscribe()
    }

    /// Checks left today, when known
    pub fn remaining(&self) -> Option<u32> {
        self.state.get().remaining()
    }

    /// Guest-session fetches issued so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// React to an auth state change
    ///
    /// The first resolved guest state triggers one guest-session fetch. A
    /// signed-in user switches the tracker to bypass, even while that fetch
    /// is still in flight.
    pub async fn on_auth_state(&self, auth: &AuthState) -> QuotaState {
        if auth.is_loading() {
            return self.state();
        }

        if auth.is_authenticated() {
            if !self.state().is_bypassed() {
                tracing::info!("Signed-in user present, guest quota bypassed");
            }
            self.state.update(|s| *s = s.authenticate());
            return self.state();
        }

        let mut start = false;
        self.state.update(|s| {
            if *s == QuotaState::Uninitialized {
                *s = s.begin_loading();
                start = true;
            }
        });
        if !start {
            return self.state();
        }

        let fetched = match auth.guest_id {
            Some(guest_id) => {
                self.fetches.fetch_add(1, Ordering::SeqCst);
                self.source.fetch(&guest_id).await.map(Some)
            }
            None => Ok(None),
        };

        match fetched {
            Ok(Some(session)) => {
                tracing::info!(
                    guest_id = %session.guest_id(),
                    remaining = session.checks_remaining(),
                    daily_limit = session.daily_limit(),
                    "Guest quota loaded"
                );
                self.state.update(|s| *s = s.loaded(&session));
            }
            Ok(None) => {
                tracing::warn!(
                    fallback = self.config.fallback_daily_limit,
                    "No guest id available, using default quota"
                );
                self.state
                    .update(|s| *s = s.load_failed(self.config.fallback_daily_limit));
            }
            Err(e) => {
                e.log();
                tracing::warn!(
                    fallback = self.config.fallback_daily_limit,
                    "Using default guest quota"
                );
                self.state
                    .update(|s| *s = s.load_failed(self.config.fallback_daily_limit));
            }
        }

        self.state()
    }

    /// Follow an auth state subscription until bypass or until the auth
    /// session goes away
    pub async fn follow(&self, mut auth: Subscription<AuthState>) {
        let current = auth.current();
        self.on_auth_state(&current).await;

        while !self.state().is_bypassed() {
            let Some(next) = auth.changed().await else {
                break;
            };
            self.on_auth_state(&next).await;
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.state().is_exhausted()
    }

    /// Gate a submission before any network call
    pub fn ensure_can_submit(&self) -> QuotaResult<()> {
        match self.state() {
            QuotaState::Exhausted { daily_limit } => {
                let err = QuotaError::Exhausted { daily_limit };
                err.log();
                Err(err)
            }
            _ => Ok(()),
        }
    }

    /// Account for a completed check and decide the upgrade prompt
    pub fn record_success(&self, response: &CheckResponse) -> Option<UpgradePrompt> {
        let server_remaining = response.remaining_checks();
        self.state.update(|s| *s = s.record_success(server_remaining));

        let state = self.state();
        if state.is_guest() {
            tracing::info!(
                check_id = %response.id,
                remaining = ?state.remaining(),
                "Guest check recorded"
            );
        }

        UpgradePrompt::evaluate(server_remaining, state.is_guest(), self.config.prompt_threshold)
    }

    /// Account for a failed submission
    ///
    /// Only quota rejections change the state; any other failure did not
    /// consume a check.
    pub fn record_failure(&self, err: &ApiError) {
        if err.is_quota() {
            tracing::info!("Backend rejected check for quota, guest exhausted");
            self.state.update(|s| {
                *s = s.record_quota_rejection(self.config.fallback_daily_limit)
            });
        } else {
            tracing::debug!(error = %err, "Check failed, guest quota unchanged");
        }
    }
}
