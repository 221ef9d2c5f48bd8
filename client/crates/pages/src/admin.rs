//! Admin Panel
//!
//! Moderation statistics, visible to admins only.

use auth::models::UserRole;
use auth::{AuthConfig, AuthState, require_role};
use backend::models::AdminStats;
use backend::{BackendApi, Credentials};
use platform::fallback::Sourced;

use crate::error::{PageError, PageResult};
use crate::mock::ADMIN_STATS;

#[derive(Debug, Clone, PartialEq)]
pub struct AdminPanel {
    pub stats: Sourced<AdminStats>,
}

impl AdminPanel {
    /// Non-admins are redirected to the home route, visitors to login
    pub async fn load<B: BackendApi>(
        api: &B,
        state: &AuthState,
        credentials: &Credentials,
        config: &AuthConfig,
    ) -> PageResult<Self> {
        PageError::check_role(
            require_role(state, UserRole::Admin, config.login_route, config.home_route),
            state,
        )?;

        let stats = ADMIN_STATS.load(api.admin_stats(credentials)).await;
        Ok(Self { stats })
    }

    /// Items waiting on a moderator
    pub fn open_items(&self) -> u32 {
        self.stats
            .data
            .flagged_posts
            .saturating_add(self.stats.data.pending_reviews)
    }

    pub fn needs_attention(&self) -> bool {
        self.open_items() > 0
    }
}
