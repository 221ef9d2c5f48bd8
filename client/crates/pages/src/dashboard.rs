//! Dashboard
//!
//! Signed-in summary: check counts, quiz accuracy, streak and the global
//! leaderboard. Guests are sent to the login route.

use auth::models::User;
use auth::{AuthConfig, AuthState, require_auth};
use backend::models::{DashboardSummary, LeaderboardEntry};
use backend::{BackendApi, Credentials};
use platform::fallback::Sourced;

use crate::error::{PageError, PageResult};
use crate::mock::{DASHBOARD, LEADERBOARD};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub user: User,
    pub summary: Sourced<DashboardSummary>,
    pub leaderboard: Sourced<Vec<LeaderboardEntry>>,
}

impl DashboardPage {
    pub async fn load<B: BackendApi>(
        api: &B,
        state: &AuthState,
        credentials: &Credentials,
        config: &AuthConfig,
    ) -> PageResult<Self> {
        PageError::check(require_auth(state, config.login_route))?;
        let user = state
            .user()
            .cloned()
            .ok_or(PageError::Redirect(config.login_route))?;

        let (summary, leaderboard) = tokio::join!(
            DASHBOARD.load(api.dashboard(credentials)),
            LEADERBOARD.load(api.leaderboard()),
        );

        tracing::debug!(
            user_id = %user.id,
            summary_fallback = summary.origin.is_fallback(),
            leaderboard_fallback = leaderboard.origin.is_fallback(),
            "Dashboard loaded"
        );
        Ok(Self {
            user,
            summary,
            leaderboard,
        })
    }

    /// Banner notices for every dataset that fell back
    pub fn notices(&self) -> Vec<String> {
        [self.summary.notice(), self.leaderboard.notice()]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Quiz accuracy as a whole percentage
    pub fn accuracy_percent(&self) -> u8 {
        (self.summary.data.accuracy.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    /// Share of checks that turned out misleading, as a whole percentage
    pub fn misleading_percent(&self) -> u8 {
        let summary = &self.summary.data;
        if summary.total_checks == 0 {
            return 0;
        }
        let share = summary.misleading_found.min(summary.total_checks) as f64
            / summary.total_checks as f64;
        (share * 100.0).round() as u8
    }

    /// The signed-in user's own leaderboard row, matched by display name
    pub fn own_rank(&self) -> Option<u32> {
        let name = self.user.display_name();
        self.leaderboard
            .data
            .iter()
            .find(|e| e.user_name == name)
            .map(|e| e.rank)
    }
}
