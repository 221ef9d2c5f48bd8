//! Page loads against an in-memory backend

#[cfg(test)]
mod fakes {
    use backend::models::{
        AdminStats, CheckRequest, CheckResponse, CommunityPost, DashboardSummary, Difficulty,
        FileUpload, GuestSessionDto, LeaderboardEntry, LearningModule, OcrResponse,
        UploadResponse,
    };
    use backend::{ApiError, ApiResult, BackendApi, Credentials};
    use kernel::id::GuestId;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves fixed content; endpoints named in `down` fail
    pub struct ContentBackend {
        down: HashSet<&'static str>,
        pub calls: AtomicUsize,
        pub last_credentials: Mutex<Option<Credentials>>,
    }

    impl ContentBackend {
        pub fn online() -> Self {
            Self::with_down(&[])
        }

        pub fn offline() -> Self {
            Self::with_down(&["modules", "posts", "leaderboard", "dashboard", "admin"])
        }

        pub fn with_down(endpoints: &[&'static str]) -> Self {
            Self {
                down: endpoints.iter().copied().collect(),
                calls: AtomicUsize::new(0),
                last_credentials: Mutex::new(None),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn serve<T>(
            &self,
            endpoint: &'static str,
            credentials: Option<&Credentials>,
            data: T,
        ) -> ApiResult<T> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(c) = credentials {
                *self.last_credentials.lock().unwrap() = Some(c.clone());
            }
            if self.down.contains(endpoint) {
                Err(ApiError::Status {
                    status: 503,
                    message: format!("{endpoint} unavailable"),
                })
            } else {
                Ok(data)
            }
        }
    }

    fn unused<T>() -> ApiResult<T> {
        Err(ApiError::Status {
            status: 404,
            message: "Not Found".into(),
        })
    }

    impl BackendApi for ContentBackend {
        async fn guest_session(&self, _guest_id: &GuestId) -> ApiResult<GuestSessionDto> {
            unused()
        }

        async fn submit_check(
            &self,
            _request: &CheckRequest,
            _credentials: &Credentials,
        ) -> ApiResult<CheckResponse> {
            unused()
        }

        async fn get_check(
            &self,
            _check_id: &str,
            _credentials: &Credentials,
        ) -> ApiResult<CheckResponse> {
            unused()
        }

        async fn upload(
            &self,
            _file: &FileUpload,
            _credentials: &Credentials,
        ) -> ApiResult<UploadResponse> {
            unused()
        }

        async fn ocr(&self, _file: &FileUpload, _credentials: &Credentials) -> ApiResult<OcrResponse> {
            unused()
        }

        async fn learning_modules(&self, credentials: &Credentials) -> ApiResult<Vec<LearningModule>> {
            self.serve(
                "modules",
                Some(credentials),
                vec![LearningModule {
                    id: "live-1".into(),
                    title: "Live module".into(),
                    description: "From the server".into(),
                    category: "sources".into(),
                    difficulty: Difficulty::Beginner,
                    points: 30,
                    lesson_count: 3,
                    completed_lessons: 3,
                }],
            )
        }

        async fn community_posts(&self, credentials: &Credentials) -> ApiResult<Vec<CommunityPost>> {
            self.serve("posts", Some(credentials), vec![])
        }

        async fn leaderboard(&self) -> ApiResult<Vec<LeaderboardEntry>> {
            self.serve(
                "leaderboard",
                None,
                vec![LeaderboardEntry {
                    rank: 1,
                    user_name: "Ana".into(),
                    points: 900,
                    badges: vec![],
                }],
            )
        }

        async fn dashboard(&self, credentials: &Credentials) -> ApiResult<DashboardSummary> {
            self.serve(
                "dashboard",
                Some(credentials),
                DashboardSummary {
                    total_checks: 8,
                    misleading_found: 2,
                    accuracy: 0.5,
                    streak_days: 1,
                    points: 120,
                    recent_checks: vec![],
                },
            )
        }

        async fn admin_stats(&self, credentials: &Credentials) -> ApiResult<AdminStats> {
            self.serve(
                "admin",
                Some(credentials),
                AdminStats {
                    total_users: 3,
                    checks_today: 0,
                    flagged_posts: 0,
                    pending_reviews: 0,
                },
            )
        }
    }
}

#[cfg(test)]
mod page_tests {
    use super::fakes::ContentBackend;
    use crate::{AdminPanel, CommunityFeed, DashboardPage, LearningCenter, PageError};
    use auth::models::{Email, User, UserRole};
    use auth::{AuthConfig, AuthState};
    use backend::Credentials;
    use kernel::id::GuestId;
    use backend::models::AdminStats;
    use kernel::error::{app_error::AppError, category::Category, kind::ErrorKind};
    use platform::fallback::{Origin, Sourced};

    fn signed_in(role: UserRole) -> AuthState {
        AuthState::authenticated(User {
            id: "u1".into(),
            name: "Ana".into(),
            email: Email::new("ana@example.com").unwrap(),
            role,
            avatar_url: None,
        })
    }

    fn bearer() -> Credentials {
        Credentials::Bearer("static-u1".into())
    }

    #[tokio::test]
    async fn test_dashboard_redirects_guests_without_fetching() {
        let api = ContentBackend::online();
        let guest = AuthState::guest(Some(GuestId::new()));
        let result =
            DashboardPage::load(&api, &guest, &Credentials::Anonymous, &AuthConfig::default()).await;

        assert!(matches!(result, Err(PageError::Redirect("/login"))));
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_dashboard_waits_while_loading() {
        let api = ContentBackend::online();
        let result = DashboardPage::load(
            &api,
            &AuthState::loading(),
            &Credentials::Anonymous,
            &AuthConfig::default(),
        )
        .await;
        assert!(matches!(result, Err(PageError::Pending)));
    }

    #[tokio::test]
    async fn test_dashboard_online() {
        let api = ContentBackend::online();
        let page = DashboardPage::load(
            &api,
            &signed_in(UserRole::User),
            &bearer(),
            &AuthConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(page.summary.origin, Origin::Remote);
        assert!(page.notices().is_empty());
        assert_eq!(page.accuracy_percent(), 50);
        assert_eq!(page.misleading_percent(), 25);
        assert_eq!(page.own_rank(), Some(1));
        assert_eq!(*api.last_credentials.lock().unwrap(), Some(bearer()));
    }

    #[tokio::test]
    async fn test_dashboard_offline_uses_defaults() {
        let api = ContentBackend::offline();
        let page = DashboardPage::load(
            &api,
            &signed_in(UserRole::User),
            &bearer(),
            &AuthConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(page.summary.origin, Origin::Fallback("dashboard"));
        assert_eq!(
            page.notices(),
            [
                "Showing sample dashboard (using defaults)",
                "Showing sample leaderboard (using defaults)"
            ]
        );
        assert_eq!(page.own_rank(), None);
    }

    #[tokio::test]
    async fn test_learning_center_for_guests() {
        let api = ContentBackend::online();
        let center = LearningCenter::load(&api, &Credentials::Guest(GuestId::new())).await;
        assert!(center.notice().is_none());
        assert_eq!(center.points_earned(), 30);
        assert!(center.progress("live-1").unwrap().completed);
    }

    #[tokio::test]
    async fn test_learning_center_offline() {
        let api = ContentBackend::offline();
        let center = LearningCenter::load(&api, &Credentials::Anonymous).await;
        assert!(center.notice().is_some());
        assert_eq!(center.points_earned(), 0);
        assert!(center.modules().len() > 1);
    }

    #[tokio::test]
    async fn test_community_falls_back_per_dataset() {
        let api = ContentBackend::with_down(&["posts"]);
        let mut feed = CommunityFeed::load(&api, &Credentials::Anonymous).await;

        assert!(feed.posts.origin.is_fallback());
        assert_eq!(feed.leaderboard.origin, Origin::Remote);
        assert_eq!(feed.notices(), ["Showing sample community posts (using defaults)"]);

        let newest = feed.newest_first();
        assert!(newest.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(feed.fact_checks().count(), 2);

        let (id, likes) = (feed.posts.data[0].id.clone(), feed.posts.data[0].likes);
        assert_eq!(feed.like(&id), Some(likes + 1));
        assert_eq!(feed.like("missing"), None);
    }

    #[tokio::test]
    async fn test_admin_panel_requires_admin() {
        let api = ContentBackend::online();
        let config = AuthConfig::default();

        let user = AdminPanel::load(&api, &signed_in(UserRole::User), &bearer(), &config).await;
        assert!(matches!(user, Err(PageError::Forbidden("/dashboard"))));

        let guest = AdminPanel::load(&api, &AuthState::guest(None), &bearer(), &config).await;
        assert!(matches!(guest, Err(PageError::Redirect("/login"))));
        assert_eq!(api.calls(), 0);

        let admin = AdminPanel::load(&api, &signed_in(UserRole::Admin), &bearer(), &config)
            .await
            .unwrap();
        assert_eq!(admin.stats.origin, Origin::Remote);
        assert!(!admin.needs_attention());
    }

    #[tokio::test]
    async fn test_admin_panel_offline() {
        let api = ContentBackend::offline();
        let admin = AdminPanel::load(
            &api,
            &signed_in(UserRole::Admin),
            &bearer(),
            &AuthConfig::default(),
        )
        .await
        .unwrap();
        assert!(admin.stats.origin.is_fallback());
        assert_eq!(admin.open_items(), 9);
    }

    #[test]
    fn test_open_items_saturates() {
        let panel = AdminPanel {
            stats: Sourced {
                data: AdminStats {
                    total_users: 1,
                    checks_today: 0,
                    flagged_posts: u32::MAX,
                    pending_reviews: u32::MAX,
                },
                origin: Origin::Remote,
            },
        };
        assert_eq!(panel.open_items(), u32::MAX);
        assert!(panel.needs_attention());
    }

    #[test]
    fn test_redirect_becomes_auth_error() {
        let err: AppError = PageError::Redirect("/login").into();
        assert_eq!(err.category(), Category::Auth);
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.message(), "Please sign in to view this page");
        assert_eq!(err.action(), Some("/login"));
    }

    #[test]
    fn test_missing_role_becomes_forbidden() {
        let err: AppError = PageError::Forbidden("/dashboard").into();
        assert_eq!(err.category(), Category::Auth);
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(err.message(), "Your account cannot view this page");
        assert_eq!(err.action(), Some("/dashboard"));
    }
}
