//! Submission flows against an in-memory backend

#[cfg(test)]
mod fakes {
    use backend::models::{
        AdminStats, CheckMetadata, CheckRequest, CheckResponse, CommunityPost, ConfidenceBands,
        DashboardSummary, FileUpload, GuestSessionDto, LeaderboardEntry, LearningModule,
        OcrResponse, UploadResponse,
    };
    use backend::{ApiError, ApiResult, BackendApi, Credentials};
    use chrono::{TimeZone, Utc};
    use kernel::id::GuestId;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// How `submit_check` answers
    #[derive(Debug, Clone, Copy)]
    pub enum Outcome {
        Verdict { score: u8, remaining: Option<u32> },
        ServerError,
        QuotaRejected,
    }

    pub struct FakeBackend {
        pub guest: GuestSessionDto,
        pub outcome: Mutex<Outcome>,
        pub ocr_fails: bool,
        pub guest_calls: AtomicUsize,
        pub submit_calls: AtomicUsize,
        pub ocr_calls: AtomicUsize,
        pub last_request: Mutex<Option<CheckRequest>>,
        pub last_credentials: Mutex<Option<Credentials>>,
    }

    impl FakeBackend {
        pub fn new(checks_remaining: u32, outcome: Outcome) -> Self {
            Self {
                guest: GuestSessionDto {
                    checks_remaining,
                    daily_limit: 10,
                    created_at: None,
                },
                outcome: Mutex::new(outcome),
                ocr_fails: false,
                guest_calls: AtomicUsize::new(0),
                submit_calls: AtomicUsize::new(0),
                ocr_calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
                last_credentials: Mutex::new(None),
            }
        }

        pub fn set_outcome(&self, outcome: Outcome) {
            *self.outcome.lock().unwrap() = outcome;
        }

        pub fn total_calls(&self) -> usize {
            self.guest_calls.load(Ordering::SeqCst)
                + self.submit_calls.load(Ordering::SeqCst)
                + self.ocr_calls.load(Ordering::SeqCst)
        }

        pub fn submits(&self) -> usize {
            self.submit_calls.load(Ordering::SeqCst)
        }
    }

    pub fn response(id: &str, score: u8, remaining: Option<u32>) -> CheckResponse {
        CheckResponse {
            id: id.to_string(),
            score,
            verdict: if score < 40 {
                "Likely Misleading".into()
            } else {
                "Mostly Accurate".into()
            },
            summary: "Independent fact-checkers found no evidence for this claim.".into(),
            citations: vec![],
            claims: vec![],
            confidence_bands: ConfidenceBands {
                high: 0.7,
                mid: 0.2,
                low: 0.1,
            },
            metadata: CheckMetadata {
                processing_time: 1.4,
                language: "en".into(),
                model_version: "mg-2".into(),
                timestamp: Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap(),
                remaining_checks: remaining,
            },
            learning_cards: vec![],
        }
    }

    fn not_here<T>() -> ApiResult<T> {
        Err(ApiError::Status {
            status: 404,
            message: "Not Found".into(),
        })
    }

    impl BackendApi for FakeBackend {
        async fn guest_session(&self, _guest_id: &GuestId) -> ApiResult<GuestSessionDto> {
            self.guest_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.guest.clone())
        }

        async fn submit_check(
            &self,
            request: &CheckRequest,
            credentials: &Credentials,
        ) -> ApiResult<CheckResponse> {
            let n = self.submit_calls.fetch_add(1, Ordering::SeqCst) + 1;
            *self.last_request.lock().unwrap() = Some(request.clone());
            *self.last_credentials.lock().unwrap() = Some(credentials.clone());

            let outcome = *self.outcome.lock().unwrap();
            match outcome {
                Outcome::Verdict { score, remaining } => {
                    Ok(response(&format!("chk_{n}"), score, remaining))
                }
                Outcome::ServerError => Err(ApiError::Status {
                    status: 500,
                    message: "Internal Server Error".into(),
                }),
                Outcome::QuotaRejected => Err(ApiError::QuotaExceeded {
                    message: "Daily limit reached".into(),
                }),
            }
        }

        async fn get_check(
            &self,
            check_id: &str,
            _credentials: &Credentials,
        ) -> ApiResult<CheckResponse> {
            Ok(response(check_id, 80, None))
        }

        async fn upload(
            &self,
            file: &FileUpload,
            _credentials: &Credentials,
        ) -> ApiResult<UploadResponse> {
            Ok(UploadResponse {
                url: format!("https://files.example/{}", file.file_name),
            })
        }

        async fn ocr(&self, _file: &FileUpload, _credentials: &Credentials) -> ApiResult<OcrResponse> {
            self.ocr_calls.fetch_add(1, Ordering::SeqCst);
            if self.ocr_fails {
                return Err(ApiError::Status {
                    status: 503,
                    message: "OCR unavailable".into(),
                });
            }
            Ok(OcrResponse {
                success: true,
                extracted_text: Some(" 5G towers spread viruses ".into()),
            })
        }

        async fn learning_modules(&self, _: &Credentials) -> ApiResult<Vec<LearningModule>> {
            not_here()
        }

        async fn community_posts(&self, _: &Credentials) -> ApiResult<Vec<CommunityPost>> {
            not_here()
        }

        async fn leaderboard(&self) -> ApiResult<Vec<LeaderboardEntry>> {
            not_here()
        }

        async fn dashboard(&self, _: &Credentials) -> ApiResult<DashboardSummary> {
            not_here()
        }

        async fn admin_stats(&self, _: &Credentials) -> ApiResult<AdminStats> {
            not_here()
        }
    }
}

#[cfg(test)]
mod flow_tests {
    use super::fakes::*;
    use crate::application::config::FormConfig;
    use crate::application::current::CurrentAnalysis;
    use crate::application::form::SubmissionForm;
    use crate::application::submit::SubmitFlow;
    use crate::domain::tab::Tab;
    use crate::error::{FormError, GENERIC_FAILURE, ValidationError};
    use crate::presentation::result_view::ScoreBand;
    use auth::AuthState;
    use auth::models::{Email, User, UserRole};
    use backend::Credentials;
    use backend::models::{CheckKind, FileUpload, Payload};
    use kernel::id::GuestId;
    use quota::{BackendSessionSource, GuestQuotaTracker, QuotaConfig, QuotaState, UpgradePrompt};
    use std::sync::Arc;

    type Flow = SubmitFlow<FakeBackend, BackendSessionSource<FakeBackend>>;

    struct Harness {
        backend: Arc<FakeBackend>,
        flow: Flow,
        guest_id: GuestId,
    }

    impl Harness {
        fn new(backend: FakeBackend) -> Self {
            let backend = Arc::new(backend);
            let source = Arc::new(BackendSessionSource::new(backend.clone()));
            let tracker = Arc::new(GuestQuotaTracker::new(source, QuotaConfig::default()));
            let flow = SubmitFlow::new(
                backend.clone(),
                tracker,
                CurrentAnalysis::new(),
                FormConfig::default(),
            );
            Self {
                backend,
                flow,
                guest_id: GuestId::new(),
            }
        }

        async fn as_guest(self) -> Self {
            self.flow
                .tracker()
                .on_auth_state(&AuthState::guest(Some(self.guest_id)))
                .await;
            self
        }

        fn credentials(&self) -> Credentials {
            Credentials::Guest(self.guest_id)
        }
    }

    fn text_form(text: &str) -> SubmissionForm {
        let mut form = SubmissionForm::new();
        form.select_tab(Tab::Text).unwrap();
        form.set_text(text).unwrap();
        form
    }

    #[tokio::test]
    async fn test_guest_check_end_to_end() {
        let h = Harness::new(FakeBackend::new(
            3,
            Outcome::Verdict {
                score: 15,
                remaining: Some(2),
            },
        ))
        .as_guest()
        .await;
        assert_eq!(h.flow.tracker().remaining(), Some(3));

        let mut form = text_form("Vaccines contain microchips");
        let submission = h.flow.submit(&mut form, &h.credentials()).await.unwrap();

        assert_eq!(submission.view.score, 15);
        assert_eq!(submission.view.verdict, "Likely Misleading");
        assert_eq!(submission.view.band, ScoreBand::Misleading);

        let prompt = submission.prompt.unwrap();
        assert_eq!(prompt, UpgradePrompt::OnlyRemaining(2));
        assert!(prompt.title().to_lowercase().contains("only 2 remaining"));

        assert_eq!(h.flow.tracker().remaining(), Some(2));
        assert_eq!(h.flow.current().get(), Some(submission.response.clone()));
        assert!(!form.is_loading());

        let sent = h.backend.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(sent.kind, CheckKind::Text);
        assert_eq!(sent.payload, Payload::Text("Vaccines contain microchips".into()));
        assert_eq!(
            h.backend.last_credentials.lock().unwrap().clone(),
            Some(Credentials::Guest(h.guest_id))
        );
    }

    #[tokio::test]
    async fn test_whitespace_text_makes_no_backend_call() {
        let h = Harness::new(FakeBackend::new(
            5,
            Outcome::Verdict {
                score: 50,
                remaining: Some(4),
            },
        ));

        let mut form = text_form("   \n\t  ");
        let err = h.flow.submit(&mut form, &h.credentials()).await.unwrap_err();

        assert!(matches!(err, FormError::Invalid(ValidationError::EmptyText)));
        assert_eq!(h.backend.total_calls(), 0);
        assert!(form.banner().is_some());
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_invalid_url_makes_no_backend_call() {
        let h = Harness::new(FakeBackend::new(
            5,
            Outcome::Verdict {
                score: 50,
                remaining: None,
            },
        ));
        let mut form = SubmissionForm::new();
        form.select_tab(Tab::Url).unwrap();
        form.set_url("ftp:/bad").unwrap();

        let err = h.flow.submit(&mut form, &h.credentials()).await.unwrap_err();
        assert!(matches!(err, FormError::Invalid(ValidationError::InvalidUrl)));
        assert_eq!(h.backend.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_server_error_leaves_quota_untouched() {
        let h = Harness::new(FakeBackend::new(4, Outcome::ServerError))
            .as_guest()
            .await;

        let mut form = text_form("The moon landing was staged");
        let err = h.flow.submit(&mut form, &h.credentials()).await.unwrap_err();

        assert!(matches!(err, FormError::Backend(_)));
        assert_eq!(h.flow.tracker().remaining(), Some(4));
        let banner = form.banner().unwrap();
        assert_eq!(banner.message, GENERIC_FAILURE);
        assert!(banner.is_retryable());
        assert!(h.flow.current().get().is_none());

        // Resubmitting the same input works once the backend recovers.
        h.backend.set_outcome(Outcome::Verdict {
            score: 10,
            remaining: Some(3),
        });
        let submission = h.flow.submit(&mut form, &h.credentials()).await.unwrap();
        assert_eq!(submission.prompt, Some(UpgradePrompt::OnlyRemaining(3)));
        assert!(form.banner().is_none());
    }

    #[tokio::test]
    async fn test_quota_rejection_blocks_next_submission_locally() {
        let h = Harness::new(FakeBackend::new(2, Outcome::QuotaRejected))
            .as_guest()
            .await;

        let mut form = text_form("claim");
        assert!(h.flow.submit(&mut form, &h.credentials()).await.is_err());
        assert!(h.flow.tracker().state().is_exhausted());
        assert_eq!(h.backend.submits(), 1);

        let err = h.flow.submit(&mut form, &h.credentials()).await.unwrap_err();
        assert!(matches!(err, FormError::Quota(_)));
        assert_eq!(h.backend.submits(), 1);
        assert!(form.banner().unwrap().action.is_some());
    }

    #[tokio::test]
    async fn test_last_check_exhausts_tracker() {
        let h = Harness::new(FakeBackend::new(
            1,
            Outcome::Verdict {
                score: 60,
                remaining: Some(0),
            },
        ))
        .as_guest()
        .await;

        let mut form = text_form("claim");
        let submission = h.flow.submit(&mut form, &h.credentials()).await.unwrap();
        assert_eq!(submission.prompt, Some(UpgradePrompt::NoneRemaining));
        assert_eq!(
            h.flow.tracker().state(),
            QuotaState::Exhausted { daily_limit: 10 }
        );

        assert!(h.flow.submit(&mut form, &h.credentials()).await.is_err());
        assert_eq!(h.backend.submits(), 1);
    }

    #[tokio::test]
    async fn test_image_ocr_failure_does_not_block_check() {
        let mut backend = FakeBackend::new(
            8,
            Outcome::Verdict {
                score: 30,
                remaining: Some(7),
            },
        );
        backend.ocr_fails = true;
        let h = Harness::new(backend).as_guest().await;

        let mut form = SubmissionForm::new();
        form.set_file(
            FileUpload::new("meme.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]),
            h.flow.config(),
        )
        .unwrap();

        let submission = h.flow.submit(&mut form, &h.credentials()).await.unwrap();
        assert!(submission.extracted_text.is_none());
        assert_eq!(h.backend.ocr_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(h.backend.submits(), 1);

        let sent = h.backend.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(sent.kind, CheckKind::Image);
    }

    #[tokio::test]
    async fn test_image_ocr_text_is_returned() {
        let h = Harness::new(FakeBackend::new(
            8,
            Outcome::Verdict {
                score: 30,
                remaining: Some(7),
            },
        ))
        .as_guest()
        .await;

        let mut form = SubmissionForm::new();
        form.set_file(
            FileUpload::new("meme.png", "image/png", vec![1, 2, 3]),
            h.flow.config(),
        )
        .unwrap();
        let submission = h.flow.submit(&mut form, &h.credentials()).await.unwrap();
        assert_eq!(
            submission.extracted_text.as_deref(),
            Some("5G towers spread viruses")
        );
    }

    #[tokio::test]
    async fn test_signed_in_user_sees_no_prompt() {
        let h = Harness::new(FakeBackend::new(
            1,
            Outcome::Verdict {
                score: 20,
                remaining: Some(1),
            },
        ))
        .as_guest()
        .await;

        let user = User {
            id: "u1".into(),
            name: "Ana".into(),
            email: Email::new("ana@example.com").unwrap(),
            role: UserRole::User,
            avatar_url: None,
        };
        h.flow
            .tracker()
            .on_auth_state(&AuthState::authenticated(user))
            .await;

        let mut form = text_form("claim");
        let credentials = Credentials::Bearer("token".into());
        let submission = h.flow.submit(&mut form, &credentials).await.unwrap();
        assert_eq!(submission.prompt, None);
        assert_eq!(h.backend.guest_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_open_replaces_current_analysis() {
        let h = Harness::new(FakeBackend::new(
            5,
            Outcome::Verdict {
                score: 20,
                remaining: Some(4),
            },
        ))
        .as_guest()
        .await;

        let mut form = text_form("claim");
        h.flow.submit(&mut form, &h.credentials()).await.unwrap();
        let view = h.flow.open("chk_old", &h.credentials()).await.unwrap();

        assert_eq!(view.check_id, "chk_old");
        assert_eq!(h.flow.current().get().map(|r| r.id), Some("chk_old".into()));
    }
}
