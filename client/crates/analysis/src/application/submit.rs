//! Submit Flow
//!
//! One check from form to result:
//! 1. validate the active tab (no network on failure)
//! 2. quota gate (an exhausted guest is blocked before the network)
//! 3. OCR for image uploads (failure is ignored)
//! 4. submit the check
//! 5. update the tracker and decide the upgrade prompt

use backend::models::{CheckRequest, CheckResponse, Payload};
use backend::{BackendApi, Credentials};
use quota::{GuestQuotaTracker, GuestSessionSource, UpgradePrompt};
use std::sync::Arc;

use crate::application::config::FormConfig;
use crate::application::current::CurrentAnalysis;
use crate::application::form::SubmissionForm;
use crate::error::{FormError, FormResult};
use crate::presentation::result_view::ResultView;

/// Outcome of a successful check
#[derive(Debug, Clone)]
pub struct Submission {
    pub response: CheckResponse,
    pub view: ResultView,
    pub prompt: Option<UpgradePrompt>,
    /// Text recognized in an uploaded image, if any
    pub extracted_text: Option<String>,
}

pub struct SubmitFlow<B, S>
where
    B: BackendApi,
    S: GuestSessionSource,
{
    api: Arc<B>,
    tracker: Arc<GuestQuotaTracker<S>>,
    current: CurrentAnalysis,
    config: FormConfig,
}

impl<B, S> SubmitFlow<B, S>
where
    B: BackendApi,
    S: GuestSessionSource,
{
    pub fn new(
        api: Arc<B>,
        tracker: Arc<GuestQuotaTracker<S>>,
        current: CurrentAnalysis,
        config: FormConfig,
    ) -> Self {
        Self {
            api,
            tracker,
            current,
            config,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn tracker(&self) -> &GuestQuotaTracker<S> {
        &self.tracker
    }

    pub fn current(&self) -> &CurrentAnalysis {
        &self.current
    }

    /// Submit the form's active tab
    pub async fn submit(
        &self,
        form: &mut SubmissionForm,
        credentials: &Credentials,
    ) -> FormResult<Submission> {
        let request = form.begin_submit(&self.config)?;

        if let Err(e) = self.tracker.ensure_can_submit() {
            return Err(form.fail(e.into()));
        }

        let extracted_text = self.extract_text(&request, credentials).await;

        match self.api.submit_check(&request, credentials).await {
            Ok(response) => {
                let prompt = self.tracker.record_success(&response);
                tracing::info!(
                    check_id = %response.id,
                    kind = %request.kind,
                    score = response.score,
                    verdict = %response.verdict,
                    "Check completed"
                );

                self.current.set(response.clone());
                form.complete();
                Ok(Submission {
                    view: ResultView::from(&response),
                    response,
                    prompt,
                    extracted_text,
                })
            }
            Err(e) => {
                e.log();
                self.tracker.record_failure(&e);
                Err(form.fail(FormError::Backend(e)))
            }
        }
    }

    /// Open a past check by id
    pub async fn open(&self, check_id: &str, credentials: &Credentials) -> FormResult<ResultView> {
        let response = self
            .api
            .get_check(check_id, credentials)
            .await
            .inspect_err(|e| e.log())?;
        self.current.set(response.clone());
        Ok(ResultView::from(&response))
    }

    async fn extract_text(&self, request: &CheckRequest, credentials: &Credentials) -> Option<String> {
        if !self.config.ocr_images {
            return None;
        }
        let Payload::Binary(upload) = &request.payload else {
            return None;
        };
        if !upload.is_image() {
            return None;
        }

        match self.api.ocr(upload, credentials).await {
            Ok(ocr) => ocr.text().map(str::to_string),
            Err(e) => {
                tracing::debug!(error = %e, file = %upload.file_name, "OCR failed, checking the file as is");
                None
            }
        }
    }
}
