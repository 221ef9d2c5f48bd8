//! Submission Form
//!
//! State of the tabbed input form. Each tab owns its input and keeps it
//! across tab switches; only `reset()` discards inputs. While a check is in
//! flight every tab is disabled and edits are refused with
//! [`FormError::Busy`].

use backend::models::{CheckRequest, FileUpload};

use crate::application::config::FormConfig;
use crate::domain::banner::Banner;
use crate::domain::input::FormInput;
use crate::domain::tab::Tab;
use crate::domain::validation::validate_file;
use crate::error::{FormError, FormResult};

#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    active: Tab,
    file: Option<FileUpload>,
    text: String,
    url: String,
    banner: Option<Banner>,
    loading: bool,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Tabs accept input only while no check is running
    pub fn tab_enabled(&self, _tab: Tab) -> bool {
        !self.loading
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn file(&self) -> Option<&FileUpload> {
        self.file.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn ensure_idle(&self) -> FormResult<()> {
        if self.loading {
            Err(FormError::Busy)
        } else {
            Ok(())
        }
    }

    /// Switch tabs, clearing any banner
    pub fn select_tab(&mut self, tab: Tab) -> FormResult<()> {
        self.ensure_idle()?;
        self.active = tab;
        self.banner = None;
        Ok(())
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> FormResult<()> {
        self.ensure_idle()?;
        self.text = text.into();
        Ok(())
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> FormResult<()> {
        self.ensure_idle()?;
        self.url = url.into();
        Ok(())
    }

    /// Pick a file
    ///
    /// A file that fails size or type rules is refused on the spot with its
    /// reason in the banner; the previously picked file is kept.
    pub fn set_file(&mut self, upload: FileUpload, config: &FormConfig) -> FormResult<()> {
        self.ensure_idle()?;
        if let Err(e) = validate_file(&upload, config.max_file_bytes, &config.accepted_mime) {
            let err = FormError::Invalid(e);
            self.show(&err);
            return Err(err);
        }
        self.file = Some(upload);
        self.banner = None;
        Ok(())
    }

    pub fn clear_file(&mut self) -> FormResult<()> {
        self.ensure_idle()?;
        self.file = None;
        Ok(())
    }

    /// Discard every tab's input and the banner
    pub fn reset(&mut self) -> FormResult<()> {
        self.ensure_idle()?;
        *self = Self {
            active: self.active,
            ..Self::default()
        };
        Ok(())
    }

    /// Input of the active tab
    pub fn input(&self) -> FormInput {
        match self.active {
            Tab::File => FormInput::File(self.file.clone()),
            Tab::Text => FormInput::Text(self.text.clone()),
            Tab::Url => FormInput::Url(self.url.clone()),
        }
    }

    /// Validate the active tab and enter the loading state
    ///
    /// On a validation error the reason is shown and the form stays idle.
    pub fn begin_submit(&mut self, config: &FormConfig) -> FormResult<CheckRequest> {
        self.ensure_idle()?;

        let normalized = self.input().normalize(
            config.max_file_bytes,
            &config.accepted_mime,
            config.language.as_deref(),
        );
        match normalized {
            Ok(request) => {
                self.banner = None;
                self.loading = true;
                Ok(request)
            }
            Err(e) => {
                let err = FormError::Invalid(e);
                err.log();
                self.show(&err);
                Err(err)
            }
        }
    }

    /// The in-flight check succeeded
    pub fn complete(&mut self) {
        self.loading = false;
        self.banner = None;
    }

    /// The in-flight check failed, or was blocked before the network
    pub fn fail(&mut self, err: FormError) -> FormError {
        self.loading = false;
        self.show(&err);
        err
    }

    fn show(&mut self, err: &FormError) {
        if !matches!(err, FormError::Busy) {
            self.banner = Some(Banner::from_app_error(&err.user_error()));
        }
    }
}
