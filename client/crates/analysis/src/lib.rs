//! Content Analysis Module
//!
//! Clean Architecture structure:
//! - `domain/` - Tabs, form input, validation rules, error banners
//! - `application/` - Submission form state, the submit flow, current analysis slot
//! - `presentation/` - Result view model with share and download actions
//!
//! ## Submission Model
//! - Exactly one of file, text or URL per check; each tab keeps its own input
//! - Invalid input never reaches the network
//! - One check at a time per form; tabs are disabled while it runs
//! - Backend failures become a dismissible banner asking the user to resubmit

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::FormConfig;
pub use application::current::CurrentAnalysis;
pub use application::form::SubmissionForm;
pub use application::submit::{SubmitFlow, Submission};
pub use domain::banner::Banner;
pub use domain::input::FormInput;
pub use domain::tab::Tab;
pub use error::{ExportError, FormError, FormResult, ValidationError};
pub use presentation::result_view::{ResultView, ScoreBand};

#[cfg(test)]
mod tests;
