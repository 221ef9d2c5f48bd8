//! Form Input
//!
//! The content of the active tab, normalized into one [`CheckRequest`].

use backend::models::{CheckKind, CheckRequest, FileUpload};

use crate::domain::tab::Tab;
use crate::domain::validation::{validate_file, validate_text, validate_url};
use crate::error::ValidationError;

/// Exactly one content source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    File(Option<FileUpload>),
    Text(String),
    Url(String),
}

impl FormInput {
    pub fn tab(&self) -> Tab {
        match self {
            FormInput::File(_) => Tab::File,
            FormInput::Text(_) => Tab::Text,
            FormInput::Url(_) => Tab::Url,
        }
    }

    /// Validate and build the request
    ///
    /// Images are checked as `image`; PDFs and text files as `text`.
    pub fn normalize(
        self,
        max_file_bytes: u64,
        accepted_mime: &[String],
        language: Option<&str>,
    ) -> Result<CheckRequest, ValidationError> {
        let request = match self {
            FormInput::File(None) => return Err(ValidationError::NoFile),
            FormInput::File(Some(upload)) => {
                validate_file(&upload, max_file_bytes, accepted_mime)?;
                let kind = if upload.is_image() {
                    CheckKind::Image
                } else {
                    CheckKind::Text
                };
                CheckRequest::file(kind, upload)
            }
            FormInput::Text(text) => CheckRequest::text(validate_text(&text)?),
            FormInput::Url(url) => CheckRequest::url(validate_url(&url)?),
        };

        Ok(match language {
            Some(language) => request.with_language(language),
            None => request,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::models::Payload;

    fn accepted() -> Vec<String> {
        vec!["image/*".into(), "application/pdf".into(), "text/*".into()]
    }

    #[test]
    fn test_text_normalizes_trimmed() {
        let request = FormInput::Text("  Vaccines contain microchips \n".into())
            .normalize(100, &accepted(), None)
            .unwrap();
        assert_eq!(request.kind, CheckKind::Text);
        assert_eq!(
            request.payload,
            Payload::Text("Vaccines contain microchips".into())
        );
        assert_eq!(request.language, None);
    }

    #[test]
    fn test_pdf_is_a_text_check() {
        let upload = FileUpload::new("report.pdf", "application/pdf", vec![1, 2, 3]);
        let request = FormInput::File(Some(upload))
            .normalize(100, &accepted(), Some("en"))
            .unwrap();
        assert_eq!(request.kind, CheckKind::Text);
        assert!(matches!(request.payload, Payload::Binary(_)));
        assert_eq!(request.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_image_is_an_image_check() {
        let upload = FileUpload::new("meme.jpg", "image/jpeg", vec![1, 2, 3]);
        let request = FormInput::File(Some(upload))
            .normalize(100, &accepted(), None)
            .unwrap();
        assert_eq!(request.kind, CheckKind::Image);
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            FormInput::File(None).normalize(100, &accepted(), None),
            Err(ValidationError::NoFile)
        );
    }
}
