//! Form Configuration

/// Submission form configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Largest accepted upload
    pub max_file_bytes: u64,
    /// Accepted media types; `type/*` matches any subtype
    pub accepted_mime: Vec<String>,
    /// Try OCR on image uploads before the check
    pub ocr_images: bool,
    /// Language hint sent with every check
    pub language: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 10 * 1024 * 1024,
            accepted_mime: vec![
                "image/*".to_string(),
                "application/pdf".to_string(),
                "text/*".to_string(),
            ],
            ocr_images: true,
            language: None,
        }
    }
}
