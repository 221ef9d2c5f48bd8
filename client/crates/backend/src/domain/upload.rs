//! Upload and OCR models

use serde::{Deserialize, Serialize};

/// A file picked by the user, held in memory until submitted
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

// Bytes are not worth printing.
impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Hosted URL of the uploaded file
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
}

impl OcrResponse {
    /// Extracted text, if OCR succeeded and found any
    pub fn text(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.extracted_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_text_requires_success() {
        let failed = OcrResponse {
            success: false,
            extracted_text: Some("stale".into()),
        };
        assert_eq!(failed.text(), None);

        let blank = OcrResponse {
            success: true,
            extracted_text: Some("   ".into()),
        };
        assert_eq!(blank.text(), None);

        let ok: OcrResponse =
            serde_json::from_str(r#"{"success":true,"extracted_text":" BREAKING NEWS "}"#).unwrap();
        assert_eq!(ok.text(), Some("BREAKING NEWS"));
    }

    #[test]
    fn test_debug_hides_bytes() {
        let upload = FileUpload::new("a.png", "image/png", vec![0; 2048]);
        let printed = format!("{upload:?}");
        assert!(printed.contains("size: 2048"));
        assert!(upload.is_image());
    }
}
