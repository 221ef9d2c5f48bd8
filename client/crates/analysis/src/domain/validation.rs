//! Input Validation Rules
//!
//! Pure checks run before a request is built. Each failure carries the
//! specific reason shown to the user.

use backend::models::FileUpload;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::ValidationError;

/// `scheme://host[/path]`
const URL_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^\s/?#]+(?:[/?#]\S*)?$";

static URL_REGEX: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(URL_PATTERN));

/// Syntactic URL check
///
/// ## Examples
/// ```
/// use analysis::domain::validation::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/a/b"));
/// assert!(!is_valid_url("not a url"));
/// assert!(!is_valid_url("ftp:/bad"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    match URL_REGEX.as_ref() {
        Ok(re) => re.is_match(input),
        Err(e) => {
            tracing::error!(error = %e, "URL pattern failed to compile");
            false
        }
    }
}

pub fn validate_url(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if is_valid_url(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidUrl)
    }
}

pub fn validate_text(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyText)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Media type without parameters, lowercased
fn essence(mime: &str) -> String {
    mime.split(';').next().unwrap_or_default().trim().to_ascii_lowercase()
}

/// Whether `mime` matches one of `accepted` (`type/*` wildcards allowed)
pub fn mime_accepted(mime: &str, accepted: &[String]) -> bool {
    let mime = essence(mime);
    accepted.iter().any(|pattern| match pattern.strip_suffix("/*") {
        Some(top) => mime
            .split_once('/')
            .is_some_and(|(t, sub)| t == top && !sub.is_empty()),
        None => mime == *pattern,
    })
}

pub fn validate_file(
    upload: &FileUpload,
    max_bytes: u64,
    accepted: &[String],
) -> Result<(), ValidationError> {
    let size = upload.size() as u64;
    if size == 0 {
        return Err(ValidationError::EmptyFile);
    }
    if size > max_bytes {
        return Err(ValidationError::FileTooLarge {
            size,
            max: max_bytes,
        });
    }
    if !mime_accepted(&upload.mime_type, accepted) {
        return Err(ValidationError::UnsupportedType {
            mime: upload.mime_type.clone(),
        });
    }
    Ok(())
}
