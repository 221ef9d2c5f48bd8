//! Check models
//!
//! A check is one unit of content analysis. The request is normalized by the
//! submission form; the response is produced by the backend and held by the
//! client only for display and export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::upload::FileUpload;

/// What kind of content is being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Text,
    Image,
    Url,
}

impl CheckKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Text => "text",
            CheckKind::Image => "image",
            CheckKind::Url => "url",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Pasted text or a URL
    Text(String),
    /// An uploaded file
    Binary(FileUpload),
}

/// A normalized check request
///
/// Exactly one content source; the form guarantees well-formedness before a
/// request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub kind: CheckKind,
    pub payload: Payload,
    pub language: Option<String>,
}

impl CheckRequest {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: CheckKind::Text,
            payload: Payload::Text(content.into()),
            language: None,
        }
    }

    pub fn url(link: impl Into<String>) -> Self {
        Self {
            kind: CheckKind::Url,
            payload: Payload::Text(link.into()),
            language: None,
        }
    }

    pub fn file(kind: CheckKind, upload: FileUpload) -> Self {
        Self {
            kind,
            payload: Payload::Binary(upload),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// JSON body for text and URL checks
#[derive(Debug, Serialize)]
pub(crate) struct CheckBody<'a> {
    pub kind: CheckKind,
    pub payload: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'a str>,
}

/// Position of a cited source relative to the claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Support,
    Refute,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub id: String,
    pub domain: String,
    pub title: String,
    pub snippet: String,
    pub url: String,
    pub stance: Stance,
    /// 0-100
    pub trust_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
}

/// A discrete factual assertion extracted from the content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    pub what: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who: Option<String>,
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
}

/// Share of model confidence in each band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBands {
    pub high: f64,
    pub mid: f64,
    pub low: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckMetadata {
    /// Seconds spent by the backend
    pub processing_time: f64,
    pub language: String,
    pub model_version: String,
    pub timestamp: DateTime<Utc>,
    /// Present for unauthenticated guests only
    #[serde(
        rename = "remaining_checks",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub remaining_checks: Option<u32>,
}

/// Short educational note attached to a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningCard {
    pub title: String,
    pub tip: String,
}

/// Backend verdict for one check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub id: String,
    /// 0-100, higher is more credible
    #[serde(deserialize_with = "score_in_range")]
    pub score: u8,
    pub verdict: String,
    pub summary: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub claims: Vec<Claim>,
    pub confidence_bands: ConfidenceBands,
    pub metadata: CheckMetadata,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub learning_cards: Vec<LearningCard>,
}

/// Highest credibility score the backend may report
pub const MAX_SCORE: u8 = 100;

fn score_in_range<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let score = u8::deserialize(deserializer)?;
    if score > MAX_SCORE {
        return Err(serde::de::Error::custom(format!(
            "score {score} is outside 0-{MAX_SCORE}"
        )));
    }
    Ok(score)
}

impl CheckResponse {
    pub fn remaining_checks(&self) -> Option<u32> {
        self.metadata.remaining_checks
    }
}
