//! Analysis Result View
//!
//! View model of one completed check. Rendering only: the two user actions
//! (share and download) touch the clipboard and the download sink, never the
//! network.

use backend::models::{CheckResponse, Citation, Claim, ConfidenceBands, LearningCard, Stance};
use platform::clipboard::Clipboard;
use platform::download::{DownloadSink, SavedFile};
use serde::Serialize;

use crate::error::ExportError;

/// Coarse reading of the 0-100 credibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Misleading,
    Questionable,
    Credible,
}

impl ScoreBand {
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=39 => ScoreBand::Misleading,
            40..=69 => ScoreBand::Questionable,
            _ => ScoreBand::Credible,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ScoreBand::Misleading => "Low credibility",
            ScoreBand::Questionable => "Needs context",
            ScoreBand::Credible => "High credibility",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub check_id: String,
    pub verdict: String,
    pub score: u8,
    pub band: ScoreBand,
    pub summary: String,
    pub confidence: ConfidenceBands,
    pub supporting: Vec<Citation>,
    pub refuting: Vec<Citation>,
    pub neutral: Vec<Citation>,
    pub claims: Vec<Claim>,
    pub learning_cards: Vec<LearningCard>,
    pub processing_time: f64,
    pub model_version: String,
    pub language: String,
    #[serde(skip)]
    response: CheckResponse,
}

impl From<&CheckResponse> for ResultView {
    fn from(response: &CheckResponse) -> Self {
        let by_stance = |stance: Stance| {
            response
                .citations
                .iter()
                .filter(|c| c.stance == stance)
                .cloned()
                .collect::<Vec<_>>()
        };

        let learning_cards = if response.learning_cards.is_empty() {
            response.claims.iter().map(card_for_claim).collect()
        } else {
            response.learning_cards.clone()
        };

        Self {
            check_id: response.id.clone(),
            verdict: response.verdict.clone(),
            score: response.score,
            band: ScoreBand::from_score(response.score),
            summary: response.summary.clone(),
            confidence: response.confidence_bands,
            supporting: by_stance(Stance::Support),
            refuting: by_stance(Stance::Refute),
            neutral: by_stance(Stance::Neutral),
            claims: response.claims.clone(),
            learning_cards,
            processing_time: response.metadata.processing_time,
            model_version: response.metadata.model_version.clone(),
            language: response.metadata.language.clone(),
            response: response.clone(),
        }
    }
}

/// A study tip for a claim, pointing at the context it is missing
fn card_for_claim(claim: &Claim) -> LearningCard {
    let missing: Vec<&str> = [
        (claim.who.is_none(), "who is making it"),
        (claim.location.is_none(), "where it comes from"),
        (claim.when.is_none(), "when it happened"),
    ]
    .into_iter()
    .filter_map(|(absent, question)| absent.then_some(question))
    .collect();

    let tip = if missing.is_empty() {
        "Trace it back to the original source and compare with outlets you trust.".to_string()
    } else {
        format!("Before sharing, find out {}.", missing.join(" and "))
    };

    LearningCard {
        title: format!("Question the claim: \"{}\"", claim.what),
        tip,
    }
}

/// Pretty-printed JSON of a check, as written by the download action
pub fn export_json(response: &CheckResponse) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(response)
}

impl ResultView {
    /// The response this view was built from
    pub fn response(&self) -> &CheckResponse {
        &self.response
    }

    /// `analysis-<id>.json`, with characters unsafe in file names replaced
    pub fn download_name(&self) -> String {
        let id: String = self
            .check_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("analysis-{id}.json")
    }

    /// Copy the page link
    pub fn share(&self, clipboard: &dyn Clipboard, page_url: &str) -> Result<(), ExportError> {
        clipboard.copy(page_url)?;
        tracing::debug!(check_id = %self.check_id, "Result link copied");
        Ok(())
    }

    /// Save the full response as JSON
    pub fn download(&self, sink: &dyn DownloadSink) -> Result<SavedFile, ExportError> {
        let bytes = export_json(&self.response)?;
        let saved = sink.save(&self.download_name(), &bytes)?;
        tracing::info!(check_id = %self.check_id, size = saved.size, "Result downloaded");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::clipboard::{MemoryClipboard, NoClipboard};
    use platform::download::MemorySink;

    const RESPONSE: &str = r#"{
        "id": "chk/42",
        "score": 72,
        "verdict": "Mostly Accurate",
        "summary": "Supported by two public health agencies.",
        "citations": [
            {"id": "c1", "domain": "who.int", "title": "A", "snippet": "s", "url": "https://who.int/a", "stance": "support", "trustScore": 95},
            {"id": "c2", "domain": "blog.example", "title": "B", "snippet": "s", "url": "https://blog.example/b", "stance": "refute", "trustScore": 20},
            {"id": "c3", "domain": "cdc.gov", "title": "C", "snippet": "s", "url": "https://cdc.gov/c", "stance": "support", "trustScore": 93, "author": "CDC"}
        ],
        "claims": [
            {"id": "k1", "what": "Cases fell in 2024", "who": "Ministry of Health", "when": "2024"}
        ],
        "confidenceBands": {"high": 0.6, "mid": 0.3, "low": 0.1},
        "metadata": {"processingTime": 2.5, "language": "en", "modelVersion": "mg-2", "timestamp": "2026-10-01T12:00:00Z"}
    }"#;

    fn view() -> ResultView {
        let response: CheckResponse = serde_json::from_str(RESPONSE).unwrap();
        ResultView::from(&response)
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Misleading);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::Misleading);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Questionable);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::Credible);
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Credible);
    }

    #[test]
    fn test_citations_grouped_in_order() {
        let view = view();
        let ids: Vec<_> = view.supporting.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c3"]);
        assert_eq!(view.refuting.len(), 1);
        assert!(view.neutral.is_empty());
        assert_eq!(view.band, ScoreBand::Credible);
    }

    #[test]
    fn test_learning_card_from_claim() {
        let view = view();
        assert_eq!(view.learning_cards.len(), 1);
        assert_eq!(
            view.learning_cards[0].tip,
            "Before sharing, find out where it comes from."
        );
    }

    #[test]
    fn test_download_round_trips() {
        let view = view();
        let sink = MemorySink::new();
        let saved = view.download(&sink).unwrap();
        assert_eq!(saved.name, "analysis-chk_42.json");

        let files = sink.files();
        let (_, bytes) = &files[0];
        assert_eq!(bytes, &export_json(view.response()).unwrap());

        let parsed: CheckResponse = serde_json::from_slice(bytes).unwrap();
        assert_eq!(&parsed, view.response());
    }

    #[test]
    fn test_export_keeps_computed_floats_exact() {
        let base: CheckResponse = serde_json::from_str(RESPONSE).unwrap();
        let mut samples = vec![(0.1 + 0.2, 1.0 / 3.0, 2.0 / 3.0, 0.1 * 3.0)];
        for i in 1..2000u32 {
            let a = f64::from(i) / 2003.0;
            samples.push((a, 1.0 - a, a * 0.3, f64::from(i).sqrt() / 7.0));
        }

        for (high, mid, low, seconds) in samples {
            let mut response = base.clone();
            response.confidence_bands = ConfidenceBands { high, mid, low };
            response.metadata.processing_time = seconds;

            let bytes = export_json(&response).unwrap();
            let parsed: CheckResponse = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(parsed, response);
            assert_eq!(parsed.confidence_bands.low.to_bits(), low.to_bits());
        }
    }

    #[test]
    fn test_share_copies_link() {
        let view = view();
        let clipboard = MemoryClipboard::new();
        view.share(&clipboard, "https://misinfoguard.app/analysis/chk_42")
            .unwrap();
        assert_eq!(
            clipboard.contents().as_deref(),
            Some("https://misinfoguard.app/analysis/chk_42")
        );

        assert!(matches!(
            view.share(&NoClipboard, "x"),
            Err(ExportError::Clipboard(_))
        ));
    }
}
