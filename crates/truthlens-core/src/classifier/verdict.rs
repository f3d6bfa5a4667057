//! News-authenticity verdicts.
//!
//! The landing-page check: text carrying urgency markers is called fake,
//! everything else real. Confidence is sampled from a jitter source so the
//! deterministic rule can be tested without touching global randomness.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Markers tested against the lower-cased input.
const SUSPICIOUS_MARKERS: &[&str] = &["urgent", "breaking"];

/// Tested against the raw input; repeated exclamation is a marker on its own.
const EXCLAMATION_MARKER: &str = "!!";

const REASONS_SUSPICIOUS: &[&str] = &[
    "Sensational language detected",
    "Emotional manipulation",
    "Urgency markers",
];

const REASONS_CREDIBLE: &[&str] = &[
    "Neutral tone",
    "Factual structure",
    "Credible phrasing",
];

/// Confidence bounds for sampled verdict confidence, inclusive.
pub const CONFIDENCE_MIN: u8 = 75;
pub const CONFIDENCE_MAX: u8 = 94;

/// Authenticity label attached to a news verdict.
///
/// `Suspicious` exists in the product's result vocabulary but is never
/// produced by the current rule; it is kept for wire compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Authenticity {
    Real,
    Fake,
    Suspicious,
}

impl Authenticity {
    /// Returns a human-readable name for this label.
    pub fn name(&self) -> &'static str {
        match self {
            Authenticity::Real => "Real",
            Authenticity::Fake => "Fake",
            Authenticity::Suspicious => "Suspicious",
        }
    }
}

/// Sentiment label attached to a news verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Negative,
    Neutral,
}

/// Source of sampled confidence values.
///
/// Implementations must be cheap and thread-safe; the classifier calls
/// `sample` once per verdict.
pub trait ConfidenceJitter: Send + Sync {
    /// Samples a confidence value in `[lo, hi]` inclusive.
    fn sample(&self, lo: u8, hi: u8) -> u8;
}

/// Thread-RNG backed jitter, the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomJitter;

impl ConfidenceJitter for RandomJitter {
    fn sample(&self, lo: u8, hi: u8) -> u8 {
        rand::thread_rng().gen_range(lo..=hi)
    }
}

/// Fixed jitter returning a constant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub u8);

impl ConfidenceJitter for FixedJitter {
    fn sample(&self, lo: u8, hi: u8) -> u8 {
        self.0.clamp(lo, hi)
    }
}

/// Result of a news-authenticity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsVerdict {
    /// The analyzed input text.
    pub text: String,
    /// Authenticity label.
    pub prediction: Authenticity,
    /// Confidence score (75-94).
    pub confidence: u8,
    /// Supporting reasons for the label.
    pub reasons: Vec<String>,
    /// Overall sentiment label.
    pub sentiment: Sentiment,
    /// First three whitespace-separated words of the input.
    pub key_phrases: Vec<String>,
}

/// News-authenticity classifier.
#[derive(Clone)]
pub struct NewsClassifier {
    jitter: Arc<dyn ConfidenceJitter>,
}

impl NewsClassifier {
    /// Creates a classifier with random confidence jitter.
    pub fn new() -> Self {
        Self::with_jitter(RandomJitter)
    }

    /// Creates a classifier with a specific jitter source.
    pub fn with_jitter(jitter: impl ConfidenceJitter + 'static) -> Self {
        Self {
            jitter: Arc::new(jitter),
        }
    }

    /// Returns true when `text` carries any suspicious marker.
    pub fn is_suspicious(&self, text: &str) -> bool {
        let text_lower = text.to_lowercase();
        SUSPICIOUS_MARKERS
            .iter()
            .any(|marker| text_lower.contains(marker))
            || text.contains(EXCLAMATION_MARKER)
    }

    /// Produces a verdict for `text`.
    ///
    /// Assumes non-empty input; the engine rejects blank text before calling.
    pub fn verify(&self, text: &str) -> NewsVerdict {
        let suspicious = self.is_suspicious(text);

        let (prediction, reasons, sentiment) = if suspicious {
            (
                Authenticity::Fake,
                REASONS_SUSPICIOUS,
                Sentiment::Negative,
            )
        } else {
            (Authenticity::Real, REASONS_CREDIBLE, Sentiment::Neutral)
        };

        let confidence = self.jitter.sample(CONFIDENCE_MIN, CONFIDENCE_MAX);

        let key_phrases = text
            .split_whitespace()
            .take(3)
            .map(|w| w.to_string())
            .collect();

        tracing::debug!(
            prediction = prediction.name(),
            confidence,
            "News verdict produced"
        );

        NewsVerdict {
            text: text.to_string(),
            prediction,
            confidence,
            reasons: reasons.iter().map(|s| s.to_string()).collect(),
            sentiment,
            key_phrases,
        }
    }
}

impl Default for NewsClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NewsClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsClassifier").finish_non_exhaustive()
    }
}
