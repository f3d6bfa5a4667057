//! Static explainability payload.
//!
//! The explainable-AI page walks through one canned worked example: a sample
//! text with per-token attributions, global feature importances, and a LIME
//! record. Nothing here is computed; the data is served verbatim.

use serde::{Deserialize, Serialize};

use crate::classifier::Authenticity;

/// Sample text the worked example explains.
pub const SAMPLE_TEXT: &str = "BREAKING: Scientists have discovered a revolutionary new \
technology that can cure all diseases instantly! Government officials are trying to hide \
this miracle cure from the public. Share this before it gets deleted!";

/// Direction of a token's contribution to the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contribution {
    Positive,
    Negative,
    Neutral,
}

/// Per-token attribution in the SHAP-style view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAttribution {
    pub word: String,
    pub importance: f32,
    pub contribution: Contribution,
}

/// A global feature importance row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f32,
    pub description: String,
}

/// One feature in the LIME explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimeFeature {
    pub feature: String,
    pub value: f32,
    /// Signed impact as displayed, e.g. "+0.28".
    pub impact: String,
}

/// LIME-style local explanation for the sample text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimeExplanation {
    pub prediction: Authenticity,
    pub confidence: f32,
    pub top_features: Vec<LimeFeature>,
}

/// Complete explainability payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationReport {
    pub sample_text: String,
    pub token_attributions: Vec<TokenAttribution>,
    pub feature_importances: Vec<FeatureImportance>,
    pub lime: LimeExplanation,
}

impl ExplanationReport {
    /// Returns the canned worked example.
    pub fn sample() -> Self {
        Self {
            sample_text: SAMPLE_TEXT.to_string(),
            token_attributions: token_attributions(),
            feature_importances: feature_importances(),
            lime: lime_explanation(),
        }
    }
}

fn token(word: &str, importance: f32, contribution: Contribution) -> TokenAttribution {
    TokenAttribution {
        word: word.to_string(),
        importance,
        contribution,
    }
}

fn token_attributions() -> Vec<TokenAttribution> {
    use Contribution::{Negative, Neutral, Positive};

    vec![
        token("BREAKING:", 0.85, Negative),
        token("Scientists", 0.12, Positive),
        token("have", 0.02, Neutral),
        token("discovered", 0.15, Positive),
        token("revolutionary", 0.45, Negative),
        token("new", 0.08, Neutral),
        token("technology", 0.18, Positive),
        token("that", 0.01, Neutral),
        token("can", 0.03, Neutral),
        token("cure", 0.25, Positive),
        token("all", 0.67, Negative),
        token("diseases", 0.22, Positive),
        token("instantly!", 0.89, Negative),
        token("Government", 0.71, Negative),
        token("officials", 0.34, Negative),
        token("are", 0.02, Neutral),
        token("trying", 0.28, Negative),
        token("to", 0.01, Neutral),
        token("hide", 0.78, Negative),
        token("this", 0.05, Neutral),
        token("miracle", 0.56, Negative),
        token("cure", 0.25, Positive),
        token("from", 0.12, Negative),
        token("the", 0.01, Neutral),
        token("public.", 0.33, Negative),
        token("Share", 0.82, Negative),
        token("this", 0.15, Negative),
        token("before", 0.43, Negative),
        token("it", 0.08, Neutral),
        token("gets", 0.31, Negative),
        token("deleted!", 0.91, Negative),
    ]
}

fn feature(name: &str, importance: f32, description: &str) -> FeatureImportance {
    FeatureImportance {
        feature: name.to_string(),
        importance,
        description: description.to_string(),
    }
}

fn feature_importances() -> Vec<FeatureImportance> {
    vec![
        feature(
            "Sensational Language",
            0.92,
            "Words like 'BREAKING', 'instantly', 'miracle'",
        ),
        feature(
            "Conspiracy Markers",
            0.87,
            "References to government hiding information",
        ),
        feature(
            "Urgency Indicators",
            0.83,
            "Phrases like 'before it gets deleted'",
        ),
        feature(
            "Unrealistic Claims",
            0.79,
            "Claims about curing 'all diseases'",
        ),
        feature(
            "Call to Action",
            0.74,
            "Encouragement to share without verification",
        ),
        feature(
            "Emotional Manipulation",
            0.68,
            "Appeal to fear and excitement",
        ),
        feature(
            "Lack of Sources",
            0.61,
            "No credible references or citations",
        ),
        feature(
            "Grammatical Patterns",
            0.45,
            "Excessive punctuation and capitalization",
        ),
    ]
}

fn lime_explanation() -> LimeExplanation {
    let lime_feature = |name: &str, value: f32, impact: &str| LimeFeature {
        feature: name.to_string(),
        value,
        impact: impact.to_string(),
    };

    LimeExplanation {
        prediction: Authenticity::Fake,
        confidence: 0.94,
        top_features: vec![
            lime_feature("Sensational words count", 8.0, "+0.28"),
            lime_feature("Conspiracy language", 1.0, "+0.22"),
            lime_feature("Urgency markers", 3.0, "+0.19"),
            lime_feature("Scientific credibility", 0.2, "-0.15"),
            lime_feature("Source references", 0.0, "+0.12"),
        ],
    }
}
