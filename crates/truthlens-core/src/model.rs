//! Analysis model identifiers.
//!
//! The product presents six named "AI models". The identifier selects which
//! model is credited in the output; it never alters the matching logic.

use serde::{Deserialize, Serialize};

/// The selectable analysis models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisModel {
    NewsAuthenticity,
    CrimePrediction,
    Sentiment,
    HateSpeech,
    Cybercrime,
    SocialThreat,
}

impl AnalysisModel {
    /// Returns all selectable models.
    pub fn all() -> &'static [AnalysisModel] {
        &[
            AnalysisModel::NewsAuthenticity,
            AnalysisModel::CrimePrediction,
            AnalysisModel::Sentiment,
            AnalysisModel::HateSpeech,
            AnalysisModel::Cybercrime,
            AnalysisModel::SocialThreat,
        ]
    }

    /// Returns the stable wire identifier, e.g. "news-authenticity".
    pub fn id(&self) -> &'static str {
        match self {
            AnalysisModel::NewsAuthenticity => "news-authenticity",
            AnalysisModel::CrimePrediction => "crime-prediction",
            AnalysisModel::Sentiment => "sentiment",
            AnalysisModel::HateSpeech => "hate-speech",
            AnalysisModel::Cybercrime => "cybercrime",
            AnalysisModel::SocialThreat => "social-threat",
        }
    }

    /// Parses a wire identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.id() == id)
    }

    /// Returns the display name shown in the model picker.
    pub fn name(&self) -> &'static str {
        match self {
            AnalysisModel::NewsAuthenticity => "News Authenticity",
            AnalysisModel::CrimePrediction => "Crime Prediction",
            AnalysisModel::Sentiment => "Sentiment Analysis",
            AnalysisModel::HateSpeech => "Hate Speech Detection",
            AnalysisModel::Cybercrime => "Cybercrime Analysis",
            AnalysisModel::SocialThreat => "Social Media Threat",
        }
    }

    /// Returns the one-line description shown in the model picker.
    pub fn description(&self) -> &'static str {
        match self {
            AnalysisModel::NewsAuthenticity => "Detect fake and misleading news content",
            AnalysisModel::CrimePrediction => "Predict criminal activities and assess threats",
            AnalysisModel::Sentiment => "Analyze emotional tone and polarity",
            AnalysisModel::HateSpeech => "Identify hate speech and targeted abuse",
            AnalysisModel::Cybercrime => "Detect cyber attacks and data breaches",
            AnalysisModel::SocialThreat => "Monitor social media for emerging threats",
        }
    }
}

impl Default for AnalysisModel {
    fn default() -> Self {
        AnalysisModel::CrimePrediction
    }
}
