//! API request and response models.

use serde::{Deserialize, Serialize};

use truthlens_core::{AnalysisModel, NewsVerdict, ThreatAssessment};

/// Request body for POST /api/analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The text to analyze.
    pub text: String,
    /// The model to credit in the output (default: crime-prediction).
    #[serde(default)]
    pub model: AnalysisModel,
}

/// Response body for POST /api/analyze.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// The full threat assessment.
    #[serde(flatten)]
    pub assessment: ThreatAssessment,
    /// Wall-clock latency of the request in milliseconds, including the
    /// simulated inference delay.
    pub latency_ms: u64,
}

/// Request body for POST /api/verify.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// The text to check.
    pub text: String,
}

/// Response body for POST /api/verify.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    /// The news-authenticity verdict.
    #[serde(flatten)]
    pub verdict: NewsVerdict,
    /// Wall-clock latency of the request in milliseconds.
    pub latency_ms: u64,
}

/// One model entry in the models listing.
#[derive(Debug, Serialize)]
pub struct ModelEntry {
    pub id: AnalysisModel,
    pub name: &'static str,
    pub description: &'static str,
}

/// Response body for GET /api/models.
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelEntry>,
}
