//! API route handlers.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use truthlens_core::{AnalysisModel, ExplanationReport, ModelMetricsReport};

use crate::error::Result;
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ModelEntry, ModelsResponse, VerifyRequest, VerifyResponse,
};
use crate::state::AppState;

/// POST /api/analyze - Run a crime/threat analysis.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    debug!(text_len = req.text.len(), model = req.model.id(), "Analyzing text");

    let start = Instant::now();
    let assessment = state.engine.analyze(&req.text, req.model).await?;
    let latency_ms = start.elapsed().as_millis() as u64;

    info!(
        risk = assessment.risk_level.name(),
        categories = assessment.categories.len(),
        latency_ms,
        "Analysis request complete"
    );

    Ok(Json(AnalyzeResponse {
        assessment,
        latency_ms,
    }))
}

/// POST /api/verify - Run a news-authenticity check.
pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>> {
    debug!(text_len = req.text.len(), "Verifying text");

    let start = Instant::now();
    let verdict = state.engine.verify(&req.text).await?;
    let latency_ms = start.elapsed().as_millis() as u64;

    info!(
        prediction = verdict.prediction.name(),
        confidence = verdict.confidence,
        latency_ms,
        "Verify request complete"
    );

    Ok(Json(VerifyResponse {
        verdict,
        latency_ms,
    }))
}

/// GET /api/models - List the selectable analysis models.
pub async fn get_models() -> Json<ModelsResponse> {
    let models = AnalysisModel::all()
        .iter()
        .map(|m| ModelEntry {
            id: *m,
            name: m.name(),
            description: m.description(),
        })
        .collect();

    Json(ModelsResponse { models })
}

/// GET /api/metrics - Get the model-performance snapshot.
pub async fn get_metrics() -> Json<ModelMetricsReport> {
    Json(ModelMetricsReport::snapshot())
}

/// GET /api/explain - Get the explainability worked example.
pub async fn get_explanation() -> Json<ExplanationReport> {
    Json(ExplanationReport::sample())
}
