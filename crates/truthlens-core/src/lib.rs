//! TruthLens Core - classification logic and mock analysis data.
//!
//! This crate implements the analysis backend of the TruthLens product:
//!
//! - [`classifier`] - the substring rule table, threat assessments, and
//!   news-authenticity verdicts
//! - [`engine`] - the async service surface with simulated inference latency
//! - [`metrics`] / [`explain`] - the canned dashboard and explainability data
//!
//! Everything is rule-based and self-contained: no model, no network, no
//! persistence. Results are created fresh per invocation.

pub mod classifier;
pub mod engine;
pub mod error;
pub mod explain;
pub mod metrics;
pub mod model;

pub use classifier::{
    Authenticity, CrimeCategory, CrimeClassifier, NewsClassifier, NewsVerdict, RiskLevel, Scenario,
    Severity, ThreatAssessment,
};
pub use engine::{AnalysisEngine, EngineConfig, DEFAULT_SIMULATED_LATENCY};
pub use error::AnalysisError;
pub use explain::ExplanationReport;
pub use metrics::ModelMetricsReport;
pub use model::AnalysisModel;
