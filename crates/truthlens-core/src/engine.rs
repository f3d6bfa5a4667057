//! Analysis engine: the async service surface over the classifiers.
//!
//! The engine validates input, waits out the configured simulated inference
//! latency, and delegates to the pure classifiers. It holds no mutable state,
//! so concurrent calls are independent; there is no queue, lock, or rate
//! limit, and the simulated delay always completes.

use std::time::Duration;

use crate::classifier::{
    ConfidenceJitter, CrimeClassifier, NewsClassifier, NewsVerdict, ThreatAssessment,
};
use crate::error::AnalysisError;
use crate::model::AnalysisModel;

/// Default simulated inference latency, matching the observed product pages.
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_secs(3);

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Artificial delay awaited before every result is returned.
    pub simulated_latency: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            simulated_latency: DEFAULT_SIMULATED_LATENCY,
        }
    }
}

impl EngineConfig {
    /// Creates a config with zero simulated latency, for tests and one-shot
    /// CLI use.
    pub fn instant() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
        }
    }

    /// Creates a config with the given simulated latency.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            simulated_latency: latency,
        }
    }
}

/// The analysis engine.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    crime: CrimeClassifier,
    news: NewsClassifier,
    config: EngineConfig,
}

impl AnalysisEngine {
    /// Creates an engine with the given configuration and random verdict
    /// jitter.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            crime: CrimeClassifier::new(),
            news: NewsClassifier::new(),
            config,
        }
    }

    /// Creates an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Creates an engine with zero simulated latency.
    pub fn instant() -> Self {
        Self::new(EngineConfig::instant())
    }

    /// Creates an engine with a specific verdict jitter source.
    pub fn with_jitter(config: EngineConfig, jitter: impl ConfidenceJitter + 'static) -> Self {
        Self {
            crime: CrimeClassifier::new(),
            news: NewsClassifier::with_jitter(jitter),
            config,
        }
    }

    /// Returns the configured simulated latency.
    pub fn simulated_latency(&self) -> Duration {
        self.config.simulated_latency
    }

    /// Returns the crime classifier.
    pub fn crime_classifier(&self) -> &CrimeClassifier {
        &self.crime
    }

    /// Runs a crime/threat analysis.
    ///
    /// Fails with [`AnalysisError::EmptyInput`] when `text` trims to empty.
    pub async fn analyze(
        &self,
        text: &str,
        model: AnalysisModel,
    ) -> Result<ThreatAssessment, AnalysisError> {
        self.require_non_empty(text)?;
        self.simulate_inference().await;

        let assessment = self.crime.assess(text, model);

        tracing::info!(
            model = model.id(),
            risk = assessment.risk_level.name(),
            confidence = assessment.confidence,
            "Analysis complete"
        );

        Ok(assessment)
    }

    /// Runs a news-authenticity check.
    ///
    /// Fails with [`AnalysisError::EmptyInput`] when `text` trims to empty.
    pub async fn verify(&self, text: &str) -> Result<NewsVerdict, AnalysisError> {
        self.require_non_empty(text)?;
        self.simulate_inference().await;

        let verdict = self.news.verify(text);

        tracing::info!(
            prediction = verdict.prediction.name(),
            confidence = verdict.confidence,
            "Verification complete"
        );

        Ok(verdict)
    }

    fn require_non_empty(&self, text: &str) -> Result<(), AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(())
    }

    /// Waits out the configured artificial latency.
    ///
    /// The wait always completes; there is no timeout or retry path.
    async fn simulate_inference(&self) {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
