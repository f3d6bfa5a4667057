//! Application state for the API server.

use std::sync::Arc;

use truthlens_core::{AnalysisEngine, EngineConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The analysis engine. Stateless, so a shared reference is enough.
    pub engine: Arc<AnalysisEngine>,
}

impl AppState {
    /// Creates state around an existing engine.
    pub fn new(engine: AnalysisEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Creates state with a zero-latency engine, for tests.
    pub fn instant() -> Self {
        Self::new(AnalysisEngine::new(EngineConfig::instant()))
    }
}
