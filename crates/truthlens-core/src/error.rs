//! Core error types.

use thiserror::Error;

/// Errors from the analysis engine.
///
/// The only failing input is blank text; every other input is handled by the
/// classifier's fallback branch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Input was empty or whitespace-only after trimming.
    #[error("input text is empty")]
    EmptyInput,
}
