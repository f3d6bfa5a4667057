//! Rule-based text classification.
//!
//! Two classifiers share this module: the crime/threat assessor backed by the
//! ordered substring rule table, and the news-authenticity verdict check.

mod assessment;
mod category;
mod rules;
mod scenario;
mod verdict;

pub use assessment::{CrimeClassifier, ThreatAssessment};
pub use category::{CrimeCategory, RiskLevel, Severity};
pub use rules::{RuleGroup, RuleOutcome, RuleTable};
pub use scenario::{scenarios_for, Scenario};
pub use verdict::{
    Authenticity, ConfidenceJitter, FixedJitter, NewsClassifier, NewsVerdict, RandomJitter,
    Sentiment, CONFIDENCE_MAX, CONFIDENCE_MIN,
};
