//! Threat assessment assembly.
//!
//! Runs the rule table over the input, then derives the narrative fields and
//! attaches the canned insight lists. The narrative and insight content is
//! fixed product data keyed off the winning risk level and categories.

use serde::{Deserialize, Serialize};

use crate::model::AnalysisModel;

use super::scenario::{scenarios_for, Scenario};
use super::{CrimeCategory, RiskLevel, RuleTable};

/// Fixed location narrative attached to every assessment.
const LOCATION: &str = "Analysis suggests urban area based on language patterns";

const TIMEFRAME_CRITICAL: &str = "Immediate (0-24 hours)";
const TIMEFRAME_DEFAULT: &str = "Short-term (1-7 days)";

const MOTIVE_CRITICAL: &str = "Ideological extremism or personal vendetta";
const MOTIVE_DEFAULT: &str = "Financial gain or personal disputes";

const METHOD_CYBER: &str = "Digital platforms and social engineering";
const METHOD_DEFAULT: &str = "Direct physical action";

/// Prevention measures attached to every assessment regardless of category.
const PREVENTION: &[&str] = &[
    "Enhanced digital monitoring",
    "Community awareness programs",
    "Rapid response protocols",
    "Inter-agency coordination",
];

/// Digital-footprint findings attached to every assessment regardless of category.
const DIGITAL_FOOTPRINT: &[&str] = &[
    "Social media activity patterns analyzed",
    "Communication networks mapped",
    "Device and location data correlated",
    "Behavioral indicators identified",
];

/// Behavior patterns attached to every assessment regardless of category.
const BEHAVIOR_PATTERNS: &[&str] = &[
    "Escalating aggressive language",
    "Isolation from social groups",
    "Increased online activity",
    "Pattern matching with known cases",
];

/// Full result of analyzing one piece of text.
///
/// Created fresh per invocation; never cached or merged with prior results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatAssessment {
    /// The analyzed input text.
    pub text: String,
    /// The model credited with the analysis. Cosmetic only.
    pub model: AnalysisModel,
    /// Assigned categories in rule-priority order, never empty.
    pub categories: Vec<CrimeCategory>,
    /// Overall risk level.
    pub risk_level: RiskLevel,
    /// Confidence score (0-100).
    pub confidence: u8,
    /// Location narrative.
    pub location: String,
    /// Expected timeframe.
    pub timeframe: String,
    /// Probable motive.
    pub motive: String,
    /// Probable method.
    pub method: String,
    /// General prevention measures.
    pub prevention: Vec<String>,
    /// Predicted scenarios in precedence order.
    pub scenarios: Vec<Scenario>,
    /// Digital-footprint findings.
    pub digital_footprint: Vec<String>,
    /// Behavioral-pattern findings.
    pub behavior_patterns: Vec<String>,
}

impl ThreatAssessment {
    /// Returns true when the overall risk level is critical.
    pub fn is_critical(&self) -> bool {
        self.risk_level.is_critical()
    }
}

/// Crime/threat classifier: rule table plus narrative assembly.
#[derive(Debug, Clone, Default)]
pub struct CrimeClassifier {
    rules: RuleTable,
}

impl CrimeClassifier {
    /// Creates a classifier with the default rule table.
    pub fn new() -> Self {
        Self {
            rules: RuleTable::new(),
        }
    }

    /// Returns the underlying rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Produces a full assessment for `text`.
    ///
    /// Assumes non-empty input; the engine rejects blank text before calling.
    pub fn assess(&self, text: &str, model: AnalysisModel) -> ThreatAssessment {
        let outcome = self.rules.evaluate(text);

        let timeframe = if outcome.risk.is_critical() {
            TIMEFRAME_CRITICAL
        } else {
            TIMEFRAME_DEFAULT
        };
        let motive = if outcome.risk.is_critical() {
            MOTIVE_CRITICAL
        } else {
            MOTIVE_DEFAULT
        };
        let method = if outcome.categories.contains(&CrimeCategory::Cybercrime) {
            METHOD_CYBER
        } else {
            METHOD_DEFAULT
        };

        let scenarios = scenarios_for(&outcome.categories);

        tracing::debug!(
            group = outcome.group_id,
            risk = outcome.risk.name(),
            confidence = outcome.confidence,
            scenarios = scenarios.len(),
            "Assessment assembled"
        );

        ThreatAssessment {
            text: text.to_string(),
            model,
            categories: outcome.categories,
            risk_level: outcome.risk,
            confidence: outcome.confidence,
            location: LOCATION.to_string(),
            timeframe: timeframe.to_string(),
            motive: motive.to_string(),
            method: method.to_string(),
            prevention: PREVENTION.iter().map(|s| s.to_string()).collect(),
            scenarios,
            digital_footprint: DIGITAL_FOOTPRINT.iter().map(|s| s.to_string()).collect(),
            behavior_patterns: BEHAVIOR_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> CrimeClassifier {
        CrimeClassifier::new()
    }

    fn assess(text: &str) -> ThreatAssessment {
        classifier().assess(text, AnalysisModel::CrimePrediction)
    }

    #[test]
    fn violence_text_yields_critical_assessment() {
        let a = assess("they said they will bomb the building");
        assert_eq!(a.risk_level, RiskLevel::Critical);
        assert_eq!(a.confidence, 95);
        assert_eq!(
            a.categories,
            vec![
                CrimeCategory::ViolenceThreats,
                CrimeCategory::TerrorismPlanning
            ]
        );
        assert!(a.is_critical());
    }

    #[test]
    fn critical_assessment_gets_immediate_narrative() {
        let a = assess("attack planned");
        assert_eq!(a.timeframe, "Immediate (0-24 hours)");
        assert_eq!(a.motive, "Ideological extremism or personal vendetta");
        assert_eq!(a.method, "Direct physical action");
    }

    #[test]
    fn non_critical_assessment_gets_short_term_narrative() {
        let a = assess("running a scam on seniors");
        assert_eq!(a.timeframe, "Short-term (1-7 days)");
        assert_eq!(a.motive, "Financial gain or personal disputes");
    }

    #[test]
    fn cyber_assessment_gets_digital_method() {
        let a = assess("planning to hack the database");
        assert_eq!(a.method, "Digital platforms and social engineering");
        assert_eq!(a.scenarios.len(), 2);
        assert_eq!(a.scenarios[0].description, "Data breach attempt");
    }

    #[test]
    fn fallback_assessment_is_low_risk_harassment() {
        let a = assess("The weather is nice today");
        assert_eq!(
            a.categories,
            vec![CrimeCategory::SocialMediaHarassment]
        );
        assert_eq!(a.risk_level, RiskLevel::Low);
        assert_eq!(a.confidence, 65);
        assert_eq!(a.scenarios.len(), 1);
    }

    #[test]
    fn categories_never_empty() {
        for text in ["", "hello", "kill", "scam", "nothing suspicious here"] {
            assert!(!assess(text).categories.is_empty(), "text: {:?}", text);
        }
    }

    #[test]
    fn insight_lists_are_identical_across_categories() {
        let critical = assess("murder threat");
        let fallback = assess("just a normal post");
        assert_eq!(critical.prevention, fallback.prevention);
        assert_eq!(critical.digital_footprint, fallback.digital_footprint);
        assert_eq!(critical.behavior_patterns, fallback.behavior_patterns);
        assert_eq!(critical.location, fallback.location);
    }

    #[test]
    fn model_is_attached_but_does_not_change_outcome() {
        let c = classifier();
        let a = c.assess("hack attempt", AnalysisModel::Cybercrime);
        let b = c.assess("hack attempt", AnalysisModel::Sentiment);
        assert_eq!(a.model, AnalysisModel::Cybercrime);
        assert_eq!(b.model, AnalysisModel::Sentiment);
        assert_eq!(a.categories, b.categories);
        assert_eq!(a.risk_level, b.risk_level);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn identical_input_yields_identical_assessment() {
        let a = assess("breach the firewall");
        let b = assess("breach the firewall");
        assert_eq!(a, b);
    }

    #[test]
    fn assessment_round_trips_through_json() {
        let a = assess("they will shoot tomorrow");
        let json = serde_json::to_string(&a).unwrap();
        let back: ThreatAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
        // Scenario order survives the round trip.
        assert_eq!(
            back.scenarios[0].description,
            "Immediate physical threat execution"
        );
    }
}
