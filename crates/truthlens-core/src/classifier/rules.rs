//! Ordered substring rule table for crime classification.
//!
//! The rule table is an if/else-if cascade: groups are tested in priority
//! order against the lower-cased input and the first group with any matching
//! trigger wins. Later groups are skipped entirely. Matching is literal
//! substring containment, not word-boundary, so "skill" triggers the violence
//! group and "I hate Mondays" triggers the hate group. These are known
//! false-positives of the product and are part of its contract.

use super::{CrimeCategory, RiskLevel};

/// A single rule group: trigger substrings plus the outcome they produce.
#[derive(Debug, Clone, Copy)]
pub struct RuleGroup {
    /// Stable identifier for logging and tests.
    pub id: &'static str,
    /// Trigger substrings, matched against the lower-cased input.
    pub triggers: &'static [&'static str],
    /// Categories assigned when this group wins, in display order.
    pub categories: &'static [CrimeCategory],
    /// Risk level assigned when this group wins.
    pub risk: RiskLevel,
    /// Confidence score (0-100) assigned when this group wins.
    pub confidence: u8,
}

impl RuleGroup {
    /// Returns the first trigger contained in `text_lower`, if any.
    ///
    /// `text_lower` must already be lower-cased by the caller.
    pub fn first_match(&self, text_lower: &str) -> Option<&'static str> {
        self.triggers
            .iter()
            .copied()
            .find(|trigger| text_lower.contains(trigger))
    }
}

/// Outcome of running the rule table over one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Identifier of the group that fired, or "fallback".
    pub group_id: &'static str,
    /// Assigned categories, never empty.
    pub categories: Vec<CrimeCategory>,
    /// Assigned risk level.
    pub risk: RiskLevel,
    /// Assigned confidence (0-100).
    pub confidence: u8,
    /// The trigger substring that fired, None for the fallback.
    pub matched_trigger: Option<&'static str>,
}

/// The rule groups in priority order.
///
/// Note the "kill all" trigger in the hate group is unreachable: any text
/// containing it also contains "kill", which the violence group claims first.
/// It is kept as data so the table matches the product's published rules.
const RULE_GROUPS: &[RuleGroup] = &[
    RuleGroup {
        id: "violence",
        triggers: &["kill", "bomb", "attack", "destroy", "harm", "shoot", "murder"],
        categories: &[
            CrimeCategory::ViolenceThreats,
            CrimeCategory::TerrorismPlanning,
        ],
        risk: RiskLevel::Critical,
        confidence: 95,
    },
    RuleGroup {
        id: "cyber",
        triggers: &["hack", "breach", "steal data", "password", "ddos", "malware"],
        categories: &[CrimeCategory::Cybercrime, CrimeCategory::IdentityTheft],
        risk: RiskLevel::High,
        confidence: 88,
    },
    RuleGroup {
        id: "drug",
        triggers: &["sell drugs", "cocaine", "heroin", "meth", "deal"],
        categories: &[CrimeCategory::DrugRelated],
        risk: RiskLevel::High,
        confidence: 82,
    },
    RuleGroup {
        id: "fraud",
        triggers: &["scam", "fake id", "credit card", "stolen", "money laundering"],
        categories: &[CrimeCategory::Fraud, CrimeCategory::FinancialCrimes],
        risk: RiskLevel::Medium,
        confidence: 75,
    },
    RuleGroup {
        id: "hate",
        triggers: &["hate", "kill all"],
        categories: &[CrimeCategory::HateCrimes],
        risk: RiskLevel::High,
        confidence: 85,
    },
];

/// Fallback outcome when no group matches.
const FALLBACK_ID: &str = "fallback";
const FALLBACK_CATEGORIES: &[CrimeCategory] = &[CrimeCategory::SocialMediaHarassment];
const FALLBACK_RISK: RiskLevel = RiskLevel::Low;
const FALLBACK_CONFIDENCE: u8 = 65;

/// Substring rule-table classifier.
///
/// Stateless and cheap to clone; all rule data is static.
#[derive(Debug, Clone, Default)]
pub struct RuleTable;

impl RuleTable {
    /// Creates a rule table with the default groups.
    pub fn new() -> Self {
        Self
    }

    /// Returns the rule groups in evaluation order.
    ///
    /// Exposed so callers and tests can enumerate every rule independently.
    pub fn groups(&self) -> &'static [RuleGroup] {
        RULE_GROUPS
    }

    /// Evaluates the table against `text`, first match wins.
    pub fn evaluate(&self, text: &str) -> RuleOutcome {
        let text_lower = text.to_lowercase();

        for group in RULE_GROUPS {
            if let Some(trigger) = group.first_match(&text_lower) {
                return RuleOutcome {
                    group_id: group.id,
                    categories: group.categories.to_vec(),
                    risk: group.risk,
                    confidence: group.confidence,
                    matched_trigger: Some(trigger),
                };
            }
        }

        RuleOutcome {
            group_id: FALLBACK_ID,
            categories: FALLBACK_CATEGORIES.to_vec(),
            risk: FALLBACK_RISK,
            confidence: FALLBACK_CONFIDENCE,
            matched_trigger: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::new()
    }

    // === Per-group tests ===

    #[test]
    fn violence_group_fires_on_each_trigger() {
        for trigger in ["kill", "bomb", "attack", "destroy", "harm", "shoot", "murder"] {
            let outcome = table().evaluate(&format!("they plan to {} tomorrow", trigger));
            assert_eq!(outcome.group_id, "violence", "trigger: {}", trigger);
            assert_eq!(outcome.risk, RiskLevel::Critical);
            assert_eq!(outcome.confidence, 95);
            assert_eq!(
                outcome.categories,
                vec![
                    CrimeCategory::ViolenceThreats,
                    CrimeCategory::TerrorismPlanning
                ]
            );
        }
    }

    #[test]
    fn cyber_group_fires() {
        let outcome = table().evaluate("someone tried to hack the server");
        assert_eq!(outcome.group_id, "cyber");
        assert_eq!(outcome.risk, RiskLevel::High);
        assert_eq!(outcome.confidence, 88);
        assert_eq!(
            outcome.categories,
            vec![CrimeCategory::Cybercrime, CrimeCategory::IdentityTheft]
        );
    }

    #[test]
    fn drug_group_fires() {
        let outcome = table().evaluate("looking to sell drugs downtown");
        assert_eq!(outcome.group_id, "drug");
        assert_eq!(outcome.categories, vec![CrimeCategory::DrugRelated]);
        assert_eq!(outcome.confidence, 82);
    }

    #[test]
    fn fraud_group_fires() {
        let outcome = table().evaluate("this is a scam operation");
        assert_eq!(outcome.group_id, "fraud");
        assert_eq!(outcome.risk, RiskLevel::Medium);
        assert_eq!(outcome.confidence, 75);
    }

    #[test]
    fn hate_group_fires() {
        let outcome = table().evaluate("so much hate in that thread");
        assert_eq!(outcome.group_id, "hate");
        assert_eq!(outcome.categories, vec![CrimeCategory::HateCrimes]);
        assert_eq!(outcome.confidence, 85);
    }

    #[test]
    fn fallback_when_nothing_matches() {
        let outcome = table().evaluate("The weather is nice today");
        assert_eq!(outcome.group_id, "fallback");
        assert_eq!(
            outcome.categories,
            vec![CrimeCategory::SocialMediaHarassment]
        );
        assert_eq!(outcome.risk, RiskLevel::Low);
        assert_eq!(outcome.confidence, 65);
        assert!(outcome.matched_trigger.is_none());
    }

    // === Priority order ===

    #[test]
    fn violence_wins_over_cyber() {
        let outcome = table().evaluate("hack the grid and bomb the station");
        assert_eq!(outcome.group_id, "violence");
        assert_eq!(outcome.confidence, 95);
    }

    #[test]
    fn cyber_wins_over_fraud() {
        let outcome = table().evaluate("hack accounts and run a scam");
        assert_eq!(outcome.group_id, "cyber");
        assert_eq!(
            outcome.categories,
            vec![CrimeCategory::Cybercrime, CrimeCategory::IdentityTheft]
        );
    }

    #[test]
    fn kill_all_is_claimed_by_violence_not_hate() {
        // "kill all" contains "kill", so the violence group always wins.
        let outcome = table().evaluate("kill all of them");
        assert_eq!(outcome.group_id, "violence");
    }

    // === Substring semantics (documented false-positives) ===

    #[test]
    fn substring_match_skill_triggers_violence() {
        let outcome = table().evaluate("I want to improve my cooking skill");
        assert_eq!(outcome.group_id, "violence");
        assert_eq!(outcome.matched_trigger, Some("kill"));
    }

    #[test]
    fn hate_mondays_is_flagged() {
        let outcome = table().evaluate("I hate Mondays");
        assert_eq!(outcome.group_id, "hate");
        assert_eq!(outcome.risk, RiskLevel::High);
        assert_eq!(outcome.confidence, 85);
    }

    #[test]
    fn dealing_triggers_drug_group() {
        let outcome = table().evaluate("dealing with a difficult customer");
        assert_eq!(outcome.group_id, "drug");
    }

    // === Case insensitivity ===

    #[test]
    fn matching_is_case_insensitive() {
        let outcome = table().evaluate("THEY WILL ATTACK AT DAWN");
        assert_eq!(outcome.group_id, "violence");

        let outcome = table().evaluate("Malware found on the laptop");
        assert_eq!(outcome.group_id, "cyber");
    }

    // === Table shape ===

    #[test]
    fn groups_are_enumerable_in_priority_order() {
        let ids: Vec<&str> = table().groups().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["violence", "cyber", "drug", "fraud", "hate"]);
    }

    #[test]
    fn every_group_assigns_at_least_one_category() {
        for group in table().groups() {
            assert!(!group.categories.is_empty(), "group: {}", group.id);
            assert!(!group.triggers.is_empty(), "group: {}", group.id);
        }
    }

    #[test]
    fn outcome_reports_matched_trigger() {
        let outcome = table().evaluate("password leaked on a forum");
        assert_eq!(outcome.matched_trigger, Some("password"));
    }

    #[test]
    fn idempotent_for_identical_input() {
        let a = table().evaluate("planning a breach");
        let b = table().evaluate("planning a breach");
        assert_eq!(a, b);
    }
}
