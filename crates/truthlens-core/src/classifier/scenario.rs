//! Predicted crime scenarios and their canned response playbooks.
//!
//! Scenario content is static product data: each scenario's probability,
//! severity, timeline, and response lists are fixed literals selected by the
//! winning category, never computed from the input.

use serde::{Deserialize, Serialize};

use super::{CrimeCategory, Severity};

/// A hypothetical unfolding of a detected category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Short description of the predicted scenario.
    pub description: String,
    /// Estimated probability (0-100).
    pub probability: u8,
    /// Severity grade of this scenario.
    pub severity: Severity,
    /// Expected timeline label, e.g. "0-24 hours".
    pub timeline: String,
    /// Recommended prevention measures.
    pub prevention_measures: Vec<String>,
    /// Recommended law-enforcement actions.
    pub enforcement_actions: Vec<String>,
}

impl Scenario {
    fn new(
        description: &str,
        probability: u8,
        severity: Severity,
        timeline: &str,
        prevention_measures: &[&str],
        enforcement_actions: &[&str],
    ) -> Self {
        Self {
            description: description.to_string(),
            probability,
            severity,
            timeline: timeline.to_string(),
            prevention_measures: prevention_measures.iter().map(|s| s.to_string()).collect(),
            enforcement_actions: enforcement_actions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Selects the scenario list for the given categories.
///
/// Precedence: Violence Threats, then Cybercrime, then the default. Only the
/// first matching branch contributes scenarios.
pub fn scenarios_for(categories: &[CrimeCategory]) -> Vec<Scenario> {
    if categories.contains(&CrimeCategory::ViolenceThreats) {
        violence_scenarios()
    } else if categories.contains(&CrimeCategory::Cybercrime) {
        cyber_scenarios()
    } else {
        default_scenarios()
    }
}

fn violence_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "Immediate physical threat execution",
            75,
            Severity::Critical,
            "0-24 hours",
            &[
                "Immediate law enforcement notification",
                "Target protection",
                "Location monitoring",
            ],
            &["Emergency response", "Suspect location", "Protective custody"],
        ),
        Scenario::new(
            "Planning phase for larger attack",
            60,
            Severity::Critical,
            "1-7 days",
            &[
                "Enhanced surveillance",
                "Digital monitoring",
                "Social network analysis",
            ],
            &[
                "Investigation team deployment",
                "Digital forensics",
                "Preemptive arrest",
            ],
        ),
    ]
}

fn cyber_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "Data breach attempt",
            80,
            Severity::High,
            "1-48 hours",
            &["System hardening", "Access monitoring", "Backup verification"],
            &[
                "Cyber unit investigation",
                "Digital evidence collection",
                "IP tracking",
            ],
        ),
        Scenario::new(
            "Identity theft operation",
            65,
            Severity::Medium,
            "1-30 days",
            &["Credit monitoring", "Identity protection", "Account security"],
            &[
                "Financial crime unit",
                "Cross-jurisdiction coordination",
                "Asset freezing",
            ],
        ),
    ]
}

fn default_scenarios() -> Vec<Scenario> {
    vec![Scenario::new(
        "Escalation to physical confrontation",
        40,
        Severity::Medium,
        "1-14 days",
        &["Platform moderation", "User education", "Reporting mechanisms"],
        &["Case documentation", "Restraining order", "Monitoring protocols"],
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violence_categories_get_two_critical_scenarios() {
        let scenarios = scenarios_for(&[
            CrimeCategory::ViolenceThreats,
            CrimeCategory::TerrorismPlanning,
        ]);
        assert_eq!(scenarios.len(), 2);
        assert!(scenarios.iter().all(|s| s.severity == Severity::Critical));
        assert_eq!(scenarios[0].probability, 75);
        assert_eq!(scenarios[1].probability, 60);
    }

    #[test]
    fn cyber_categories_get_breach_and_identity_scenarios() {
        let scenarios = scenarios_for(&[CrimeCategory::Cybercrime, CrimeCategory::IdentityTheft]);
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].description, "Data breach attempt");
        assert_eq!(scenarios[0].severity, Severity::High);
        assert_eq!(scenarios[1].severity, Severity::Medium);
        assert_eq!(scenarios[1].timeline, "1-30 days");
    }

    #[test]
    fn other_categories_get_single_default_scenario() {
        for categories in [
            vec![CrimeCategory::DrugRelated],
            vec![CrimeCategory::Fraud, CrimeCategory::FinancialCrimes],
            vec![CrimeCategory::HateCrimes],
            vec![CrimeCategory::SocialMediaHarassment],
        ] {
            let scenarios = scenarios_for(&categories);
            assert_eq!(scenarios.len(), 1);
            assert_eq!(scenarios[0].probability, 40);
            assert_eq!(scenarios[0].severity, Severity::Medium);
        }
    }

    #[test]
    fn violence_takes_precedence_over_cyber() {
        let scenarios = scenarios_for(&[
            CrimeCategory::ViolenceThreats,
            CrimeCategory::Cybercrime,
        ]);
        assert_eq!(scenarios[0].description, "Immediate physical threat execution");
    }

    #[test]
    fn scenario_lists_are_fully_populated() {
        let scenarios = scenarios_for(&[CrimeCategory::ViolenceThreats]);
        for s in scenarios {
            assert_eq!(s.prevention_measures.len(), 3);
            assert_eq!(s.enforcement_actions.len(), 3);
        }
    }

    #[test]
    fn scenario_round_trips_through_json() {
        let scenarios = scenarios_for(&[CrimeCategory::Cybercrime]);
        let json = serde_json::to_string(&scenarios).unwrap();
        let back: Vec<Scenario> = serde_json::from_str(&json).unwrap();
        assert_eq!(scenarios, back);
    }
}
