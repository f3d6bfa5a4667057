//! Crime categories and severity grades for text analysis.

use serde::{Deserialize, Serialize};

/// Crime and content-type categories that analyzed text can be labeled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrimeCategory {
    /// Direct threats of physical violence.
    ViolenceThreats,
    /// Indicators of planned large-scale attacks.
    TerrorismPlanning,
    /// Hacking, breaches, and other computer crime.
    Cybercrime,
    /// Theft or misuse of personal identity data.
    IdentityTheft,
    /// Drug trafficking or distribution.
    DrugRelated,
    /// Scams and deception for gain.
    Fraud,
    /// Financial crimes such as money laundering.
    FinancialCrimes,
    /// Hate speech or bias-motivated crime.
    HateCrimes,
    /// Harassment conducted over social platforms.
    SocialMediaHarassment,
}

impl CrimeCategory {
    /// Returns all category variants.
    pub fn all() -> &'static [CrimeCategory] {
        &[
            CrimeCategory::ViolenceThreats,
            CrimeCategory::TerrorismPlanning,
            CrimeCategory::Cybercrime,
            CrimeCategory::IdentityTheft,
            CrimeCategory::DrugRelated,
            CrimeCategory::Fraud,
            CrimeCategory::FinancialCrimes,
            CrimeCategory::HateCrimes,
            CrimeCategory::SocialMediaHarassment,
        ]
    }

    /// Returns the human-readable label for this category.
    pub fn name(&self) -> &'static str {
        match self {
            CrimeCategory::ViolenceThreats => "Violence Threats",
            CrimeCategory::TerrorismPlanning => "Terrorism Planning",
            CrimeCategory::Cybercrime => "Cybercrime",
            CrimeCategory::IdentityTheft => "Identity Theft",
            CrimeCategory::DrugRelated => "Drug Related",
            CrimeCategory::Fraud => "Fraud",
            CrimeCategory::FinancialCrimes => "Financial Crimes",
            CrimeCategory::HateCrimes => "Hate Crimes",
            CrimeCategory::SocialMediaHarassment => "Social Media Harassment",
        }
    }
}

/// Overall risk level attached to an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Low risk, routine monitoring.
    Low,
    /// Elevated risk, review recommended.
    Medium,
    /// High risk, active attention required.
    High,
    /// Critical risk, immediate response.
    Critical,
}

impl RiskLevel {
    /// Returns a human-readable name for this risk level.
    pub fn name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Returns true for the critical level.
    pub fn is_critical(&self) -> bool {
        matches!(self, RiskLevel::Critical)
    }
}

/// Severity grade of an individual predicted scenario.
///
/// Distinct from [`RiskLevel`]: severity describes one hypothetical scenario,
/// risk describes the assessment as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Returns a human-readable name for this severity.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_all_returns_all_variants() {
        assert_eq!(CrimeCategory::all().len(), 9);
    }

    #[test]
    fn category_names_match_display_labels() {
        assert_eq!(CrimeCategory::ViolenceThreats.name(), "Violence Threats");
        assert_eq!(
            CrimeCategory::SocialMediaHarassment.name(),
            "Social Media Harassment"
        );
    }

    #[test]
    fn risk_level_ordering() {
        assert!(RiskLevel::Critical > RiskLevel::High);
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
    }

    #[test]
    fn risk_level_is_critical() {
        assert!(RiskLevel::Critical.is_critical());
        assert!(!RiskLevel::High.is_critical());
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&CrimeCategory::ViolenceThreats).unwrap(),
            "\"violence_threats\""
        );
        assert_eq!(
            serde_json::to_string(&RiskLevel::Critical).unwrap(),
            "\"critical\""
        );
    }

    #[test]
    fn severity_round_trips() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::High);
    }
}
