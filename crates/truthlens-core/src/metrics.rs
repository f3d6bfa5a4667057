//! Static model-performance metrics.
//!
//! The dashboard's numbers are fixed product data: there is no live model to
//! measure, so every report is the same canned snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classifier::Authenticity;

/// Headline metrics shown on the dashboard tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineMetrics {
    pub accuracy: f32,
    pub precision: f32,
    pub recall: f32,
    pub f1_score: f32,
}

/// One row of the per-class classification report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassReport {
    pub label: String,
    pub precision: f32,
    pub recall: f32,
    pub f1: f32,
    pub support: u32,
}

/// One row of the recent-predictions feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentPrediction {
    pub id: u32,
    pub text: String,
    pub prediction: Authenticity,
    pub confidence: u8,
    pub timestamp: chrono::NaiveDateTime,
}

/// Complete metrics snapshot served to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetricsReport {
    pub headline: HeadlineMetrics,
    pub predictions_today: u32,
    pub fake_detected: u32,
    pub auc: f32,
    /// Rows are actual class, columns predicted class: [real, fake].
    pub confusion_matrix: [[u32; 2]; 2],
    pub class_report: Vec<ClassReport>,
    pub recent_predictions: Vec<RecentPrediction>,
}

impl ModelMetricsReport {
    /// Returns the canned metrics snapshot.
    pub fn snapshot() -> Self {
        Self {
            headline: HeadlineMetrics {
                accuracy: 94.2,
                precision: 92.8,
                recall: 91.5,
                f1_score: 92.1,
            },
            predictions_today: 2847,
            fake_detected: 1203,
            auc: 0.96,
            confusion_matrix: [[850, 45], [32, 873]],
            class_report: vec![
                ClassReport {
                    label: "Real News".to_string(),
                    precision: 0.964,
                    recall: 0.965,
                    f1: 0.964,
                    support: 895,
                },
                ClassReport {
                    label: "Fake News".to_string(),
                    precision: 0.951,
                    recall: 0.950,
                    f1: 0.951,
                    support: 905,
                },
            ],
            recent_predictions: recent_predictions(),
        }
    }
}

fn recent_predictions() -> Vec<RecentPrediction> {
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    let at = |h, m| day.and_hms_opt(h, m, 0).expect("valid time");

    vec![
        RecentPrediction {
            id: 1,
            text: "Climate change report shows record temperatures...".to_string(),
            prediction: Authenticity::Real,
            confidence: 94,
            timestamp: at(14, 30),
        },
        RecentPrediction {
            id: 2,
            text: "SHOCKING: Celebrity scandal rocks entertainment...".to_string(),
            prediction: Authenticity::Fake,
            confidence: 87,
            timestamp: at(14, 25),
        },
        RecentPrediction {
            id: 3,
            text: "New medical breakthrough announced by researchers...".to_string(),
            prediction: Authenticity::Real,
            confidence: 91,
            timestamp: at(14, 20),
        },
        RecentPrediction {
            id: 4,
            text: "URGENT: Government conspiracy revealed!!!".to_string(),
            prediction: Authenticity::Fake,
            confidence: 96,
            timestamp: at(14, 15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_stable() {
        assert_eq!(ModelMetricsReport::snapshot(), ModelMetricsReport::snapshot());
    }

    #[test]
    fn headline_values() {
        let m = ModelMetricsReport::snapshot().headline;
        assert_eq!(m.accuracy, 94.2);
        assert_eq!(m.precision, 92.8);
        assert_eq!(m.recall, 91.5);
        assert_eq!(m.f1_score, 92.1);
    }

    #[test]
    fn confusion_matrix_totals_match_support() {
        let m = ModelMetricsReport::snapshot();
        let real_total: u32 = m.confusion_matrix[0].iter().sum();
        let fake_total: u32 = m.confusion_matrix[1].iter().sum();
        assert_eq!(real_total, m.class_report[0].support);
        assert_eq!(fake_total, m.class_report[1].support);
    }

    #[test]
    fn recent_predictions_are_newest_first() {
        let rows = ModelMetricsReport::snapshot().recent_predictions;
        assert_eq!(rows.len(), 4);
        for pair in rows.windows(2) {
            assert!(pair[0].timestamp > pair[1].timestamp);
        }
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let m = ModelMetricsReport::snapshot();
        let json = serde_json::to_string(&m).unwrap();
        let back: ModelMetricsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
