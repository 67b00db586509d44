//! Evaluation results

use serde::{Deserialize, Serialize};

use super::case::Case;
use super::status::{CaseStatus, StatusColor};

/// Result of evaluating one case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseResult {
    #[serde(flatten)]
    pub case: Case,
    /// Computed mass (kg)
    pub mass: f64,
    /// Maximum mass allowed by the case's norm (kg)
    pub max_mass: f64,
    /// mass / max_mass * 100
    pub unity_check: f64,
    pub status: CaseStatus,
}

/// One bar of the unity check chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// "Case 1", "Case 2", ...
    pub label: String,
    pub unity_check: f64,
    pub color: StatusColor,
}

/// Results of a whole batch, index-aligned with the input cases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub results: Vec<CaseResult>,
    pub series: Vec<ChartPoint>,
}

impl BatchResult {
    pub(crate) fn from_results(results: Vec<CaseResult>) -> Self {
        let series = results
            .iter()
            .enumerate()
            .map(|(idx, result)| ChartPoint {
                label: case_label(idx),
                unity_check: result.unity_check,
                color: result.status.color(),
            })
            .collect();
        Self { results, series }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn count(&self, status: CaseStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// Most severe status in the batch
    pub fn worst_status(&self) -> Option<CaseStatus> {
        if self.count(CaseStatus::Error) > 0 {
            Some(CaseStatus::Error)
        } else if self.count(CaseStatus::Warning) > 0 {
            Some(CaseStatus::Warning)
        } else if self.is_empty() {
            None
        } else {
            Some(CaseStatus::Success)
        }
    }
}

/// 1-based display label for the case at `idx`
pub fn case_label(idx: usize) -> String {
    format!("Case {}", idx + 1)
}
