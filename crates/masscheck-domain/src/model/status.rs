//! Unity check classification

use serde::{Deserialize, Serialize};

/// Status of a single case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    /// Unity check <= 80%
    Success,
    /// 80% < unity check <= 100%
    Warning,
    /// Unity check > 100%
    Error,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 3] = [CaseStatus::Success, CaseStatus::Warning, CaseStatus::Error];

    /// Classify a unity check percentage. No tolerance is applied at the
    /// boundaries: exactly 100 is a warning and exactly 80 is a success.
    pub fn from_unity_check(unity_check: f64) -> Self {
        match unity_check {
            u if u > 100.0 => CaseStatus::Error,
            u if u > 80.0 => CaseStatus::Warning,
            _ => CaseStatus::Success,
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            CaseStatus::Success => StatusColor::Green,
            CaseStatus::Warning => StatusColor::Orange,
            CaseStatus::Error => StatusColor::Red,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Success => "success",
            CaseStatus::Warning => "warning",
            CaseStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Color token consumed by the chart renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Orange,
    Red,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Orange => "orange",
            StatusColor::Red => "red",
        }
    }
}

impl std::fmt::Display for StatusColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
