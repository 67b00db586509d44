//! Plain-text evaluation report

use crate::model::result::case_label;
use crate::model::{BatchResult, CaseStatus};

pub fn generate_report(batch: &BatchResult) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("               Unity Check Report                 \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Cases:     {}\n", batch.len()));
    report.push_str(&format!("  Success:   {}\n", batch.count(CaseStatus::Success)));
    report.push_str(&format!("  Warning:   {}\n", batch.count(CaseStatus::Warning)));
    report.push_str(&format!("  Error:     {}\n", batch.count(CaseStatus::Error)));
    report.push('\n');

    report.push_str("[Cases]\n");
    report.push_str("-".repeat(76).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<9} {:>10} {:>13} {:>10} {:>5} {:>10} {:>8} {:<8}\n",
        "Case", "Volume", "Density", "Mass", "Norm", "Max", "UC", "Status"
    ));
    report.push_str("-".repeat(76).as_str());
    report.push('\n');
    for (idx, result) in batch.results.iter().enumerate() {
        report.push_str(&format!(
            "{:<9} {:>7.2} m³ {:>6.0} kg/m³ {:>7.1} kg {:>5} {:>7.0} kg {:>7.0}% {:<8}\n",
            case_label(idx),
            result.case.volume,
            result.case.density,
            result.mass,
            result.case.norm.code(),
            result.max_mass,
            result.unity_check,
            result.status.label()
        ));
    }
    report.push('\n');

    match batch.worst_status() {
        Some(CaseStatus::Error) => {
            report.push_str("At least one case exceeds the maximum mass of its norm.\n\n")
        }
        Some(CaseStatus::Warning) => {
            report.push_str("All cases are within limits; some are above 80%.\n\n")
        }
        _ => report.push_str("All cases are within limits.\n\n"),
    }

    report.push_str("==================================================\n");
    report
}
