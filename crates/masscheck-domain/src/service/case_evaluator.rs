//! Evaluation of a single case

use masscheck_types::CalculationServiceError;
use tracing::debug;

use super::mass_calculator::MassCalculator;
use crate::model::{max_mass_for, Case, CaseResult, CaseStatus};

/// Mass as a percentage of the allowed maximum
pub fn unity_check(mass: f64, max_mass: f64) -> f64 {
    mass / max_mass * 100.0
}

/// Compute mass, unity check and status for one case
pub fn evaluate_case<C: MassCalculator + ?Sized>(
    case: &Case,
    calculator: &C,
) -> Result<CaseResult, CalculationServiceError> {
    let mass = calculator.compute_mass(case.volume, case.density)?;
    let max_mass = max_mass_for(case.norm);
    let unity_check = unity_check(mass, max_mass);
    let status = CaseStatus::from_unity_check(unity_check);

    debug!(
        norm = %case.norm,
        mass,
        unity_check,
        status = %status,
        "case evaluated"
    );

    Ok(CaseResult {
        case: *case,
        mass,
        max_mass,
        unity_check,
        status,
    })
}
