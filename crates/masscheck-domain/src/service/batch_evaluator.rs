//! Evaluation of a whole batch of cases

use masscheck_types::EvaluationError;
use tracing::{debug, warn};

use super::case_evaluator::evaluate_case;
use super::mass_calculator::MassCalculator;
use crate::model::{BatchResult, Case};

/// Evaluate every case in order.
///
/// Fails with [`EvaluationError::EmptyBatch`] before doing any work if
/// `cases` is empty. The first calculation failure aborts the batch and no
/// partial result is returned.
pub fn evaluate_all<C: MassCalculator + ?Sized>(
    cases: &[Case],
    calculator: &C,
) -> Result<BatchResult, EvaluationError> {
    evaluate_all_with_progress(cases, calculator, |_, _| {})
}

/// Same as [`evaluate_all`], calling `progress(done, total)` after each case
pub fn evaluate_all_with_progress<C, F>(
    cases: &[Case],
    calculator: &C,
    mut progress: F,
) -> Result<BatchResult, EvaluationError>
where
    C: MassCalculator + ?Sized,
    F: FnMut(usize, usize),
{
    if cases.is_empty() {
        return Err(EvaluationError::EmptyBatch);
    }

    let total = cases.len();
    debug!(total, strategy = %calculator.strategy(), "evaluating batch");

    let mut results = Vec::with_capacity(total);
    for (idx, case) in cases.iter().enumerate() {
        let result = evaluate_case(case, calculator).map_err(|err| {
            warn!(case = idx + 1, error = %err, "calculation failed, aborting batch");
            err
        })?;
        results.push(result);
        progress(idx + 1, total);
    }

    Ok(BatchResult::from_results(results))
}
