//! Evaluation Service - core use case
//!
//! 1. Load cases from a file
//! 2. Build the mass calculator for the chosen strategy
//! 3. Evaluate the batch (fail-fast, no partial results)
//! 4. Stamp the result so it can be saved and exported later

use chrono::{DateTime, Utc};
use masscheck_domain::{
    evaluate_all_with_progress, BatchResult, CalculationStrategy, Case, DelegatedService,
    LocalFormula, MassCalculator,
};
use masscheck_infra::{load_cases, CommandCalculationService};
use masscheck_types::{ConfigError, Error, EvaluationError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::config::Config;

/// A finished evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub evaluated_at: DateTime<Utc>,
    pub strategy: CalculationStrategy,
    #[serde(flatten)]
    pub batch: BatchResult,
}

/// Build the calculator for `strategy`.
///
/// The delegated strategy needs `calculation_command` in the config.
pub fn build_calculator(
    strategy: CalculationStrategy,
    config: &Config,
) -> Result<Box<dyn MassCalculator>> {
    match strategy {
        CalculationStrategy::Local => Ok(Box::new(LocalFormula)),
        CalculationStrategy::Delegated => {
            let command = config
                .calculation_command()
                .ok_or(ConfigError::MissingCalculationCommand)?;
            let service = CommandCalculationService::from_command_line(command)?;
            Ok(Box::new(DelegatedService::new(service)))
        }
    }
}

/// Evaluate already-loaded cases
pub fn evaluate_cases<F>(
    cases: &[Case],
    calculator: &dyn MassCalculator,
    progress: F,
) -> Result<Evaluation>
where
    F: FnMut(usize, usize),
{
    let batch = evaluate_all_with_progress(cases, calculator, progress)?;
    Ok(Evaluation {
        evaluated_at: Utc::now(),
        strategy: calculator.strategy(),
        batch,
    })
}

/// Load cases from `path` and evaluate them with `strategy`
pub fn evaluate_file<F>(
    path: &Path,
    strategy: CalculationStrategy,
    config: &Config,
    progress: F,
) -> Result<Evaluation>
where
    F: FnMut(usize, usize),
{
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Case file not found: {}",
            path.display()
        )));
    }

    let cases = load_cases(path)?;
    // Empty batches fail the same way for every strategy, configured or not
    if cases.is_empty() {
        return Err(EvaluationError::EmptyBatch.into());
    }
    let calculator = build_calculator(strategy, config)?;
    let evaluation = evaluate_cases(&cases, calculator.as_ref(), progress)?;

    info!(
        cases = evaluation.batch.len(),
        strategy = %evaluation.strategy,
        "evaluation finished"
    );
    Ok(evaluation)
}

pub fn save_evaluation(evaluation: &Evaluation, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(evaluation)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_evaluation(path: &Path) -> Result<Evaluation> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
