//! Domain layer: norms, cases, and the evaluation pipeline
//!
//! Cases flow one way through the pipeline:
//! `evaluate_all` -> `evaluate_case` (per case) -> `MassCalculator`.

pub mod model;
pub mod service;

pub use masscheck_types::{CalculationServiceError, CalculationStrategy, EvaluationError};
pub use model::{
    max_mass_for, BatchResult, Case, CaseResult, CaseStatus, ChartPoint, Norm, ParseNormError,
    StatusColor,
};
pub use service::{
    bar_chart, evaluate_all, evaluate_all_with_progress, evaluate_case, generate_report,
    CalculationService, DelegatedService, LocalFormula, MassCalculator, NamedValues,
};
