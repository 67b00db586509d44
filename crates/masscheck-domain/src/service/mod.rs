//! Domain services

pub mod batch_evaluator;
pub mod case_evaluator;
pub mod chart;
pub mod mass_calculator;
pub mod report;

pub use batch_evaluator::{evaluate_all, evaluate_all_with_progress};
pub use case_evaluator::{evaluate_case, unity_check};
pub use chart::bar_chart;
pub use mass_calculator::{
    CalculationService, DelegatedService, LocalFormula, MassCalculator, NamedValues,
};
pub use report::generate_report;
