//! Infrastructure layer - case file loaders and the command-backed calculation service

pub mod calculation_service;
pub mod case_loader;

pub use calculation_service::CommandCalculationService;
pub use case_loader::{load_cases, CaseLoaderError};
