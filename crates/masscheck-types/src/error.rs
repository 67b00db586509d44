//! Error types for masscheck

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("No calculation command configured for the delegated strategy")]
    MissingCalculationCommand,
}

/// Failures of the delegated calculation service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationServiceError {
    #[error("Calculation service unreachable: {0}")]
    Unreachable(String),

    #[error("Calculation service failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Malformed calculation response: {0}")]
    MalformedResponse(String),

    #[error("Calculation response is missing named value '{0}'")]
    MissingValue(String),
}

/// Errors raised while evaluating a batch of cases
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Add at least 1 case.")]
    EmptyBatch,

    #[error(transparent)]
    CalculationService(#[from] CalculationServiceError),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Case file error: {0}")]
    CaseFile(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

impl From<CalculationServiceError> for Error {
    fn from(err: CalculationServiceError) -> Self {
        Error::Evaluation(EvaluationError::CalculationService(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
