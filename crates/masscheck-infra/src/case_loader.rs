//! Case file loaders
//!
//! The format is picked from the file extension:
//! - `.csv`  with a `volume,density,norm` header (any column order)
//! - `.json` as an array of cases or `{"cases": [...]}`
//! - `.toml` as `[[cases]]` tables
//!
//! CSV rows are numbered by file line (header is line 1). JSON and TOML
//! rows are numbered by position in the case list, starting at 1.

use std::path::Path;

use masscheck_domain::{Case, Norm, ParseNormError};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CaseLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid number format in row {row}, column {column}: '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid norm in row {row}: {error}")]
    InvalidNorm { row: usize, error: ParseNormError },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Missing field '{field}' in row {row}")]
    MissingField { row: usize, field: String },

    #[error("Expected a list of cases or an object with a \"cases\" list")]
    MissingCaseList,

    #[error("Unsupported case file format: {0} (expected .csv, .json or .toml)")]
    UnsupportedFormat(String),
}

impl From<CaseLoaderError> for masscheck_types::Error {
    fn from(err: CaseLoaderError) -> Self {
        match err {
            CaseLoaderError::IoError(e) => masscheck_types::Error::Io(e),
            other => masscheck_types::Error::CaseFile(other.to_string()),
        }
    }
}

/// Load cases from a CSV, JSON or TOML file
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<Case>, CaseLoaderError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let content = std::fs::read_to_string(path)?;
    let cases = match extension.as_str() {
        "csv" => parse_cases_csv(&content)?,
        "json" => parse_cases_json(&content)?,
        "toml" => parse_cases_toml(&content)?,
        _ => return Err(CaseLoaderError::UnsupportedFormat(path.display().to_string())),
    };

    debug!(path = %path.display(), count = cases.len(), "loaded cases");
    warn_on_negative_inputs(&cases);
    Ok(cases)
}

pub fn parse_cases_csv(content: &str) -> Result<Vec<Case>, CaseLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let volume_col = find_column(&headers, "volume")?;
    let density_col = find_column(&headers, "density")?;
    let norm_col = find_column(&headers, "norm")?;

    let mut cases = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(row_idx + 2);

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let volume = parse_f64(record.get(volume_col).unwrap_or(""), row_num, "volume")?;
        let density = parse_f64(record.get(density_col).unwrap_or(""), row_num, "density")?;
        let norm: Norm = record
            .get(norm_col)
            .unwrap_or("")
            .parse()
            .map_err(|error| CaseLoaderError::InvalidNorm {
                row: row_num,
                error,
            })?;

        cases.push(Case::new(volume, density, norm));
    }

    Ok(cases)
}

pub fn parse_cases_json(content: &str) -> Result<Vec<Case>, CaseLoaderError> {
    let entries = match serde_json::from_str::<Value>(content)? {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("cases") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(CaseLoaderError::MissingCaseList),
        },
        _ => return Err(CaseLoaderError::MissingCaseList),
    };

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| case_from_value(entry, idx + 1))
        .collect()
}

pub fn parse_cases_toml(content: &str) -> Result<Vec<Case>, CaseLoaderError> {
    let table: toml::Table = toml::from_str(content)?;
    let entries = match table.get("cases") {
        None => return Ok(Vec::new()),
        Some(toml::Value::Array(entries)) => entries,
        Some(_) => return Err(CaseLoaderError::MissingCaseList),
    };

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| case_from_value(&serde_json::to_value(entry)?, idx + 1))
        .collect()
}

/// Build one case from a JSON-like table; `row` is only used in errors
fn case_from_value(entry: &Value, row: usize) -> Result<Case, CaseLoaderError> {
    let volume = number_field(entry, row, "volume")?;
    let density = number_field(entry, row, "density")?;
    let norm: Norm = match entry.get("norm") {
        Some(Value::String(code)) => code
            .parse()
            .map_err(|error| CaseLoaderError::InvalidNorm { row, error })?,
        Some(other) => {
            return Err(CaseLoaderError::InvalidNorm {
                row,
                error: ParseNormError(other.to_string()),
            })
        }
        None => return Err(missing_field(row, "norm")),
    };

    Ok(Case::new(volume, density, norm))
}

fn number_field(entry: &Value, row: usize, field: &str) -> Result<f64, CaseLoaderError> {
    let value = entry.get(field).ok_or_else(|| missing_field(row, field))?;
    value.as_f64().ok_or_else(|| CaseLoaderError::InvalidNumber {
        row,
        column: field.to_string(),
        value: value.to_string(),
    })
}

fn missing_field(row: usize, field: &str) -> CaseLoaderError {
    CaseLoaderError::MissingField {
        row,
        field: field.to_string(),
    }
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, CaseLoaderError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| CaseLoaderError::MissingColumn(name.to_string()))
}

fn parse_f64(s: &str, row: usize, column: &str) -> Result<f64, CaseLoaderError> {
    s.trim().parse().map_err(|_| CaseLoaderError::InvalidNumber {
        row,
        column: column.to_string(),
        value: s.to_string(),
    })
}

// Range checks belong to whoever edits the cases; only flag them here.
fn warn_on_negative_inputs(cases: &[Case]) {
    for (idx, case) in cases.iter().enumerate() {
        if case.volume < 0.0 || case.density < 0.0 {
            warn!(
                case = idx + 1,
                volume = case.volume,
                density = case.density,
                "negative volume or density"
            );
        }
    }
}
