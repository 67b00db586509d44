//! Calculation service backed by an external command.
//!
//! The command receives the named inputs as a JSON object on stdin, e.g.
//! `{"density": 1000.0, "volume": 0.3}`, and must print a JSON object of named
//! numeric outputs on stdout, e.g. `{"mass": 300.0}`. Anything printed around
//! the object is ignored.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use masscheck_domain::{CalculationService, NamedValues};
use masscheck_types::CalculationServiceError;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CommandCalculationService {
    program: String,
    args: Vec<String>,
}

impl CommandCalculationService {
    /// Build from a shell-style command line such as `python3 calc.py --sheet mass.xlsx`
    pub fn from_command_line(command_line: &str) -> Result<Self, CalculationServiceError> {
        let mut parts = shell_words::split(command_line).map_err(|e| {
            CalculationServiceError::Unreachable(format!(
                "invalid calculation command '{}': {}",
                command_line, e
            ))
        })?;
        if parts.is_empty() {
            return Err(CalculationServiceError::Unreachable(
                "calculation command is empty".to_string(),
            ));
        }

        let program = parts.remove(0);
        Ok(Self {
            program,
            args: parts,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl CalculationService for CommandCalculationService {
    fn evaluate(&self, inputs: &NamedValues) -> Result<NamedValues, CalculationServiceError> {
        let request = serde_json::to_string(inputs).map_err(|e| {
            CalculationServiceError::Unreachable(format!("failed to encode request: {}", e))
        })?;

        debug!(program = %self.program, args = ?self.args, %request, "running calculation command");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                CalculationServiceError::Unreachable(format!("{}: {}", self.program, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A command that ignores its input may exit before we finish writing.
            if let Err(e) = stdin.write_all(request.as_bytes()) {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(CalculationServiceError::Unreachable(format!(
                        "failed to write request to {}: {}",
                        self.program, e
                    )));
                }
            }
        }

        let output = child.wait_with_output().map_err(|e| {
            CalculationServiceError::Unreachable(format!("{}: {}", self.program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CalculationServiceError::Failed {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!(response = %stdout.trim(), "calculation command finished");
        parse_outputs(&stdout)
    }
}

/// Parse the named numeric outputs from a command response
pub fn parse_outputs(response: &str) -> Result<NamedValues, CalculationServiceError> {
    let json = extract_json_object(response).ok_or_else(|| {
        CalculationServiceError::MalformedResponse(format!(
            "no JSON object in response: '{}'",
            truncate(response.trim(), 80)
        ))
    })?;

    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| CalculationServiceError::MalformedResponse(e.to_string()))?;
    let object = value.as_object().ok_or_else(|| {
        CalculationServiceError::MalformedResponse("response is not a JSON object".to_string())
    })?;

    let mut outputs = NamedValues::new();
    for (name, value) in object {
        match value.as_f64() {
            Some(number) => {
                outputs.insert(name.clone(), number);
            }
            None => debug!(name = %name, "skipping non-numeric output"),
        }
    }
    Ok(outputs)
}

fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end > start {
        Some(&response[start..=end])
    } else {
        None
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masscheck_domain::{DelegatedService, MassCalculator};

    #[test]
    fn test_parse_outputs() {
        let outputs = parse_outputs("calc v1\n{\"mass\": 300.0, \"unit\": \"kg\"}\n").unwrap();
        assert_eq!(outputs.get("mass"), Some(&300.0));
        assert!(!outputs.contains_key("unit"));
    }

    #[test]
    fn test_parse_outputs_malformed() {
        assert!(matches!(
            parse_outputs("error: sheet not found"),
            Err(CalculationServiceError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_outputs("{mass: }"),
            Err(CalculationServiceError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_empty_command_rejected() {
        assert!(CommandCalculationService::from_command_line("  ").is_err());
        assert!(CommandCalculationService::from_command_line("calc 'unterminated").is_err());
    }

    #[test]
    fn test_split_command_line() {
        let service =
            CommandCalculationService::from_command_line("python3 'my calc.py' --sheet mass.xlsx")
                .unwrap();
        assert_eq!(service.program(), "python3");
        assert_eq!(service.args, vec!["my calc.py", "--sheet", "mass.xlsx"]);
    }

    #[test]
    fn test_missing_program_is_unreachable() {
        let service =
            CommandCalculationService::from_command_line("masscheck-no-such-calculator-program")
                .unwrap();
        assert!(matches!(
            service.evaluate(&NamedValues::new()),
            Err(CalculationServiceError::Unreachable(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_returns_mass() {
        let service = CommandCalculationService::from_command_line(
            r#"sh -c 'cat >/dev/null; echo "{\"mass\": 42.5}"'"#,
        )
        .unwrap();
        let calc = DelegatedService::new(service);
        assert_eq!(calc.compute_mass(0.1, 425.0).unwrap(), 42.5);
    }

    #[cfg(unix)]
    #[test]
    fn test_command_receives_named_inputs() {
        // `cat` echoes the request back, which has no `mass`
        let service = CommandCalculationService::from_command_line("cat").unwrap();
        let mut inputs = NamedValues::new();
        inputs.insert("volume".to_string(), 0.5);
        inputs.insert("density".to_string(), 900.0);
        assert_eq!(service.evaluate(&inputs).unwrap(), inputs);

        let calc = DelegatedService::new(service);
        assert_eq!(
            calc.compute_mass(0.5, 900.0),
            Err(CalculationServiceError::MissingValue("mass".to_string()))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_command_failure() {
        let service =
            CommandCalculationService::from_command_line("sh -c 'echo boom >&2; exit 3'").unwrap();
        match service.evaluate(&NamedValues::new()) {
            Err(CalculationServiceError::Failed { stderr, .. }) => assert_eq!(stderr, "boom"),
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
