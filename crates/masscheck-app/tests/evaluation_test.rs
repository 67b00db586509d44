//! End-to-end evaluation: case file -> evaluation -> saved JSON / Excel

use std::path::PathBuf;

use masscheck_app::{
    evaluate_file, export_to_excel, load_evaluation, save_evaluation, Config,
};
use masscheck_domain::{bar_chart, CalculationStrategy, CaseStatus};
use masscheck_types::{CalculationServiceError, Error, EvaluationError};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

const FIVE_CASES: &str = "volume,density,norm
0.3,1000,A
0.8,1000,A
0.5,900,B
0.7,1000,B
1.0,1200,C
";

#[test]
fn test_evaluate_csv_local() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "cases.csv", FIVE_CASES);

    let mut progress = Vec::new();
    let evaluation = evaluate_file(&path, CalculationStrategy::Local, &Config::default(), |d, t| {
        progress.push((d, t))
    })
    .unwrap();

    assert_eq!(evaluation.strategy, CalculationStrategy::Local);
    assert_eq!(evaluation.batch.len(), 5);
    assert_eq!(progress.last(), Some(&(5, 5)));

    let first = &evaluation.batch.results[0];
    assert!((first.mass - 300.0).abs() < 1e-9);
    assert!((first.unity_check - 60.0).abs() < 1e-9);
    assert_eq!(first.status, CaseStatus::Success);
    assert_eq!(evaluation.batch.results[1].status, CaseStatus::Error);
    assert_eq!(evaluation.batch.results[3].status, CaseStatus::Warning);

    let chart = bar_chart(&evaluation.batch);
    assert_eq!(chart["data"][0]["x"].as_array().unwrap().len(), 5);
}

#[test]
fn test_empty_case_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "cases.json", "[]");

    let err = evaluate_file(&path, CalculationStrategy::Local, &Config::default(), |_, _| {})
        .unwrap_err();
    assert!(matches!(err, Error::Evaluation(EvaluationError::EmptyBatch)));
    assert_eq!(err.to_string(), "Add at least 1 case.");
}

#[test]
fn test_empty_case_file_is_rejected_before_calling_service() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "cases.toml", "cases = []\n");
    let config = Config {
        calculation_command: Some("masscheck-no-such-calculator-program".to_string()),
        ..Config::default()
    };

    let err = evaluate_file(&path, CalculationStrategy::Delegated, &config, |_, _| {})
        .unwrap_err();
    assert!(matches!(err, Error::Evaluation(EvaluationError::EmptyBatch)));
}

#[test]
fn test_empty_case_file_delegated_without_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "c.json", "[]");

    let err = evaluate_file(&path, CalculationStrategy::Delegated, &Config::default(), |_, _| {})
        .unwrap_err();
    assert!(matches!(err, Error::Evaluation(EvaluationError::EmptyBatch)));
    assert_eq!(err.to_string(), "Add at least 1 case.");
}

#[test]
fn test_unreachable_service_aborts_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "cases.csv", FIVE_CASES);
    let config = Config {
        calculation_command: Some("masscheck-no-such-calculator-program".to_string()),
        ..Config::default()
    };

    let mut progress = 0;
    let err = evaluate_file(&path, CalculationStrategy::Delegated, &config, |d, _| progress = d)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Evaluation(EvaluationError::CalculationService(
            CalculationServiceError::Unreachable(_)
        ))
    ));
    assert_eq!(progress, 0);
}

#[cfg(unix)]
#[test]
fn test_delegated_command_matches_local() {
    let dir = tempfile::tempdir().unwrap();
    let cases = write_file(&dir, "cases.csv", FIVE_CASES);
    // Reads {"density": d, "volume": v} from stdin and prints {"mass": v * d}
    let script = write_file(
        &dir,
        "calc.sh",
        r#"read -r line
d=$(echo "$line" | sed 's/.*"density":\([^,}]*\).*/\1/')
v=$(echo "$line" | sed 's/.*"volume":\([^,}]*\).*/\1/')
echo "{\"mass\": $(awk "BEGIN { printf \"%.10f\", $v * $d }")}"
"#,
    );
    let config = Config {
        calculation_command: Some(format!("sh '{}'", script.display())),
        ..Config::default()
    };

    let local = evaluate_file(&cases, CalculationStrategy::Local, &config, |_, _| {}).unwrap();
    let delegated =
        evaluate_file(&cases, CalculationStrategy::Delegated, &config, |_, _| {}).unwrap();

    assert_eq!(delegated.strategy, CalculationStrategy::Delegated);
    assert_eq!(local.batch.len(), delegated.batch.len());
    for (l, d) in local.batch.results.iter().zip(&delegated.batch.results) {
        assert!((l.mass - d.mass).abs() < 1e-6);
        assert_eq!(l.status, d.status);
    }
}

#[test]
fn test_save_reload_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "cases.csv", FIVE_CASES);
    let evaluation =
        evaluate_file(&path, CalculationStrategy::Local, &Config::default(), |_, _| {}).unwrap();

    let json_path = dir.path().join("evaluation.json");
    save_evaluation(&evaluation, &json_path).unwrap();
    let reloaded = load_evaluation(&json_path).unwrap();
    assert_eq!(reloaded.batch, evaluation.batch);
    assert_eq!(reloaded.strategy, evaluation.strategy);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["results"][0]["unityCheck"], json["series"][0]["unityCheck"]);
    assert_eq!(json["results"][0]["norm"], "A");
    assert_eq!(json["series"][1]["color"], "red");

    let xlsx_path = dir.path().join("evaluation.xlsx");
    export_to_excel(&reloaded, &xlsx_path).unwrap();
    assert!(xlsx_path.exists());
}
