//! Output formatting module

use masscheck_app::Evaluation;
use masscheck_domain::generate_report;
use masscheck_types::{OutputFormat, Result};

pub fn output_evaluation(output_format: OutputFormat, evaluation: &Evaluation) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(evaluation)?;
        println!("{}", content);
    } else {
        println!("Strategy:  {}", evaluation.strategy);
        println!("Evaluated: {}", evaluation.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC"));
        println!();
        println!("{}", generate_report(&evaluation.batch));
    }

    Ok(())
}
