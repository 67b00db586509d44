//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::output_evaluation;
use indicatif::{ProgressBar, ProgressStyle};
use masscheck_app::{
    evaluate_file, export_to_excel, load_evaluation, save_evaluation, Config,
};
use masscheck_domain::{bar_chart, CalculationStrategy, CaseStatus};
use masscheck_types::{Error, OutputFormat, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Evaluate {
            cases,
            strategy,
            command,
            output,
            chart,
            export,
        } => {
            let (config, strategy, output_format) =
                resolve_evaluate_settings(config, strategy, command, cli.format);
            cmd_evaluate(
                &config,
                &cases,
                strategy,
                output_format,
                output.as_deref(),
                chart.as_deref(),
                export.as_deref(),
            )
        }

        Commands::Export { evaluation, output } => cmd_export(evaluation, output),

        Commands::Config {
            show,
            set_strategy,
            set_command,
            set_output,
            reset,
        } => cmd_config(show, set_strategy, set_command, set_output, reset),
    }
}

/// Command line flags win over the saved config
fn resolve_evaluate_settings(
    mut config: Config,
    strategy: Option<CalculationStrategy>,
    command: Option<String>,
    format: Option<OutputFormat>,
) -> (Config, CalculationStrategy, OutputFormat) {
    if command.is_some() {
        config.calculation_command = command;
    }
    let strategy = strategy.unwrap_or(config.strategy);
    let output_format = format.unwrap_or(config.output_format);
    (config, strategy, output_format)
}

fn cmd_evaluate(
    config: &Config,
    cases: &Path,
    strategy: CalculationStrategy,
    output_format: OutputFormat,
    output: Option<&Path>,
    chart: Option<&Path>,
    export: Option<&Path>,
) -> Result<()> {
    // Local evaluation is instant; only the delegated round trips need a bar
    let progress_bar = match strategy {
        CalculationStrategy::Delegated => {
            let pb = ProgressBar::new(0);
            let style = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cases")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-");
            pb.set_style(style);
            Some(pb)
        }
        CalculationStrategy::Local => None,
    };

    let result = evaluate_file(cases, strategy, config, |done, total| {
        if let Some(ref pb) = progress_bar {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
        }
    });

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }
    let evaluation = result?;

    output_evaluation(output_format, &evaluation)?;

    if let Some(path) = output {
        save_evaluation(&evaluation, path)?;
        info!(path = %path.display(), "saved evaluation");
    }

    if let Some(path) = chart {
        let figure = bar_chart(&evaluation.batch);
        std::fs::write(path, serde_json::to_string_pretty(&figure)?)?;
        info!(path = %path.display(), "saved chart");
    }

    if let Some(path) = export {
        export_to_excel(&evaluation, path)?;
        info!(path = %path.display(), "exported evaluation to Excel");
    }

    let error_count = evaluation.batch.count(CaseStatus::Error);
    if error_count > 0 {
        warn!(cases = error_count, "cases exceed the maximum mass of their norm");
    }

    Ok(())
}

fn cmd_export(evaluation_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !evaluation_path.exists() {
        return Err(Error::FileNotFound(format!(
            "Evaluation file not found: {}",
            evaluation_path.display()
        )));
    }

    let evaluation = load_evaluation(&evaluation_path)?;

    let output_path = output.unwrap_or_else(|| evaluation_path.with_extension("xlsx"));

    export_to_excel(&evaluation, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_strategy: Option<CalculationStrategy>,
    set_command: Option<String>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(strategy) = set_strategy {
        config.strategy = strategy;
        modified = true;
    }

    if let Some(command) = set_command {
        config.calculation_command = Some(command);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn saved_config() -> Config {
        Config {
            strategy: CalculationStrategy::Delegated,
            calculation_command: Some("python3 calc.py".to_string()),
            output_format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_config_values_used_without_flags() {
        let (config, strategy, format) = resolve_evaluate_settings(saved_config(), None, None, None);
        assert_eq!(config.calculation_command(), Some("python3 calc.py"));
        assert_eq!(strategy, CalculationStrategy::Delegated);
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_flags_override_config() {
        let (config, strategy, format) = resolve_evaluate_settings(
            saved_config(),
            Some(CalculationStrategy::Local),
            Some("calc --sheet mass.xlsx".to_string()),
            Some(OutputFormat::Table),
        );
        assert_eq!(config.calculation_command(), Some("calc --sheet mass.xlsx"));
        assert_eq!(strategy, CalculationStrategy::Local);
        assert_eq!(format, OutputFormat::Table);
    }

    #[test]
    fn test_command_flag_without_saved_command() {
        let (config, strategy, format) = resolve_evaluate_settings(
            Config::default(),
            Some(CalculationStrategy::Delegated),
            Some("sh calc.sh".to_string()),
            None,
        );
        assert_eq!(config.calculation_command(), Some("sh calc.sh"));
        assert_eq!(strategy, CalculationStrategy::Delegated);
        assert_eq!(format, OutputFormat::Table);
    }

    #[test]
    fn test_parsed_flags_reach_settings() {
        let cli = Cli::parse_from([
            "masscheck",
            "evaluate",
            "cases.csv",
            "--strategy",
            "delegated",
            "--command",
            "sh calc.sh",
            "--format",
            "json",
        ]);
        let Commands::Evaluate {
            strategy, command, ..
        } = cli.command
        else {
            panic!("expected evaluate subcommand");
        };

        let (config, strategy, format) =
            resolve_evaluate_settings(Config::default(), strategy, command, cli.format);
        assert_eq!(config.calculation_command(), Some("sh calc.sh"));
        assert_eq!(strategy, CalculationStrategy::Delegated);
        assert_eq!(format, OutputFormat::Json);
    }
}
