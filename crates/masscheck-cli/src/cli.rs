//! CLI definition using clap

use clap::{Parser, Subcommand};
use masscheck_types::{CalculationStrategy, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "masscheck")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Mass unity check of volume/density cases against norm limits")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate the cases in a CSV, JSON or TOML file
    Evaluate {
        /// Path to case file
        cases: PathBuf,

        /// Calculation strategy. Uses config value if not specified.
        #[arg(long, short = 's')]
        strategy: Option<CalculationStrategy>,

        /// Calculation command for the delegated strategy (overrides config)
        #[arg(long)]
        command: Option<String>,

        /// Write the evaluation as JSON to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Write the bar chart figure (JSON) to this file
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Export the evaluation to this Excel file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Export a saved evaluation to Excel
    Export {
        /// Path to evaluation JSON file
        evaluation: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default calculation strategy
        #[arg(long)]
        set_strategy: Option<CalculationStrategy>,

        /// Set calculation command for the delegated strategy
        #[arg(long)]
        set_command: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
