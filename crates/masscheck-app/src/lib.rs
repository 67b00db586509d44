//! Application service layer - config, evaluation use case, export

pub mod config;
pub mod evaluation_service;
pub mod export;

pub use config::Config;
pub use evaluation_service::{
    build_calculator, evaluate_cases, evaluate_file, load_evaluation, save_evaluation, Evaluation,
};
pub use export::export_to_excel;
