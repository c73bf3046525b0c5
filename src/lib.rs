pub mod cli;
pub mod core;

pub use crate::core::config;

use crate::core::CalculationMode;
use anyhow::Result;
use tracing::{debug, info};

/// Raw projection arguments as given on the command line. Unset fields fall
/// back to the configured defaults before clamping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionRequest {
    pub amount: Option<f64>,
    pub rate: Option<f64>,
    pub years: Option<u32>,
    /// Also write the rendered view as a PDF report.
    pub export: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum AppCommand {
    Sip(ProjectionRequest),
    Lumpsum(ProjectionRequest),
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Investment calculator starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Sip(request) => cli::project::run(CalculationMode::Sip, &request, &config),
        AppCommand::Lumpsum(request) => {
            cli::project::run(CalculationMode::Lumpsum, &request, &config)
        }
    }
}
