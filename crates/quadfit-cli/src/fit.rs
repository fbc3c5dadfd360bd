//! Runs a fit from a [`FitConfig`] and writes the report.
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use quadfit::QuadraticSolver;

use crate::config::FitConfig;
use crate::report::FitReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Validate the configuration, fit, and build the report.
pub fn run_fit(config: &FitConfig) -> Result<FitReport> {
    config.validate()?;

    let z = config.samples.z_vector();
    let p = config.samples.p_vector();
    log::debug!(
        "[quadfit::fit] Fitting {} samples, determinant threshold {:e}",
        config.samples.len(),
        config.solver.determinant_threshold
    );

    let solver = QuadraticSolver::new(config.solver);
    let coefficients = solver
        .fit(&z, &p)
        .with_context(|| format!("Failed to fit {} samples", config.samples.len()))?;
    log::info!(
        "[quadfit::fit] c1 = {:.6}, c2 = {:.6}",
        coefficients.c1,
        coefficients.c2
    );

    Ok(FitReport::build(&config.samples, coefficients))
}

/// Write the report to `output`, or stdout when no path is given.
pub fn write_report(
    report: &FitReport,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => report.to_json()?,
    };

    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?;
            file.write_all(rendered.as_bytes())?;
            log::info!("[quadfit::fit] Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
