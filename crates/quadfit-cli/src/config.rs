//! JSON configuration for `quadfit fit`.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quadfit::math::VecN;
use quadfit::SolverConfig;

use crate::datasets::Dataset;

/// Paired measurements: predictor `z` and outcome `p`.
///
/// Both fields are required when `samples` appears in a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Samples {
    pub z: Vec<f64>,
    pub p: Vec<f64>,
}

impl Samples {
    pub fn new(z: Vec<f64>, p: Vec<f64>) -> Self {
        Self { z, p }
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    pub fn z_vector(&self) -> VecN {
        VecN::from_vec(self.z.clone())
    }

    pub fn p_vector(&self) -> VecN {
        VecN::from_vec(self.p.clone())
    }

    pub fn validate(&self) -> Result<()> {
        if self.z.len() != self.p.len() {
            anyhow::bail!(
                "z and p must have the same number of samples (z: {}, p: {})",
                self.z.len(),
                self.p.len()
            );
        }
        if self.is_empty() {
            anyhow::bail!("At least one sample is required");
        }
        if let Some(v) = self.z.iter().chain(self.p.iter()).find(|v| !v.is_finite()) {
            anyhow::bail!("Sample values must be finite, found {}", v);
        }
        Ok(())
    }
}

impl Default for Samples {
    fn default() -> Self {
        Dataset::default().samples()
    }
}

/// Everything `quadfit fit` needs; missing fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    pub samples: Samples,
    pub solver: SolverConfig,
}

impl FitConfig {
    pub fn validate(&self) -> Result<()> {
        self.samples.validate()?;
        let threshold = self.solver.determinant_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            anyhow::bail!(
                "determinant_threshold must be a finite, non-negative number, got {}",
                threshold
            );
        }
        Ok(())
    }
}

/// Load a fit configuration from a JSON file.
pub fn load_fit_config<P: AsRef<Path>>(path: P) -> Result<FitConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: FitConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Parse a comma-separated list of numbers such as `0.1, 0.2,0.3`.
///
/// A single trailing comma is allowed; empty items elsewhere are rejected.
pub fn parse_values(input: &str) -> Result<Vec<f64>> {
    let mut items: Vec<&str> = input.split(',').map(str::trim).collect();
    if items.len() > 1 && items.last() == Some(&"") {
        items.pop();
    }
    items
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            if s.is_empty() {
                anyhow::bail!("Empty value at position {} in '{}'", i + 1, input);
            }
            s.parse::<f64>()
                .with_context(|| format!("Invalid number '{}' in '{}'", s, input))
        })
        .collect()
}

/// Replace `samples` with values given on the command line.
///
/// `z` and `p` must be given together; with neither, `samples` is untouched.
pub fn override_samples(samples: &mut Samples, z: Option<&str>, p: Option<&str>) -> Result<()> {
    match (z, p) {
        (Some(z), Some(p)) => {
            *samples = Samples::new(parse_values(z)?, parse_values(p)?);
            Ok(())
        }
        (None, None) => Ok(()),
        (Some(_), None) => anyhow::bail!("--z was given without --p"),
        (None, Some(_)) => anyhow::bail!("--p was given without --z"),
    }
}
