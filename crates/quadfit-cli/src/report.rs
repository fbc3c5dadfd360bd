//! Human-readable and JSON reports of a fit.
//!
//! Every number in the text report is printed to three decimal places.
use std::fmt;

use anyhow::Result;
use serde::Serialize;

use quadfit::Coefficients;

use crate::config::Samples;

/// `p/z` and its inverse for one sample.
#[derive(Debug, Clone, Serialize)]
pub struct RatioRow {
    pub index: usize,
    pub ratio: f64,
    pub inverse: f64,
}

/// A measured value next to the model prediction.
#[derive(Debug, Clone, Serialize)]
pub struct ModelRow {
    pub z: f64,
    pub measured: f64,
    pub model: f64,
    pub residual: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FitReport {
    pub ratios: Vec<RatioRow>,
    pub coefficients: Coefficients,
    pub rows: Vec<ModelRow>,
}

impl FitReport {
    pub fn build(samples: &Samples, coefficients: Coefficients) -> Self {
        let pairs = samples.z.iter().copied().zip(samples.p.iter().copied());

        let ratios = pairs
            .clone()
            .enumerate()
            .map(|(i, (z, p))| RatioRow {
                index: i + 1,
                ratio: p / z,
                inverse: z / p,
            })
            .collect();

        let rows = pairs
            .map(|(z, p)| {
                let model = coefficients.evaluate(z);
                ModelRow {
                    z,
                    measured: p,
                    model,
                    residual: p - model,
                }
            })
            .collect();

        Self {
            ratios,
            coefficients,
            rows,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in &self.ratios {
            writeln!(
                f,
                "p/z ratio distance number {}: {:.3} (inverse: {:.3})",
                row.index, row.ratio, row.inverse
            )?;
        }

        writeln!(f)?;
        writeln!(f, "c1, c2: {}", self.coefficients)?;

        writeln!(f)?;
        for row in &self.rows {
            writeln!(
                f,
                "measured: {:.3}; c1-c2 model: {:.3}",
                row.measured, row.model
            )?;
        }
        Ok(())
    }
}
