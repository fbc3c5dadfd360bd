//! Measurement sets shipped with the tool.
use std::fmt;
use std::str::FromStr;

use crate::config::Samples;

/// Built-in `(z, p)` sample sets selectable with `--dataset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dataset {
    #[default]
    Primary,
    Alternate,
    Legacy,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Primary, Dataset::Alternate, Dataset::Legacy];

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Primary => "primary",
            Dataset::Alternate => "alternate",
            Dataset::Legacy => "legacy",
        }
    }

    pub fn samples(&self) -> Samples {
        let (z, p) = match self {
            Dataset::Primary => ([0.2251, 0.3147, 0.5085], [0.2909, 0.4065, 0.5938]),
            Dataset::Alternate => ([0.1974, 0.4060, 0.5502], [0.2302, 0.4055, 0.6328]),
            Dataset::Legacy => ([0.3306, 0.4951, 0.5740], [0.1875, 0.3069, 0.3813]),
        };
        Samples::new(z.to_vec(), p.to_vec())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(Dataset::Primary),
            "alternate" => Ok(Dataset::Alternate),
            "legacy" => Ok(Dataset::Legacy),
            _ => Err(format!(
                "Unknown dataset: {}. Expected one of: primary, alternate, legacy",
                s
            )),
        }
    }
}
