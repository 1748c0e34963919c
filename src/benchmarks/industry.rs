use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EstimatorError;

/// Business sector selecting a benchmark record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    #[default]
    Retail,
    Education,
    Finance,
    Service,
}

impl Industry {
    pub const COUNT: usize = 4;

    /// All industries in selector order
    pub const ALL: [Industry; Industry::COUNT] = [
        Industry::Retail,
        Industry::Education,
        Industry::Finance,
        Industry::Service,
    ];

    pub fn index(self) -> usize {
        match self {
            Industry::Retail => 0,
            Industry::Education => 1,
            Industry::Finance => 2,
            Industry::Service => 3,
        }
    }

    /// Lowercase identifier used in CSV, JSON and the CLI
    pub fn as_str(self) -> &'static str {
        match self {
            Industry::Retail => "retail",
            Industry::Education => "education",
            Industry::Finance => "finance",
            Industry::Service => "service",
        }
    }

    /// Label shown in the industry selector
    pub fn label(self) -> &'static str {
        match self {
            Industry::Retail => "Retail",
            Industry::Education => "Education",
            Industry::Finance => "Finance",
            Industry::Service => "Service",
        }
    }

    /// Inventory turnover is only collected for retail
    pub fn tracks_inventory(self) -> bool {
        matches!(self, Industry::Retail)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retail" => Ok(Industry::Retail),
            "education" => Ok(Industry::Education),
            "finance" => Ok(Industry::Finance),
            "service" => Ok(Industry::Service),
            _ => Err(EstimatorError::UnknownIndustry(s.to_string())),
        }
    }
}
