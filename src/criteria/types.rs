use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ShapeError;

/// Identity of one candidate model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Hub-style identifier, e.g. `roberta-base`.
    pub id: String,
    /// Human-friendly name, e.g. `RoBERTa`.
    pub display_name: String,
}

impl ModelEntry {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

impl fmt::Display for ModelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}

/// Direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Higher raw values are better.
    #[default]
    #[serde(alias = "max", alias = "+")]
    Benefit,
    /// Lower raw values are better.
    #[serde(alias = "min", alias = "-")]
    Cost,
}

impl Impact {
    /// Returns `true` for [`Impact::Benefit`].
    pub fn is_benefit(self) -> bool {
        matches!(self, Impact::Benefit)
    }

    /// Returns the symbol used in compact impact lists (`+` / `-`).
    pub fn symbol(self) -> char {
        match self {
            Impact::Benefit => '+',
            Impact::Cost => '-',
        }
    }
}

impl FromStr for Impact {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "max" | "benefit" => Ok(Impact::Benefit),
            "-" | "min" | "cost" => Ok(Impact::Cost),
            _ => Err(ShapeError::UnknownImpact {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Benefit => write!(f, "benefit"),
            Impact::Cost => write!(f, "cost"),
        }
    }
}

/// Description of one criterion column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSpec {
    pub name: String,
    pub weight: f64,
    #[serde(default)]
    pub impact: Impact,
}

impl CriterionSpec {
    pub fn new(name: impl Into<String>, weight: f64, impact: Impact) -> Self {
        Self {
            name: name.into(),
            weight,
            impact,
        }
    }

    /// A benefit criterion with weight `1.0`.
    pub fn benefit(name: impl Into<String>) -> Self {
        Self::new(name, 1.0, Impact::Benefit)
    }

    /// A cost criterion with weight `1.0`.
    pub fn cost(name: impl Into<String>) -> Self {
        Self::new(name, 1.0, Impact::Cost)
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}
