use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::manager::FairnessError;

/// Which data split a fairness request evaluates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetDataset {
    /// The split the model was fit against.
    Initialization,

    /// The held-out evaluation split.
    Evaluation,

    /// Both splits, concatenated initialization-then-evaluation.
    Both,
}

impl TargetDataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetDataset::Initialization => "initialization",
            TargetDataset::Evaluation => "evaluation",
            TargetDataset::Both => "both",
        }
    }
}

impl fmt::Display for TargetDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetDataset {
    type Err = FairnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initialization" => Ok(TargetDataset::Initialization),
            "evaluation" => Ok(TargetDataset::Evaluation),
            "both" => Ok(TargetDataset::Both),
            other => {
                Err(FairnessError::InvalidTargetDataset(other.to_string()))
            }
        }
    }
}
