use serde::{Deserialize, Serialize};

use super::target::TargetDataset;
use crate::data::series::Series;

/// Sensitive attribute selection for a fairness request. A column name is
/// resolved from the chosen split's feature frame; an explicit series is
/// used verbatim, even when a same-named column exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SensitiveFeatures {
    Column(String),
    Series(Series),
}

/// One accumulated fairness evaluation: ground truth, predictions, the
/// resolved sensitive attribute and the split it targets. Immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessRequest {
    y_true: Series,
    y_pred: Series,
    sensitive_features: Series,
    target_dataset: TargetDataset,
}

impl FairnessRequest {
    pub(crate) fn new(
        y_true: Series,
        y_pred: Series,
        sensitive_features: Series,
        target_dataset: TargetDataset,
    ) -> Self {
        Self {
            y_true,
            y_pred,
            sensitive_features,
            target_dataset,
        }
    }

    pub fn y_true(&self) -> &Series {
        &self.y_true
    }

    pub fn y_pred(&self) -> &Series {
        &self.y_pred
    }

    pub fn sensitive_features(&self) -> &Series {
        &self.sensitive_features
    }

    pub fn target_dataset(&self) -> TargetDataset {
        self.target_dataset
    }
}
