use std::path::Path;

use log::debug;
use thiserror::Error;

use super::{
    request::{FairnessRequest, SensitiveFeatures},
    target::TargetDataset,
    task::TaskType,
};
use crate::{
    data::{
        frame::{DataError, DataFrame},
        series::Series,
    },
    managers::traits::AnalysisManager,
    model::traits::Model,
};

#[derive(Debug, Error)]
pub enum FairnessError {
    #[error("'{0}' is not a valid target dataset; expected one of 'initialization', 'evaluation', 'both'")]
    InvalidTargetDataset(String),

    #[error("'{0}' is not a valid task type; expected 'classification' or 'regression'")]
    InvalidTaskType(String),

    #[error("{0} not implemented for FairnessManager")]
    NotImplemented(&'static str),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("model prediction failed: {0}")]
    Prediction(#[source] anyhow::Error),
}

/// Accumulates per-request fairness evaluation configurations across the
/// initialization and evaluation splits. The target column is split out of
/// each dataset up front and predictions are computed once at construction;
/// `add` only selects and bundles.
///
/// Not synchronized: callers serialize calls to `add`.
pub struct FairnessManager {
    task_type: TaskType,
    y_true_init: Series,
    y_true_eval: Series,
    init_features: DataFrame,
    eval_features: DataFrame,
    y_pred_init: Series,
    y_pred_eval: Series,
    requests: Vec<FairnessRequest>,
}

impl FairnessManager {
    pub fn new<M: Model>(
        model: &M,
        initialization_data: &DataFrame,
        evaluation_data: &DataFrame,
        target_column: &str,
        task_type: TaskType,
    ) -> Result<Self, FairnessError> {
        let y_true_init = initialization_data.column(target_column)?.clone();
        let y_true_eval = evaluation_data.column(target_column)?.clone();
        let init_features = initialization_data.drop_column(target_column)?;
        let eval_features = evaluation_data.drop_column(target_column)?;
        let y_pred_init = model
            .predict(&init_features)
            .map_err(FairnessError::Prediction)?;
        let y_pred_eval = model
            .predict(&eval_features)
            .map_err(FairnessError::Prediction)?;

        Ok(Self {
            task_type,
            y_true_init,
            y_true_eval,
            init_features,
            eval_features,
            y_pred_init,
            y_pred_eval,
            requests: Vec::new(),
        })
    }

    /// Registers one fairness evaluation request against the given split.
    ///
    /// For [`TargetDataset::Both`], ground truth, predictions and
    /// column-resolved sensitive features are concatenated positionally,
    /// initialization rows first. The splits share a schema by
    /// construction, but row alignment across them is the caller's
    /// obligation.
    pub fn add(
        &mut self,
        sensitive_features: SensitiveFeatures,
        target_dataset: TargetDataset,
    ) -> Result<(), FairnessError> {
        debug!("Adding fairness request against {target_dataset}");

        let (y_true, y_pred) = match target_dataset {
            TargetDataset::Initialization => {
                (self.y_true_init.clone(), self.y_pred_init.clone())
            }
            TargetDataset::Evaluation => {
                (self.y_true_eval.clone(), self.y_pred_eval.clone())
            }
            TargetDataset::Both => (
                self.y_true_init.concat(&self.y_true_eval),
                self.y_pred_init.concat(&self.y_pred_eval),
            ),
        };

        let resolved = match sensitive_features {
            SensitiveFeatures::Series(series) => series,
            SensitiveFeatures::Column(name) => match target_dataset {
                TargetDataset::Initialization => {
                    self.init_features.column(&name)?.clone()
                }
                TargetDataset::Evaluation => {
                    self.eval_features.column(&name)?.clone()
                }
                TargetDataset::Both => self
                    .init_features
                    .column(&name)?
                    .concat(self.eval_features.column(&name)?),
            },
        };

        self.requests.push(FairnessRequest::new(
            y_true,
            y_pred,
            resolved,
            target_dataset,
        ));
        Ok(())
    }

    /// Accumulated requests, in call order.
    pub fn requests(&self) -> &[FairnessRequest] {
        &self.requests
    }

    pub fn task_type(&self) -> TaskType {
        self.task_type
    }
}

impl AnalysisManager for FairnessManager {
    type Error = FairnessError;

    fn name(&self) -> &'static str {
        "fairness"
    }

    /// Intentionally inert in this slice. A full implementation would feed
    /// each accumulated request to a
    /// [`FairnessMetricsEngine`](super::traits::FairnessMetricsEngine).
    fn compute(&mut self) -> Result<(), FairnessError> {
        Ok(())
    }

    fn get(&self) -> Result<(), FairnessError> {
        Err(FairnessError::NotImplemented("Get"))
    }

    /// Deliberate no-op.
    fn list(&self) {}

    fn save(&self, _path: &Path) -> Result<(), FairnessError> {
        Err(FairnessError::NotImplemented("Save"))
    }

    fn load(_path: &Path) -> Result<Self, FairnessError> {
        Err(FairnessError::NotImplemented("Load"))
    }
}
