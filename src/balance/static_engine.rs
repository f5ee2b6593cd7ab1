use anyhow::{anyhow, bail};

use super::traits::BalanceEngine;
use crate::data::frame::DataFrame;

/// A barebones engine for testing and demo purposes: serves preconfigured
/// wide frames and computes nothing. A call whose frame was not configured
/// fails, which exercises the adapters' degraded path.
#[derive(Debug, Clone, Default)]
pub struct StaticBalanceEngine {
    pub feature: Option<DataFrame>,
    pub distribution: Option<DataFrame>,
    pub aggregate: Option<DataFrame>,
}

impl BalanceEngine for StaticBalanceEngine {
    fn feature_balance(
        &self,
        _df: &DataFrame,
        _sensitive_cols: &[String],
        _target_column: &str,
    ) -> Result<DataFrame, anyhow::Error> {
        match &self.feature {
            Some(frame) => Ok(frame.clone()),
            None => bail!("no canned feature balance frame"),
        }
    }

    fn distribution_balance(
        &self,
        _df: &DataFrame,
        _sensitive_cols: &[String],
    ) -> Result<DataFrame, anyhow::Error> {
        match &self.distribution {
            Some(frame) => Ok(frame.clone()),
            None => bail!("no canned distribution balance frame"),
        }
    }

    fn aggregate_balance(
        &self,
        _df: &DataFrame,
        _sensitive_cols: &[String],
    ) -> Result<DataFrame, anyhow::Error> {
        match &self.aggregate {
            Some(frame) => Ok(frame.clone()),
            None => bail!("no canned aggregate balance frame"),
        }
    }
}

/// Engine double whose every computation fails with a fixed message.
#[derive(Debug, Clone)]
pub struct FailingBalanceEngine {
    message: String,
}

impl FailingBalanceEngine {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl BalanceEngine for FailingBalanceEngine {
    fn feature_balance(
        &self,
        _df: &DataFrame,
        _sensitive_cols: &[String],
        _target_column: &str,
    ) -> Result<DataFrame, anyhow::Error> {
        Err(anyhow!("{}", self.message))
    }

    fn distribution_balance(
        &self,
        _df: &DataFrame,
        _sensitive_cols: &[String],
    ) -> Result<DataFrame, anyhow::Error> {
        Err(anyhow!("{}", self.message))
    }

    fn aggregate_balance(
        &self,
        _df: &DataFrame,
        _sensitive_cols: &[String],
    ) -> Result<DataFrame, anyhow::Error> {
        Err(anyhow!("{}", self.message))
    }
}
