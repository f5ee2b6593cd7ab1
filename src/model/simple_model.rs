use anyhow::bail;

use crate::data::{frame::DataFrame, series::Series, value::Value};
use crate::model::traits::Model;

/// A barebones model for testing and demo purposes: predicts the majority
/// label it saw at construction for every row.
#[derive(Debug, Clone)]
pub struct MajorityClassModel {
    majority: Value,
}

impl MajorityClassModel {
    pub fn fit(labels: &Series) -> Result<Self, anyhow::Error> {
        if labels.is_empty() {
            bail!("cannot fit on an empty label series");
        }

        let mut counts: Vec<(&Value, usize)> = Vec::new();
        for label in labels.values() {
            match counts.iter_mut().find(|(v, _)| *v == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label, 1)),
            }
        }
        // Ties resolve to the label seen first.
        let mut majority = None;
        let mut best = 0;
        for (label, n) in counts {
            if n > best {
                majority = Some(label.clone());
                best = n;
            }
        }
        let Some(majority) = majority else {
            bail!("cannot fit on an empty label series");
        };

        Ok(Self { majority })
    }
}

impl Model for MajorityClassModel {
    fn predict(&self, features: &DataFrame) -> Result<Series, anyhow::Error> {
        let values = vec![self.majority.clone(); features.num_rows()];
        Ok(Series::new("prediction", values))
    }
}
