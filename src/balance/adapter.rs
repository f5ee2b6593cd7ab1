use log::warn;

use super::{
    measures::{
        AGGREGATE_MEASURE_COLS, DISTRIBUTION_MEASURE_COLS,
        FEATURE_MEASURE_COLS,
    },
    outcome::BalanceOutcome,
    traits::BalanceEngine,
};
use crate::data::{
    frame::{DataError, DataFrame},
    series::Series,
    value::Value,
};

/// Narrows a wide engine result to `cols`, downgrading any failure to a
/// single warning plus an unavailable outcome.
fn narrow(
    kind: &str,
    cols: &[&str],
    result: Result<DataFrame, anyhow::Error>,
) -> BalanceOutcome {
    let narrowed =
        result.and_then(|wide| wide.select(cols).map_err(Into::into));
    match narrowed {
        Ok(table) => BalanceOutcome::Computed(table),
        Err(e) => {
            let diagnostic = format!("{e:?}");
            warn!("Failed to compute {kind} balance measures due to {diagnostic}.");
            BalanceOutcome::Unavailable { diagnostic }
        }
    }
}

/// Computes per-feature, per-class-pair balance measures for the given
/// sensitive columns against `target_column`.
pub fn compute_feature_balance_measures<E: BalanceEngine>(
    engine: &E,
    df: &DataFrame,
    cols_of_interest: &[String],
    target_column: &str,
) -> BalanceOutcome {
    narrow(
        "feature",
        FEATURE_MEASURE_COLS,
        engine.feature_balance(df, cols_of_interest, target_column),
    )
}

/// Computes per-feature distribution balance measures for the given
/// sensitive columns.
pub fn compute_distribution_balance_measures<E: BalanceEngine>(
    engine: &E,
    df: &DataFrame,
    cols_of_interest: &[String],
) -> BalanceOutcome {
    narrow(
        "distribution",
        DISTRIBUTION_MEASURE_COLS,
        engine.distribution_balance(df, cols_of_interest),
    )
}

/// Computes whole-dataset aggregate balance measures over the given
/// sensitive columns.
pub fn compute_aggregate_balance_measures<E: BalanceEngine>(
    engine: &E,
    df: &DataFrame,
    cols_of_interest: &[String],
) -> BalanceOutcome {
    narrow(
        "aggregate",
        AGGREGATE_MEASURE_COLS,
        engine.aggregate_balance(df, cols_of_interest),
    )
}

/// Outcomes for the three measure groups. Each group degrades
/// independently; one failing measure never aborts the others.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceReport {
    pub feature: BalanceOutcome,
    pub distribution: BalanceOutcome,
    pub aggregate: BalanceOutcome,
}

/// Computes all three measure groups in one pass.
pub fn compute_all<E: BalanceEngine>(
    engine: &E,
    df: &DataFrame,
    cols_of_interest: &[String],
    target_column: &str,
) -> BalanceReport {
    BalanceReport {
        feature: compute_feature_balance_measures(
            engine,
            df,
            cols_of_interest,
            target_column,
        ),
        distribution: compute_distribution_balance_measures(
            engine,
            df,
            cols_of_interest,
        ),
        aggregate: compute_aggregate_balance_measures(
            engine,
            df,
            cols_of_interest,
        ),
    }
}

/// Binarizes the target column when a positive label is supplied: cells
/// whose rendered payload contains `pos_label` become 1, all others 0.
/// Without a positive label the frame passes through unchanged.
pub fn prepare_df(
    df: &DataFrame,
    target_column: &str,
    pos_label: Option<&str>,
) -> Result<DataFrame, DataError> {
    let Some(pos_label) = pos_label else {
        return Ok(df.clone());
    };

    let target = df.column(target_column)?;
    let binarized = target
        .values()
        .iter()
        .map(|v| Value::Int(i64::from(v.render_contains(pos_label))))
        .collect();
    df.with_column(Series::new(target_column, binarized))
}
