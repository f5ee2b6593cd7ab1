use crate::data::frame::DataFrame;

/// Distributed exploratory-analysis capability computing data balance
/// measures. Implementations return wide tables; the adapters in
/// [`super::adapter`] narrow them to the fixed column sets in
/// [`super::measures`].
pub trait BalanceEngine {
    /// Association measures between each sensitive column and the target.
    fn feature_balance(
        &self,
        df: &DataFrame,
        sensitive_cols: &[String],
        target_column: &str,
    ) -> Result<DataFrame, anyhow::Error>;

    /// Distribution measures for each sensitive column.
    fn distribution_balance(
        &self,
        df: &DataFrame,
        sensitive_cols: &[String],
    ) -> Result<DataFrame, anyhow::Error>;

    /// Aggregate measures over all sensitive columns combined.
    fn aggregate_balance(
        &self,
        df: &DataFrame,
        sensitive_cols: &[String],
    ) -> Result<DataFrame, anyhow::Error>;
}
