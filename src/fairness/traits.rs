use super::request::FairnessRequest;
use crate::data::frame::DataFrame;

/// External fairness-metrics capability. `FairnessManager::compute` will
/// evaluate each accumulated request through this seam once metric
/// computation lands; keeping the seam narrow lets tests substitute a
/// double.
pub trait FairnessMetricsEngine {
    /// Evaluates one request, returning a table of metric values.
    fn evaluate(
        &self,
        request: &FairnessRequest,
    ) -> Result<DataFrame, anyhow::Error>;
}
