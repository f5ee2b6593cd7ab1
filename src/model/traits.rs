use crate::data::{frame::DataFrame, series::Series};

/// External prediction capability. Implementations are owned by the caller
/// and treated as read-only here.
pub trait Model {
    /// Predicts one label per row of `features`.
    fn predict(&self, features: &DataFrame) -> Result<Series, anyhow::Error>;
}
