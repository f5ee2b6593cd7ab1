use crate::data::frame::DataFrame;

/// Result of one balance-measure computation. Failures are downgraded at
/// the adapter boundary: callers get `Unavailable` with the captured
/// diagnostic instead of an error, and the remaining measures keep going.
/// An empty table means "measure unavailable", not "zero balance".
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceOutcome {
    Computed(DataFrame),
    Unavailable { diagnostic: String },
}

impl BalanceOutcome {
    /// The measure table; empty when unavailable.
    pub fn table(&self) -> DataFrame {
        match self {
            BalanceOutcome::Computed(table) => table.clone(),
            BalanceOutcome::Unavailable { .. } => DataFrame::empty(),
        }
    }

    pub fn into_table(self) -> DataFrame {
        match self {
            BalanceOutcome::Computed(table) => table,
            BalanceOutcome::Unavailable { .. } => DataFrame::empty(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, BalanceOutcome::Unavailable { .. })
    }

    /// The captured engine diagnostic, when the measure is unavailable.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            BalanceOutcome::Computed(_) => None,
            BalanceOutcome::Unavailable { diagnostic } => Some(diagnostic),
        }
    }
}
