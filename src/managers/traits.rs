use std::path::Path;

/// Contract consumed by a composition-root registry of analysis managers.
/// Each manager reports a stable name and shares this lifecycle surface.
pub trait AnalysisManager {
    type Error;

    /// Stable identifier used for registry lookups.
    fn name(&self) -> &'static str;

    /// Runs the analysis over whatever the manager has accumulated.
    fn compute(&mut self) -> Result<(), Self::Error>;

    /// Retrieves computed analyses.
    fn get(&self) -> Result<(), Self::Error>;

    /// Lists computed analyses.
    fn list(&self);

    /// Persists the manager state under `path`.
    fn save(&self, path: &Path) -> Result<(), Self::Error>;

    /// Restores a manager previously persisted under `path`.
    fn load(path: &Path) -> Result<Self, Self::Error>
    where
        Self: Sized;
}
