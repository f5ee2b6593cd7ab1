//! Fixed column sets the adapters narrow wide engine output down to.

pub const FEATURE_NAME: &str = "FeatureName";
pub const CLASS_A: &str = "ClassA";
pub const CLASS_B: &str = "ClassB";

/// Per-feature, per-class-pair association measures.
pub const FEATURE_MEASURE_COLS: &[&str] = &[
    FEATURE_NAME,
    CLASS_A,
    CLASS_B,
    "StatisticalParity",
    "PointwiseMutualInfo",
    "SorensonDiceCoeff",
    "JaccardIndex",
    "KendallRankCorrelation",
    "LogLikelihoodRatio",
    "TTest",
    "TTestPValue",
];

/// Per-feature distance measures against the uniform distribution.
pub const DISTRIBUTION_MEASURE_COLS: &[&str] = &[
    FEATURE_NAME,
    "ChiSquarePValue",
    "ChiSquareStat",
    "CrossEntropy",
    "InfiniteNormDist",
    "JensenShannonDist",
    "KLDivergence",
    "TotalVarianceDist",
    "WassersteinDist",
];

/// Whole-dataset inequality indices.
pub const AGGREGATE_MEASURE_COLS: &[&str] =
    &["AtkinsonIndex", "TheilLIndex", "TheilTIndex"];
