use super::{
    manager::{FairnessError, FairnessManager},
    request::{FairnessRequest, SensitiveFeatures},
    target::TargetDataset,
    task::TaskType,
    traits::FairnessMetricsEngine,
};
use crate::{
    data::{frame::DataFrame, series::Series, value::Value},
    managers::traits::AnalysisManager,
    model::simple_model::MajorityClassModel,
};

fn init_data() -> DataFrame {
    DataFrame::new(vec![
        Series::of("age", [30, 40, 50]),
        Series::of("gender", ["F", "M", "F"]),
        Series::of("approved", [1, 0, 1]),
    ])
    .unwrap()
}

fn eval_data() -> DataFrame {
    DataFrame::new(vec![
        Series::of("age", [25, 60]),
        Series::of("gender", ["M", "F"]),
        Series::of("approved", [0, 1]),
    ])
    .unwrap()
}

fn manager() -> FairnessManager {
    let model =
        MajorityClassModel::fit(init_data().column("approved").unwrap())
            .unwrap();
    FairnessManager::new(
        &model,
        &init_data(),
        &eval_data(),
        "approved",
        TaskType::Classification,
    )
    .unwrap()
}

#[test]
fn test_add_appends_in_call_order() {
    let mut manager = manager();
    assert!(manager.requests().is_empty());

    manager
        .add(
            SensitiveFeatures::Column("gender".to_string()),
            TargetDataset::Initialization,
        )
        .unwrap();
    assert_eq!(manager.requests().len(), 1);

    manager
        .add(
            SensitiveFeatures::Column("gender".to_string()),
            TargetDataset::Evaluation,
        )
        .unwrap();
    assert_eq!(manager.requests().len(), 2);

    assert_eq!(
        manager.requests()[0].target_dataset(),
        TargetDataset::Initialization
    );
    assert_eq!(
        manager.requests()[1].target_dataset(),
        TargetDataset::Evaluation
    );
}

#[test]
fn test_both_concatenates_init_then_eval() {
    let mut manager = manager();
    manager
        .add(
            SensitiveFeatures::Column("gender".to_string()),
            TargetDataset::Both,
        )
        .unwrap();

    let request = &manager.requests()[0];
    assert_eq!(request.y_true().len(), 5);
    assert_eq!(request.y_pred().len(), 5);
    assert_eq!(request.sensitive_features().len(), 5);

    // Initialization rows first, evaluation rows after.
    assert_eq!(request.y_true().get(0), Some(&Value::Int(1)));
    assert_eq!(request.y_true().get(3), Some(&Value::Int(0)));
    assert_eq!(
        request.sensitive_features().get(3),
        Some(&Value::Str("M".to_string()))
    );
}

#[test]
fn test_explicit_series_used_verbatim() {
    let mut manager = manager();
    let supplied = Series::of("gender", ["X", "Y"]);
    manager
        .add(
            SensitiveFeatures::Series(supplied.clone()),
            TargetDataset::Evaluation,
        )
        .unwrap();

    assert_eq!(manager.requests()[0].sensitive_features(), &supplied);
}

#[test]
fn test_column_resolves_from_selected_split() {
    let mut manager = manager();
    manager
        .add(
            SensitiveFeatures::Column("gender".to_string()),
            TargetDataset::Evaluation,
        )
        .unwrap();

    let resolved = manager.requests()[0].sensitive_features();
    assert_eq!(resolved.values().len(), 2);
    assert_eq!(resolved.get(0), Some(&Value::Str("M".to_string())));
}

#[test]
fn test_target_column_is_stripped_from_features() {
    // The target column is removed before prediction, so it cannot be
    // selected as a sensitive attribute either.
    let mut manager = manager();
    let result = manager.add(
        SensitiveFeatures::Column("approved".to_string()),
        TargetDataset::Initialization,
    );
    assert!(matches!(result, Err(FairnessError::Data(_))));
    assert!(manager.requests().is_empty());
}

#[test]
fn test_lifecycle_stubs() {
    let mut manager = manager();
    manager
        .add(
            SensitiveFeatures::Column("gender".to_string()),
            TargetDataset::Both,
        )
        .unwrap();

    assert_eq!(manager.name(), "fairness");
    assert!(manager.compute().is_ok());
    manager.list();

    let err = manager.get().unwrap_err();
    assert_eq!(err.to_string(), "Get not implemented for FairnessManager");
    assert!(matches!(
        manager.save(std::path::Path::new("/tmp/fairness")),
        Err(FairnessError::NotImplemented("Save"))
    ));
    assert!(matches!(
        FairnessManager::load(std::path::Path::new("/tmp/fairness")),
        Err(FairnessError::NotImplemented("Load"))
    ));
}

#[test]
fn test_requests_feed_a_metrics_engine() {
    // Double standing in for the real metrics capability: one row per
    // request with the predicted positive rate.
    struct PositiveRateEngine;

    impl FairnessMetricsEngine for PositiveRateEngine {
        fn evaluate(
            &self,
            request: &FairnessRequest,
        ) -> Result<DataFrame, anyhow::Error> {
            let positives = request
                .y_pred()
                .values()
                .iter()
                .filter(|v| **v == Value::Int(1))
                .count();
            let rate = positives as f64 / request.y_pred().len() as f64;
            Ok(DataFrame::new(vec![Series::of("PositiveRate", [rate])])?)
        }
    }

    let mut manager = manager();
    manager
        .add(
            SensitiveFeatures::Column("gender".to_string()),
            TargetDataset::Both,
        )
        .unwrap();

    let engine = PositiveRateEngine;
    let table = engine.evaluate(&manager.requests()[0]).unwrap();
    let rate = table.column("PositiveRate").unwrap().get(0).unwrap();
    // Majority model predicts 1 for every row.
    assert_eq!(rate.as_f64(), Some(1.0));
}

#[test]
fn test_missing_target_column_fails_construction() {
    let model =
        MajorityClassModel::fit(init_data().column("approved").unwrap())
            .unwrap();
    let result = FairnessManager::new(
        &model,
        &init_data(),
        &eval_data(),
        "label",
        TaskType::Classification,
    );
    assert!(matches!(result, Err(FairnessError::Data(_))));
}
