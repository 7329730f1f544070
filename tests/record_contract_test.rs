use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use frauddetector_model::framework::{codec, ModelError, Record, Structural, WireEnum};
use frauddetector_model::model::{
    DataSource, DataType, DetectorVersionStatus, Language, ModelScores, ModelTypeEnum,
    ModelVersion, ModelVersionStatus, Rule, RuleResult, VariableEntry,
};
use frauddetector_model::operations::{
    BatchCreateVariableRequest, BatchGetVariableRequest, CreateDetectorVersionRequest,
    CreateRuleResult, GetPredictionResult, PutDetectorRequest,
};

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn rule(version: &str) -> Rule {
    Rule::new()
        .with_detector_id("payments")
        .with_rule_id("high_risk")
        .with_rule_version(version)
}

/// Every variant survives a trip through its wire string.
#[test]
fn test_enum_wire_round_trip() {
    fn check<E: WireEnum>() {
        for variant in E::variants() {
            assert_eq!(E::from_wire(variant.as_wire()), Ok(variant));
        }
    }
    check::<DataSource>();
    check::<DataType>();
    check::<DetectorVersionStatus>();
    check::<Language>();
    check::<ModelTypeEnum>();
    check::<ModelVersionStatus>();
}

#[test]
fn test_enum_rejects_empty_and_absent() {
    assert!(matches!(
        DataType::from_wire(""),
        Err(ModelError::InvalidEnumValue { enum_name: "DataType", .. })
    ));
    assert!(matches!(
        DataType::from_wire_opt(None),
        Err(ModelError::InvalidEnumValue { enum_name: "DataType", .. })
    ));
}

#[test]
fn test_enum_parsing_is_case_sensitive() {
    assert_eq!("FLOAT".parse::<DataType>(), Ok(DataType::Float));
    assert_eq!(
        "float".parse::<DataType>(),
        Err(ModelError::InvalidEnumValue {
            enum_name: "DataType",
            value: "float".into(),
        })
    );
}

#[test]
fn test_chained_with_names_accumulates() {
    let request = BatchGetVariableRequest::new()
        .with_names(["x"])
        .with_names(["y"]);
    assert_eq!(
        request.names(),
        Some(&["x".to_string(), "y".to_string()][..])
    );
}

#[test]
fn test_set_copies_caller_sequence() {
    let mut entries = vec![VariableEntry::new().with_name("ip_address")];
    let mut request = BatchCreateVariableRequest::new();
    request.set_variable_entries(Some(&entries[..]));

    entries.push(VariableEntry::new().with_name("email_address"));
    entries[0] = VariableEntry::new().with_name("changed");

    let stored = request.variable_entries().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name().map(String::as_str), Some("ip_address"));
}

#[test]
fn test_nested_record_equality_and_hash() {
    let first = CreateRuleResult::new().with_rule(rule("1"));
    let second = CreateRuleResult::new().with_rule(rule("1"));

    assert_eq!(first, first.clone());
    assert_eq!(first, second);
    assert_eq!(first.structural_hash(), second.structural_hash());
    assert_eq!(std_hash(&first), std_hash(&second));

    let changed = CreateRuleResult::new().with_rule(rule("2"));
    assert_ne!(first, changed);
}

fn prediction(score: f32) -> GetPredictionResult {
    let model_version = ModelVersion::new()
        .with_model_id("fraud_model")
        .with_model_type(ModelTypeEnum::OnlineFraudInsights)
        .with_model_version_number("1.0");
    GetPredictionResult::new()
        .with_outcomes(["review", "block"])
        .with_model_scores([ModelScores::new()
            .with_model_version(model_version)
            .with_scores([("fraud_score", score), ("insight", 0.25)])])
        .with_rule_results([RuleResult::new()
            .with_rule_id("high_risk")
            .with_outcomes(["block"])])
}

#[test]
fn test_nan_score_is_equal_to_itself() {
    let scores = ModelScores::new().with_scores([("s", f32::NAN)]);
    assert_eq!(scores, scores.clone());
    assert_eq!(scores.structural_hash(), scores.clone().structural_hash());
}

/// Scalars, enums, nested records, lists and float maps all take part in
/// equality and hashing.
#[test]
fn test_every_field_kind_is_reflexive_and_hash_consistent() {
    for score in [912.0, 0.0, f32::NAN] {
        let result = prediction(score);
        let copy = result.clone();
        assert_eq!(result, copy);
        assert_eq!(result.structural_hash(), copy.structural_hash());
        assert_eq!(std_hash(&result), std_hash(&copy));
    }

    assert_eq!(prediction(0.0), prediction(-0.0));
    assert_eq!(
        prediction(0.0).structural_hash(),
        prediction(-0.0).structural_hash()
    );

    assert_ne!(prediction(912.0), prediction(913.0));
    assert_ne!(prediction(f32::NAN), prediction(912.0));
    assert_ne!(
        prediction(1.0),
        prediction(1.0).with_outcomes(["approve"])
    );
}

#[test]
fn test_absent_and_empty_are_distinct() {
    let absent = CreateDetectorVersionRequest::new().with_detector_id("payments");
    let empty = absent.clone().with_rules(Vec::<Rule>::new());

    assert_ne!(absent, empty);
    assert!(!absent.is_present("rules"));
    assert!(empty.is_present("rules"));
}

#[test]
fn test_absent_field_stays_absent_after_round_trip() {
    let request = PutDetectorRequest::new().with_detector_id("payments");
    let wire = codec::to_wire(&request).unwrap();
    assert!(!wire.contains("description"));

    let decoded: PutDetectorRequest = codec::from_wire(&wire).unwrap();
    assert_eq!(decoded, request);
    assert_eq!(decoded.description(), None);
}

#[test]
fn test_unknown_enum_on_wire_fails_decoding() {
    let result = codec::from_wire::<ModelVersion>(
        r#"{"modelId":"m1","modelType":"SOMETHING_NEW"}"#,
    );
    assert_eq!(
        result,
        Err(ModelError::InvalidEnumValue {
            enum_name: "ModelTypeEnum",
            value: "SOMETHING_NEW".into(),
        })
    );
}

#[test]
fn test_rendering_lists_present_fields_in_order() {
    let version = ModelVersion::new()
        .with_model_version_number("1.0")
        .with_model_id("fraud_model");
    assert_eq!(
        version.to_string(),
        "{modelId: fraud_model, modelVersionNumber: 1.0}"
    );
    assert_eq!(PutDetectorRequest::new().to_string(), "{}");
}
