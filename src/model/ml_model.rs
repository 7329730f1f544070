//! Trained models, model versions, and their training inputs.

use crate::framework::macros::record;
use crate::model::{ModelTypeEnum, ModelVersionStatus};

record! {
    /// Location and access role of a model's training data.
    pub struct TrainingDataSource {
        data_location: scalar String => "dataLocation",
        data_access_role_arn: scalar String => "dataAccessRoleArn",
    }
}

record! {
    /// A variable fed to a model, with its column index in the training data.
    pub struct ModelVariable {
        name: scalar String => "name",
        index: scalar i32 => "index",
    }
}

record! {
    /// Maps raw label values in the training data onto label classes.
    pub struct LabelSchema {
        label_key: scalar String => "labelKey",
        /// Label class name to the raw values that belong to it.
        label_mapper: map Vec<String> => "labelMapper",
    }
}

record! {
    pub struct Model {
        model_id: scalar String => "modelId",
        model_type: scalar ModelTypeEnum => "modelType",
        description: scalar String => "description",
        training_data_source: scalar TrainingDataSource => "trainingDataSource",
        model_variables: list ModelVariable => "modelVariables",
        label_schema: scalar LabelSchema => "labelSchema",
        last_updated_time: scalar String => "lastUpdatedTime",
        created_time: scalar String => "createdTime",
    }
}

record! {
    /// Reference to one version of a model.
    pub struct ModelVersion {
        model_id: scalar String => "modelId",
        model_type: scalar ModelTypeEnum => "modelType",
        model_version_number: scalar String => "modelVersionNumber",
    }
}

record! {
    /// Full description of a model version, including training metrics.
    pub struct ModelVersionDetail {
        model_id: scalar String => "modelId",
        model_type: scalar ModelTypeEnum => "modelType",
        model_version_number: scalar String => "modelVersionNumber",
        description: scalar String => "description",
        status: scalar ModelVersionStatus => "status",
        training_data_source: scalar TrainingDataSource => "trainingDataSource",
        model_variables: list ModelVariable => "modelVariables",
        label_schema: scalar LabelSchema => "labelSchema",
        validation_metrics: map String => "validationMetrics",
        training_metrics: map String => "trainingMetrics",
        last_updated_time: scalar String => "lastUpdatedTime",
        created_time: scalar String => "createdTime",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{codec, ModelError};
    use serde_json::json;

    #[test]
    fn test_label_mapper_entries() {
        let schema = LabelSchema::new()
            .with_label_key("is_fraud")
            .add_label_mapper_entry("FRAUD", vec!["1".to_string()])
            .unwrap()
            .add_label_mapper_entry("LEGIT", vec!["0".to_string()])
            .unwrap();

        assert_eq!(schema.label_mapper().map(|m| m.len()), Some(2));
        assert_eq!(
            codec::to_wire_value(&schema).unwrap(),
            json!({ "labelKey": "is_fraud", "labelMapper": { "FRAUD": ["1"], "LEGIT": ["0"] } })
        );

        let err = schema
            .add_label_mapper_entry("FRAUD", Vec::<String>::new())
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "labelMapper",
                key: "FRAUD".into()
            }
        );
    }

    #[test]
    fn test_clear_entries_returns_to_absent() {
        let detail = ModelVersionDetail::new()
            .with_training_metrics([("auc", "0.91")])
            .clear_training_metrics_entries();
        assert!(detail.training_metrics().is_none());
    }

    #[test]
    fn test_nested_records_render() {
        let model = Model::new()
            .with_model_id("m1")
            .with_model_variables([ModelVariable::new().with_name("ip").with_index(0)]);
        assert_eq!(
            model.to_string(),
            "{modelId: m1, modelVariables: [{name: ip, index: 0}]}"
        );
    }
}
