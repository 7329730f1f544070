//! Model and model version operations.

use crate::framework::macros::record;
use crate::model::{
    LabelSchema, Model, ModelTypeEnum, ModelVariable, ModelVersionDetail, ModelVersionStatus,
    TrainingDataSource,
};

record! {
    pub struct PutModelRequest {
        model_id: scalar String => "modelId",
        model_type: scalar ModelTypeEnum => "modelType",
        description: scalar String => "description",
        training_data_source: scalar TrainingDataSource => "trainingDataSource",
        model_variables: list ModelVariable => "modelVariables",
        label_schema: scalar LabelSchema => "labelSchema",
    }
}

record! {
    pub struct PutModelResult {}
}

record! {
    pub struct GetModelsRequest {
        model_type: scalar ModelTypeEnum => "modelType",
        model_id: scalar String => "modelId",
        next_token: scalar String => "nextToken",
        max_results: scalar i32 => "maxResults",
    }
}

record! {
    pub struct GetModelsResult {
        next_token: scalar String => "nextToken",
        models: list Model => "models",
    }
}

record! {
    pub struct CreateModelVersionRequest {
        model_id: scalar String => "modelId",
        model_type: scalar ModelTypeEnum => "modelType",
        description: scalar String => "description",
    }
}

record! {
    pub struct CreateModelVersionResult {
        model_id: scalar String => "modelId",
        model_type: scalar ModelTypeEnum => "modelType",
        model_version_number: scalar String => "modelVersionNumber",
        status: scalar String => "status",
    }
}

record! {
    pub struct DescribeModelVersionsRequest {
        model_id: scalar String => "modelId",
        model_version_number: scalar String => "modelVersionNumber",
        model_type: scalar ModelTypeEnum => "modelType",
        next_token: scalar String => "nextToken",
        max_results: scalar i32 => "maxResults",
    }
}

record! {
    pub struct DescribeModelVersionsResult {
        model_version_details: list ModelVersionDetail => "modelVersionDetails",
        next_token: scalar String => "nextToken",
    }
}

record! {
    pub struct GetModelVersionRequest {
        model_id: scalar String => "modelId",
        model_type: scalar ModelTypeEnum => "modelType",
        model_version_number: scalar String => "modelVersionNumber",
    }
}

record! {
    pub struct GetModelVersionResult {
        model_id: scalar String => "modelId",
        model_type: scalar ModelTypeEnum => "modelType",
        model_version_number: scalar String => "modelVersionNumber",
        description: scalar String => "description",
        status: scalar String => "status",
    }
}

record! {
    /// Moves a version `TRAINING_COMPLETE` to `ACTIVE`, or `ACTIVE` back to `TRAINING_COMPLETE`.
    pub struct UpdateModelVersionRequest {
        model_id: scalar String => "modelId",
        model_type: scalar ModelTypeEnum => "modelType",
        model_version_number: scalar String => "modelVersionNumber",
        description: scalar String => "description",
        status: scalar ModelVersionStatus => "status",
    }
}

record! {
    pub struct UpdateModelVersionResult {}
}
