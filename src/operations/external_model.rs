//! External model endpoint operations.

use crate::framework::macros::record;
use crate::model::{
    ExternalModel, ModelEndpointStatus, ModelInputConfiguration, ModelOutputConfiguration,
    ModelSource, Role,
};

record! {
    /// Creates or updates an external endpoint, including its role and variable mappings.
    pub struct PutExternalModelRequest {
        model_endpoint: scalar String => "modelEndpoint",
        model_source: scalar ModelSource => "modelSource",
        role: scalar Role => "role",
        input_configuration: scalar ModelInputConfiguration => "inputConfiguration",
        output_configuration: scalar ModelOutputConfiguration => "outputConfiguration",
        model_endpoint_status: scalar ModelEndpointStatus => "modelEndpointStatus",
    }
}

record! {
    pub struct PutExternalModelResult {}
}

record! {
    pub struct GetExternalModelsRequest {
        model_endpoint: scalar String => "modelEndpoint",
        next_token: scalar String => "nextToken",
        max_results: scalar i32 => "maxResults",
    }
}

record! {
    pub struct GetExternalModelsResult {
        external_models: list ExternalModel => "externalModels",
        next_token: scalar String => "nextToken",
    }
}
