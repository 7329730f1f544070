//! Externally hosted model endpoints.

use crate::framework::macros::record;
use crate::model::{ModelEndpointStatus, ModelInputDataFormat, ModelOutputDataFormat, ModelSource};

record! {
    /// IAM role the service assumes to call an endpoint.
    pub struct Role {
        arn: scalar String => "arn",
        name: scalar String => "name",
    }
}

record! {
    /// How event variables are laid out in the request sent to an endpoint.
    pub struct ModelInputConfiguration {
        format: scalar ModelInputDataFormat => "format",
        is_opaque: scalar bool => "isOpaque",
        json_input_template: scalar String => "jsonInputTemplate",
        csv_input_template: scalar String => "csvInputTemplate",
    }
}

record! {
    /// How an endpoint's response maps back onto variables.
    pub struct ModelOutputConfiguration {
        format: scalar ModelOutputDataFormat => "format",
        json_key_to_variable_map: map String => "jsonKeyToVariableMap",
        csv_index_to_variable_map: map String => "csvIndexToVariableMap",
    }
}

record! {
    pub struct ExternalModel {
        model_endpoint: scalar String => "modelEndpoint",
        model_source: scalar ModelSource => "modelSource",
        role: scalar Role => "role",
        input_configuration: scalar ModelInputConfiguration => "inputConfiguration",
        output_configuration: scalar ModelOutputConfiguration => "outputConfiguration",
        model_endpoint_status: scalar ModelEndpointStatus => "modelEndpointStatus",
        last_updated_time: scalar String => "lastUpdatedTime",
        created_time: scalar String => "createdTime",
    }
}
