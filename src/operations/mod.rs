//! Request and result records for every fraud detection operation.
//!
//! Each operation is described by a zero-sized type implementing [`Operation`],
//! which ties its name, input and output records together and lists the input
//! fields the operation requires. Records never validate themselves; required
//! fields are checked here, at the operation boundary, by [`validate`].

pub mod detector;
pub mod external_model;
pub mod ml_model;
pub mod outcome;
pub mod prediction;
pub mod rule;
pub mod variable;

pub use detector::*;
pub use external_model::*;
pub use ml_model::*;
pub use outcome::*;
pub use prediction::*;
pub use rule::*;
pub use variable::*;

use crate::framework::{ModelError, Record};

/// Describes one API operation.
pub trait Operation: Send + Sync + 'static {
    /// Operation name as it appears in the `X-Amz-Target` header.
    const NAME: &'static str;

    /// Wire names of the input fields that must be present.
    const REQUIRED: &'static [&'static str];

    type Input: Record;
    type Output: Record;
}

/// Checks that every field `O` requires is present on `input`.
pub fn validate<O: Operation>(input: &O::Input) -> Result<(), ModelError> {
    input.require(O::REQUIRED)
}

macro_rules! operations {
    (
        $(
            $(#[$meta:meta])*
            $op:ident($input:ident => $output:ident) requires [$($required:literal),* $(,)?];
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $op;

            impl Operation for $op {
                const NAME: &'static str = stringify!($op);
                const REQUIRED: &'static [&'static str] = &[$($required),*];
                type Input = $input;
                type Output = $output;
            }
        )*

        /// Names of every operation, alphabetically.
        pub const OPERATION_NAMES: &[&str] = &[$(stringify!($op)),*];

        /// Required fields that do not exist on the operation's input record.
        #[cfg(test)]
        fn undeclared_required_fields() -> Vec<String> {
            let mut undeclared = Vec::new();
            $(
                for field in <$op as Operation>::REQUIRED {
                    if !<$input as Record>::FIELDS.contains(field) {
                        undeclared.push(format!("{}.{}", stringify!($op), field));
                    }
                }
            )*
            undeclared
        }
    };
}

operations! {
    /// Creates a batch of variables.
    BatchCreateVariable(BatchCreateVariableRequest => BatchCreateVariableResult)
        requires ["variableEntries"];
    /// Gets a batch of variables.
    BatchGetVariable(BatchGetVariableRequest => BatchGetVariableResult)
        requires ["names"];
    /// Creates a detector version in `DRAFT` status.
    CreateDetectorVersion(CreateDetectorVersionRequest => CreateDetectorVersionResult)
        requires ["detectorId", "rules"];
    /// Creates a version of the model using the specified model type.
    CreateModelVersion(CreateModelVersionRequest => CreateModelVersionResult)
        requires ["modelId", "modelType"];
    /// Creates a rule for use with the specified detector.
    CreateRule(CreateRuleRequest => CreateRuleResult)
        requires ["ruleId", "detectorId", "expression", "language", "outcomes"];
    /// Creates a variable.
    CreateVariable(CreateVariableRequest => CreateVariableResult)
        requires ["name", "dataType", "dataSource", "defaultValue"];
    /// Deletes a detector with no remaining versions.
    DeleteDetector(DeleteDetectorRequest => DeleteDetectorResult)
        requires ["detectorId"];
    /// Deletes a detector version that is not `ACTIVE`.
    DeleteDetectorVersion(DeleteDetectorVersionRequest => DeleteDetectorVersionResult)
        requires ["detectorId", "detectorVersionId"];
    /// Deletes the specified event.
    DeleteEvent(DeleteEventRequest => DeleteEventResult)
        requires ["eventId"];
    /// Deletes a rule version.
    DeleteRuleVersion(DeleteRuleVersionRequest => DeleteRuleVersionResult)
        requires ["detectorId", "ruleId", "ruleVersion"];
    /// Gets all versions of a detector.
    DescribeDetector(DescribeDetectorRequest => DescribeDetectorResult)
        requires ["detectorId"];
    /// Gets model versions by model type, model ID, or version number.
    DescribeModelVersions(DescribeModelVersionsRequest => DescribeModelVersionsResult)
        requires [];
    /// Gets a particular detector version.
    GetDetectorVersion(GetDetectorVersionRequest => GetDetectorVersionResult)
        requires ["detectorId", "detectorVersionId"];
    /// Gets detectors, one page at a time.
    GetDetectors(GetDetectorsRequest => GetDetectorsResult)
        requires [];
    /// Gets imported external models, one page at a time.
    GetExternalModels(GetExternalModelsRequest => GetExternalModelsResult)
        requires [];
    /// Gets a model version.
    GetModelVersion(GetModelVersionRequest => GetModelVersionResult)
        requires ["modelId", "modelType", "modelVersionNumber"];
    /// Gets models for the account, a model type, or one model.
    GetModels(GetModelsRequest => GetModelsResult)
        requires [];
    /// Gets outcomes, one page at a time.
    GetOutcomes(GetOutcomesRequest => GetOutcomesResult)
        requires [];
    /// Evaluates an event against a detector version.
    GetPrediction(GetPredictionRequest => GetPredictionResult)
        requires ["detectorId", "eventId"];
    /// Gets the rules of a detector.
    GetRules(GetRulesRequest => GetRulesResult)
        requires ["detectorId"];
    /// Gets variables, one page at a time.
    GetVariables(GetVariablesRequest => GetVariablesResult)
        requires [];
    /// Creates or updates a detector.
    PutDetector(PutDetectorRequest => PutDetectorResult)
        requires ["detectorId"];
    /// Creates or updates an external model endpoint.
    PutExternalModel(PutExternalModelRequest => PutExternalModelResult)
        requires [
            "modelEndpoint",
            "modelSource",
            "role",
            "inputConfiguration",
            "outputConfiguration",
            "modelEndpointStatus",
        ];
    /// Creates or updates a model.
    PutModel(PutModelRequest => PutModelResult)
        requires ["modelId", "modelType", "trainingDataSource", "modelVariables", "labelSchema"];
    /// Creates or updates an outcome.
    PutOutcome(PutOutcomeRequest => PutOutcomeResult)
        requires ["name"];
    /// Updates the models, endpoints, rules and description of a `DRAFT` detector version.
    UpdateDetectorVersion(UpdateDetectorVersionRequest => UpdateDetectorVersionResult)
        requires ["detectorId", "detectorVersionId", "externalModelEndpoints", "rules"];
    /// Updates a detector version's description, whatever its status.
    UpdateDetectorVersionMetadata(UpdateDetectorVersionMetadataRequest => UpdateDetectorVersionMetadataResult)
        requires ["detectorId", "detectorVersionId", "description"];
    /// Promotes or demotes a detector version.
    UpdateDetectorVersionStatus(UpdateDetectorVersionStatusRequest => UpdateDetectorVersionStatusResult)
        requires ["detectorId", "detectorVersionId", "status"];
    /// Updates a model version's description and status.
    UpdateModelVersion(UpdateModelVersionRequest => UpdateModelVersionResult)
        requires ["modelId", "modelType", "modelVersionNumber", "description", "status"];
    /// Updates a rule's metadata.
    UpdateRuleMetadata(UpdateRuleMetadataRequest => UpdateRuleMetadataResult)
        requires ["rule", "description"];
    /// Updates a rule version, producing a new rule version.
    UpdateRuleVersion(UpdateRuleVersionRequest => UpdateRuleVersionResult)
        requires ["rule", "expression", "language", "outcomes"];
    /// Updates a variable.
    UpdateVariable(UpdateVariableRequest => UpdateVariableResult)
        requires ["name"];
}
