//! Event evaluation.

use crate::framework::macros::record;
use crate::model::{ModelEndpointDataBlob, ModelScores, RuleResult};

record! {
    /// Evaluates an event against a detector version.
    ///
    /// Without `detectorVersionId` the detector's `ACTIVE` version is used.
    pub struct GetPredictionRequest {
        detector_id: scalar String => "detectorId",
        detector_version_id: scalar String => "detectorVersionId",
        event_id: scalar String => "eventId",
        event_attributes: map String => "eventAttributes",
        external_model_endpoint_data_blobs: map ModelEndpointDataBlob => "externalModelEndpointDataBlobs",
    }
}

record! {
    pub struct GetPredictionResult {
        outcomes: list String => "outcomes",
        model_scores: list ModelScores => "modelScores",
        rule_results: list RuleResult => "ruleResults",
    }
}
