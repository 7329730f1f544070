//! Detector and detector version operations.

use crate::framework::macros::record;
use crate::model::{Detector, DetectorVersionStatus, DetectorVersionSummary, ModelVersion, Rule};

record! {
    pub struct PutDetectorRequest {
        detector_id: scalar String => "detectorId",
        description: scalar String => "description",
    }
}

record! {
    pub struct PutDetectorResult {}
}

record! {
    pub struct DeleteDetectorRequest {
        detector_id: scalar String => "detectorId",
    }
}

record! {
    pub struct DeleteDetectorResult {}
}

record! {
    pub struct DescribeDetectorRequest {
        detector_id: scalar String => "detectorId",
        next_token: scalar String => "nextToken",
        max_results: scalar i32 => "maxResults",
    }
}

record! {
    pub struct DescribeDetectorResult {
        detector_id: scalar String => "detectorId",
        detector_version_summaries: list DetectorVersionSummary => "detectorVersionSummaries",
        next_token: scalar String => "nextToken",
    }
}

record! {
    /// Lists detectors, or the one identified. Paginated through `nextToken`.
    pub struct GetDetectorsRequest {
        detector_id: scalar String => "detectorId",
        next_token: scalar String => "nextToken",
        max_results: scalar i32 => "maxResults",
    }
}

record! {
    pub struct GetDetectorsResult {
        detectors: list Detector => "detectors",
        next_token: scalar String => "nextToken",
    }
}

record! {
    /// Creates a detector version; it starts in `DRAFT` status.
    pub struct CreateDetectorVersionRequest {
        detector_id: scalar String => "detectorId",
        description: scalar String => "description",
        external_model_endpoints: list String => "externalModelEndpoints",
        rules: list Rule => "rules",
        model_versions: list ModelVersion => "modelVersions",
    }
}

record! {
    pub struct CreateDetectorVersionResult {
        detector_id: scalar String => "detectorId",
        detector_version_id: scalar String => "detectorVersionId",
        status: scalar DetectorVersionStatus => "status",
    }
}

record! {
    pub struct DeleteDetectorVersionRequest {
        detector_id: scalar String => "detectorId",
        detector_version_id: scalar String => "detectorVersionId",
    }
}

record! {
    pub struct DeleteDetectorVersionResult {}
}

record! {
    pub struct GetDetectorVersionRequest {
        detector_id: scalar String => "detectorId",
        detector_version_id: scalar String => "detectorVersionId",
    }
}

record! {
    pub struct GetDetectorVersionResult {
        detector_id: scalar String => "detectorId",
        detector_version_id: scalar String => "detectorVersionId",
        description: scalar String => "description",
        external_model_endpoints: list String => "externalModelEndpoints",
        model_versions: list ModelVersion => "modelVersions",
        rules: list Rule => "rules",
        status: scalar DetectorVersionStatus => "status",
        last_updated_time: scalar String => "lastUpdatedTime",
        created_time: scalar String => "createdTime",
    }
}

record! {
    /// Replaces the models, endpoints and rules of a `DRAFT` detector version.
    pub struct UpdateDetectorVersionRequest {
        detector_id: scalar String => "detectorId",
        detector_version_id: scalar String => "detectorVersionId",
        external_model_endpoints: list String => "externalModelEndpoints",
        rules: list Rule => "rules",
        description: scalar String => "description",
        model_versions: list ModelVersion => "modelVersions",
    }
}

record! {
    pub struct UpdateDetectorVersionResult {}
}

record! {
    pub struct UpdateDetectorVersionMetadataRequest {
        detector_id: scalar String => "detectorId",
        detector_version_id: scalar String => "detectorVersionId",
        description: scalar String => "description",
    }
}

record! {
    pub struct UpdateDetectorVersionMetadataResult {}
}

record! {
    /// Moves a version `DRAFT` to `ACTIVE`, `ACTIVE` to `INACTIVE`, or `INACTIVE` to `ACTIVE`.
    pub struct UpdateDetectorVersionStatusRequest {
        detector_id: scalar String => "detectorId",
        detector_version_id: scalar String => "detectorVersionId",
        status: scalar DetectorVersionStatus => "status",
    }
}

record! {
    pub struct UpdateDetectorVersionStatusResult {}
}
