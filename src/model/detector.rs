//! Detectors and detector versions.

use crate::framework::macros::record;
use crate::model::DetectorVersionStatus;

record! {
    /// A detector: the container rules and model versions are evaluated in.
    pub struct Detector {
        detector_id: scalar String => "detectorId",
        description: scalar String => "description",
        last_updated_time: scalar String => "lastUpdatedTime",
        created_time: scalar String => "createdTime",
    }
}

record! {
    /// Summary of one version of a detector.
    pub struct DetectorVersionSummary {
        detector_version_id: scalar String => "detectorVersionId",
        status: scalar DetectorVersionStatus => "status",
        description: scalar String => "description",
        last_updated_time: scalar String => "lastUpdatedTime",
    }
}
