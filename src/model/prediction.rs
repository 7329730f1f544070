//! Shapes used by prediction requests and results.

use crate::framework::macros::record;
use crate::model::ModelVersion;

record! {
    /// Raw payload forwarded to an external model endpoint.
    pub struct ModelEndpointDataBlob {
        /// Base64-encoded payload bytes.
        byte_buffer: scalar String => "byteBuffer",
        content_type: scalar String => "contentType",
    }
}

record! {
    /// Scores one model version produced for an event.
    pub struct ModelScores {
        model_version: scalar ModelVersion => "modelVersion",
        scores: map f32 => "scores",
    }
}
