//! Request marshalling and response unmarshalling for the JSON 1.1 protocol.

use std::collections::BTreeMap;

use crate::clients::config::ClientConfig;
use crate::clients::dispatch::{WireRequest, WireResponse, CONTENT_TYPE, TARGET_HEADER};
use crate::clients::error::{ClientError, ServiceError};
use crate::framework::{codec, ModelError};
use crate::operations::Operation;

/// Builds the wire request for one invocation of `O`.
pub fn marshall<O: Operation>(
    config: &ClientConfig,
    input: &O::Input,
) -> Result<WireRequest, ModelError> {
    let headers = BTreeMap::from([
        (TARGET_HEADER.to_string(), config.target(O::NAME)),
        ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
    ]);

    Ok(WireRequest {
        operation: O::NAME,
        endpoint: config.endpoint_url(),
        method: "POST",
        path: "/",
        headers,
        body: codec::to_wire(input)?,
    })
}

/// Decodes the result record, or the service error for a non-success status.
pub fn unmarshall<O: Operation>(response: &WireResponse) -> Result<O::Output, ClientError> {
    if !response.is_success() {
        return Err(ServiceError::from_response(response).into());
    }
    Ok(codec::from_wire(&response.body)?)
}
