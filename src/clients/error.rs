//! Error types for client invocations.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::clients::dispatch::WireResponse;
use crate::framework::ModelError;

/// Header carrying the error code, checked before the body.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

/// Header carrying the service request id.
pub const REQUEST_ID_HEADER: &str = "x-amzn-RequestId";

/// Error kinds the fraud detection service reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    /// The request conflicts with the current state of a resource.
    Conflict,
    /// The service failed while handling the request.
    InternalServer,
    /// The referenced resource does not exist.
    ResourceNotFound,
    /// The request was rate limited.
    Throttling,
    /// The request failed the service's input validation.
    Validation,
    /// Any other error code, kept verbatim.
    Unknown(String),
}

impl ServiceErrorKind {
    /// Classifies an error code.
    ///
    /// Accepts bare codes (`ValidationException`), namespaced codes
    /// (`com.amazon#ValidationException`) and codes with a trailing
    /// `:<details>` suffix as sent in the error-type header.
    pub fn from_code(code: &str) -> Self {
        let code = code.rsplit('#').next().unwrap_or(code);
        let code = code.split(':').next().unwrap_or(code).trim();
        match code {
            "ConflictException" => Self::Conflict,
            "InternalServerException" => Self::InternalServer,
            "ResourceNotFoundException" => Self::ResourceNotFound,
            "ThrottlingException" => Self::Throttling,
            "ValidationException" => Self::Validation,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The wire error code.
    pub fn code(&self) -> &str {
        match self {
            Self::Conflict => "ConflictException",
            Self::InternalServer => "InternalServerException",
            Self::ResourceNotFound => "ResourceNotFoundException",
            Self::Throttling => "ThrottlingException",
            Self::Validation => "ValidationException",
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An error response returned by the service.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{kind} (status {status}): {message}")]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub status: u16,
    pub message: String,
    pub request_id: Option<String>,
}

impl ServiceError {
    /// Decodes a non-success response.
    ///
    /// The code comes from the error-type header when present, else from the
    /// body's `__type` or `code` member. The message is the body's `message`
    /// (or `Message`) member, or the raw body when it is not JSON.
    pub fn from_response(response: &WireResponse) -> Self {
        let body: Option<Value> = serde_json::from_str(&response.body).ok();
        let member = |name: &str| {
            body.as_ref()
                .and_then(|body| body.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let code = response
            .header(ERROR_TYPE_HEADER)
            .map(str::to_string)
            .or_else(|| member("__type"))
            .or_else(|| member("code"))
            .unwrap_or_default();
        let message = member("message")
            .or_else(|| member("Message"))
            .unwrap_or_else(|| match body {
                Some(_) => String::new(),
                None => response.body.trim().to_string(),
            });

        Self {
            kind: ServiceErrorKind::from_code(&code),
            status: response.status,
            message,
            request_id: response.header(REQUEST_ID_HEADER).map(str::to_string),
        }
    }
}

/// Errors that can occur while invoking an operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// The request or response record was rejected or could not be coded.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The service answered with an error response.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The dispatcher is no longer accepting requests.
    #[error("Dispatcher closed")]
    DispatchClosed,

    /// The dispatcher dropped the response channel.
    #[error("Dispatcher dropped response channel")]
    DispatchDropped,

    /// The transport reported a failure.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<String> for ClientError {
    fn from(msg: String) -> Self {
        ClientError::Transport(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_code_variants() {
        assert_eq!(
            ServiceErrorKind::from_code("ValidationException"),
            ServiceErrorKind::Validation
        );
        assert_eq!(
            ServiceErrorKind::from_code("com.amazonaws.frauddetector#ThrottlingException"),
            ServiceErrorKind::Throttling
        );
        assert_eq!(
            ServiceErrorKind::from_code("ResourceNotFoundException:http://internal.amazon.com/"),
            ServiceErrorKind::ResourceNotFound
        );
        assert_eq!(
            ServiceErrorKind::from_code("AccessDeniedException"),
            ServiceErrorKind::Unknown("AccessDeniedException".into())
        );
    }

    #[test]
    fn test_from_response_reads_body() {
        let response = WireResponse::with_status(
            400,
            r#"{"__type":"ValidationException","message":"detectorId is invalid"}"#,
        )
        .with_header("X-Amzn-RequestId", "req-1");

        let error = ServiceError::from_response(&response);
        assert_eq!(error.kind, ServiceErrorKind::Validation);
        assert_eq!(error.status, 400);
        assert_eq!(error.message, "detectorId is invalid");
        assert_eq!(error.request_id.as_deref(), Some("req-1"));
        assert_eq!(
            error.to_string(),
            "ValidationException (status 400): detectorId is invalid"
        );
    }

    #[test]
    fn test_header_wins_over_body() {
        let response = WireResponse::with_status(409, r#"{"__type":"Other","Message":"busy"}"#)
            .with_header(ERROR_TYPE_HEADER, "ConflictException");

        let error = ServiceError::from_response(&response);
        assert_eq!(error.kind, ServiceErrorKind::Conflict);
        assert_eq!(error.message, "busy");
    }

    #[test]
    fn test_non_json_body() {
        let error = ServiceError::from_response(&WireResponse::with_status(500, "upstream timeout\n"));
        assert_eq!(error.kind, ServiceErrorKind::Unknown(String::new()));
        assert_eq!(error.message, "upstream timeout");
    }
}
