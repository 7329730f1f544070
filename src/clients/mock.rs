//! # Mock Dispatcher
//!
//! Utilities for testing client code without a transport.
//!
//! [`MockDispatcher`] answers requests from a queue of expectations, in order,
//! and records every request it sees so tests can inspect the marshalled form.
//!
//! ```ignore
//! let mut mock = MockDispatcher::new();
//! mock.expect::<GetDetectors>().return_ok(r#"{"detectors":[]}"#);
//!
//! let client = FraudDetectorClient::new(mock.clone());
//! client.get_detectors(GetDetectorsRequest::new()).await?;
//! mock.verify();
//! ```
//!
//! For channel-backed clients, [`expect_request`] pulls the next in-flight
//! request off the receiver.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::clients::dispatch::{Dispatch, DispatchRequest, Responder, WireRequest, WireResponse};
use crate::clients::error::{ClientError, ServiceErrorKind, ERROR_TYPE_HEADER};
use crate::framework::{codec, Record};
use crate::operations::Operation;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

struct Expectation {
    operation: &'static str,
    response: Result<WireResponse, ClientError>,
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A dispatcher that replays queued responses and records requests.
///
/// Clones share the same queue and request log.
#[derive(Clone, Default)]
pub struct MockDispatcher {
    expectations: Queue,
    requests: Arc<Mutex<Vec<WireRequest>>>,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next request to invoke `O`.
    pub fn expect<O: Operation>(&mut self) -> ExpectationBuilder {
        ExpectationBuilder {
            operation: O::NAME,
            expectations: self.expectations.clone(),
        }
    }

    /// Every request dispatched so far, oldest first.
    pub fn requests(&self) -> Vec<WireRequest> {
        lock(&self.requests).clone()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl Dispatch for MockDispatcher {
    async fn dispatch(&self, request: WireRequest) -> Result<WireResponse, ClientError> {
        let operation = request.operation;
        lock(&self.requests).push(request);

        let expectation = lock(&self.expectations).pop_front();
        match expectation {
            Some(expectation) if expectation.operation == operation => expectation.response,
            Some(expectation) => panic!(
                "Unexpected request: expected {}, got {}",
                expectation.operation, operation
            ),
            None => panic!("Unexpected request: {}", operation),
        }
    }
}

/// Sets the response for one expected request.
pub struct ExpectationBuilder {
    operation: &'static str,
    expectations: Queue,
}

impl ExpectationBuilder {
    fn push(self, response: Result<WireResponse, ClientError>) {
        lock(&self.expectations).push_back(Expectation {
            operation: self.operation,
            response,
        });
    }

    /// Responds `200` with the given JSON body.
    pub fn return_ok(self, body: impl Into<String>) {
        self.push(Ok(WireResponse::ok(body)));
    }

    /// Responds `200` with the encoded record.
    pub fn return_record<R: Record>(self, record: &R) {
        let body = codec::to_wire(record)
            .unwrap_or_else(|e| panic!("cannot encode mock response: {}", e));
        self.return_ok(body);
    }

    /// Responds with an error status carrying the given error kind and message.
    pub fn return_status(self, status: u16, kind: ServiceErrorKind, message: &str) {
        let body = serde_json::json!({ "__type": kind.code(), "message": message }).to_string();
        self.push(Ok(WireResponse::with_status(status, body)
            .with_header(ERROR_TYPE_HEADER, kind.code())
            .with_header("x-amzn-RequestId", "mock-request")));
    }

    /// Responds with the given raw response.
    pub fn return_response(self, response: WireResponse) {
        self.push(Ok(response));
    }

    /// Fails the dispatch itself.
    pub fn return_err(self, error: ClientError) {
        self.push(Err(error));
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Pulls the next request off a channel dispatcher's receiver.
pub async fn expect_request(
    receiver: &mut mpsc::Receiver<DispatchRequest>,
) -> Option<(WireRequest, Responder)> {
    receiver
        .recv()
        .await
        .map(|DispatchRequest { request, respond_to }| (request, respond_to))
}
