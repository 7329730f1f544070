//! # Dispatch Seam
//!
//! The boundary between marshalled requests and whatever carries them.
//!
//! [`Dispatch`] takes a [`WireRequest`] and answers with a [`WireResponse`].
//! The client never talks to a transport directly, so HTTP stacks, test mocks
//! and in-process channels all plug in the same way.
//!
//! [`ChannelDispatcher`] forwards each request over a Tokio `mpsc` channel with a
//! `oneshot` reply, leaving the receiving task free to answer however it likes.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::clients::error::ClientError;

/// Content type of every request body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Header naming the operation being invoked.
pub const TARGET_HEADER: &str = "X-Amz-Target";

fn find_header<'a>(headers: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

// =============================================================================
// 1. WIRE MESSAGES
// =============================================================================

/// A fully marshalled request.
#[derive(Debug, Clone, PartialEq)]
pub struct WireRequest {
    /// Operation name, for routing and logging.
    pub operation: &'static str,
    /// Endpoint URL including scheme.
    pub endpoint: String,
    /// HTTP method; always `POST`.
    pub method: &'static str,
    /// Request path; always `/`.
    pub path: &'static str,
    pub headers: BTreeMap<String, String>,
    /// JSON body; `{}` when the request has no present fields.
    pub body: String,
}

impl WireRequest {
    /// Looks up a header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A raw response as returned by a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct WireResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl WireResponse {
    /// A `200` response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Looks up a header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// 2. DISPATCH TRAIT
// =============================================================================

/// Sends a marshalled request and waits for the raw response.
///
/// Implementations report transport failures as [`ClientError`]; a non-success
/// status is a valid response, not an error, at this layer.
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, request: WireRequest) -> Result<WireResponse, ClientError>;
}

// =============================================================================
// 3. CHANNEL DISPATCHER
// =============================================================================

pub type Responder = oneshot::Sender<Result<WireResponse, ClientError>>;

/// A request in flight on a [`ChannelDispatcher`], with its reply channel.
#[derive(Debug)]
pub struct DispatchRequest {
    pub request: WireRequest,
    pub respond_to: Responder,
}

/// Forwards requests to a task holding the matching receiver.
#[derive(Clone)]
pub struct ChannelDispatcher {
    sender: mpsc::Sender<DispatchRequest>,
}

impl ChannelDispatcher {
    /// Creates a dispatcher and the receiver that must answer its requests.
    pub fn new(buffer_size: usize) -> (Self, mpsc::Receiver<DispatchRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { sender }, receiver)
    }

    pub fn from_sender(sender: mpsc::Sender<DispatchRequest>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl Dispatch for ChannelDispatcher {
    async fn dispatch(&self, request: WireRequest) -> Result<WireResponse, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DispatchRequest { request, respond_to })
            .await
            .map_err(|_| ClientError::DispatchClosed)?;
        response.await.map_err(|_| ClientError::DispatchDropped)?
    }
}
