//! Client side of the API: marshalling, dispatch and the typed client.
//!
//! # Main Components
//!
//! - [`FraudDetectorClient`] - One async method per operation
//! - [`Dispatch`] - Transport seam, with [`ChannelDispatcher`] as the in-process implementation
//! - [`ClientConfig`] - Endpoint and target addressing
//! - [`ClientError`] / [`ServiceError`] - Failures, including decoded service errors
//!
//! # Testing
//!
//! See the [`mock`] module for a dispatcher that answers from a queue of expectations.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod fraud_detector_client;
pub mod marshal;
pub mod mock;

pub use config::*;
pub use dispatch::*;
pub use error::*;
pub use fraud_detector_client::*;
