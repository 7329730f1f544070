//! # Observability & Tracing
//!
//! Structured logging for client invocations.
//!
//! Every call through [`FraudDetectorClient::invoke`](crate::clients::FraudDetectorClient::invoke)
//! opens an `invoke` span carrying the operation name, so all events of one call
//! line up under it.
//!
//! ## Usage
//!
//! ```bash
//! # One line per request and outcome
//! RUST_LOG=info cargo test
//!
//! # Also log the full request record at entry
//! RUST_LOG=debug cargo test
//!
//! # Only this crate
//! RUST_LOG=frauddetector_model=debug cargo test
//! ```
//!
//! ## What Gets Logged
//!
//! With `RUST_LOG=info`:
//!
//! ```text
//! INFO invoke{operation="GetDetectors"}: Sending request endpoint=https://frauddetector.us-east-1.amazonaws.com
//! INFO invoke{operation="GetDetectors"}: Request ok status=200
//! ```
//!
//! With `RUST_LOG=debug` the request record is logged once, before validation:
//!
//! ```text
//! DEBUG invoke{operation="DeleteDetector"}: invoke called input=DeleteDetectorRequest { detector_id: Some("payments") }
//! ```
//!
//! Requests rejected before dispatch and error responses are logged at `warn`
//! with the error attached.

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber from `RUST_LOG`.
///
/// Safe to call more than once; calls after the first subscriber is installed
/// do nothing.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
