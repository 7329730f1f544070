#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Fraud Detector Model
//!
//! > **Typed request and result records for a fraud detection API.**
//!
//! This crate declares every record and enumeration the fraud detection service
//! exchanges, on top of one generic contract, and a small async client that
//! moves them over the wire.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One contract, many shapes
//!
//! There are dozens of records, and they all behave the same way:
//! - **Every field is optional**: absent is distinct from empty or zero.
//! - **Equality and hashing are structural**: two records with the same present fields are equal.
//! - **Collections are copied in**: a record never aliases a caller's `Vec` or map.
//!
//! So the behavior is written **once**, in [`framework`], and each record is a
//! short declaration.
//!
//! ### Closed enumerations
//! Enumerations parse their wire strings exactly. An unknown or empty string is
//! an error, never a silent default.
//!
//! ## 🚀 Core Concepts
//!
//! ### Records: `record!`
//! ```ignore
//! record! {
//!     pub struct DeleteDetectorRequest {
//!         detector_id: scalar String => "detectorId",
//!     }
//! }
//! ```
//! This generates the struct, its accessors (`detector_id()`, `set_detector_id()`,
//! `with_detector_id()`), the [`Record`](framework::Record) impl, serde support,
//! `Display` and `Hash`.
//!
//! ### Operations
//! Each operation is a zero-sized type implementing
//! [`Operation`](operations::Operation). It names the request and result
//! records and the fields the request must carry.
//!
//! ### Mocking
//! The client only talks to a [`Dispatch`](clients::Dispatch) implementation.
//! Tests use [`MockDispatcher`](clients::mock::MockDispatcher) to script
//! responses and inspect the marshalled requests.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Record and codec failures are [`ModelError`](framework::ModelError).
//! Client failures are [`ClientError`](clients::ClientError), which wraps model
//! errors and decoded [`ServiceError`](clients::ServiceError)s via `#[from]`.
//!
//! ### 2. Validation at the Boundary
//! Records never validate themselves. Required fields are checked by
//! [`validate`](operations::validate) before a request is dispatched.
//!
//! ### 3. Observability
//! Every client call runs inside a `tracing` span named after the operation.
//! See the [`runtime::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Contract ([`framework`])
//! - **Role**: Generic record, enumeration, hashing and JSON codec machinery.
//! - **Key items**: [`Record`](framework::Record), [`WireEnum`](framework::WireEnum), [`codec`](framework::codec).
//!
//! ### 2. Shared Shapes ([`model`])
//! - **Role**: Enumerations and records reused across operations (rules, variables, models).
//!
//! ### 3. Operations ([`operations`])
//! - **Role**: Request/result records and the [`Operation`](operations::Operation) descriptors.
//!
//! ### 4. The Interface ([`clients`])
//! - **Role**: Marshalling, dispatch and [`FraudDetectorClient`](clients::FraudDetectorClient).
//!
//! ### 5. Runtime ([`runtime`])
//! - **Role**: Tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use frauddetector_model::clients::{ClientConfig, FraudDetectorClient};
//! use frauddetector_model::operations::GetDetectorsRequest;
//!
//! let (client, requests) = FraudDetectorClient::channel(ClientConfig::from_env());
//! // hand `requests` to a task that performs the HTTP exchange
//! let detectors = client.get_detectors(GetDetectorsRequest::new().with_max_results(10)).await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod model;
pub mod operations;
pub mod runtime;
