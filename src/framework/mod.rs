//! Generic structured-value contract shared by every model.
//!
//! This module provides the building blocks the generated records and
//! enumerations are made of, independent of any particular API shape.
//!
//! # Main Components
//!
//! - [`WireEnum`] - Closed enumerations with exact wire-string parsing
//! - [`Record`] - Optional-field aggregates with presence-aware equality
//! - [`Structural`] - Stable hashing and diagnostic rendering
//! - [`collection`] - Defensive-copy and append-or-create helpers
//! - [`codec`] - JSON wire representation
//! - [`ModelError`] - Common error types

pub mod codec;
pub mod collection;
pub mod core;
pub(crate) mod macros;

// Re-export core types for convenience
pub use core::*;
