//! JSON wire representation of records.
//!
//! - Absent fields are omitted, never written as `null`.
//! - Unknown fields are ignored when decoding.
//! - Missing fields and explicit `null` both decode to absent.
//! - An unrecognized enum string is a hard decoding failure, reported as
//!   [`ModelError::InvalidEnumValue`] rather than a generic codec error.

use std::cell::RefCell;

use serde_json::Value;

use crate::framework::{ModelError, Record};

thread_local! {
    static ENUM_FAILURE: RefCell<Option<ModelError>> = const { RefCell::new(None) };
}

/// Remembers the enum parse failure behind the serde error being raised.
///
/// Called by the generated `Deserialize` impls; picked up by [`decode`].
pub(crate) fn note_enum_failure(error: &ModelError) {
    ENUM_FAILURE.with(|slot| *slot.borrow_mut() = Some(error.clone()));
}

fn take_enum_failure() -> Option<ModelError> {
    ENUM_FAILURE.with(|slot| slot.borrow_mut().take())
}

/// Runs a serde_json decode, surfacing a noted enum failure in place of the
/// flattened serde error.
fn decode<R>(run: impl FnOnce() -> Result<R, serde_json::Error>) -> Result<R, ModelError> {
    take_enum_failure();
    run().map_err(|e| take_enum_failure().unwrap_or_else(|| e.into()))
}

/// Serializes a record to its JSON text.
pub fn to_wire<R: Record>(record: &R) -> Result<String, ModelError> {
    Ok(serde_json::to_string(record)?)
}

/// Serializes a record to a JSON value.
pub fn to_wire_value<R: Record>(record: &R) -> Result<Value, ModelError> {
    Ok(serde_json::to_value(record)?)
}

/// Decodes a record from JSON text.
///
/// A blank body decodes to a record with every field absent.
pub fn from_wire<R: Record>(wire: &str) -> Result<R, ModelError> {
    if wire.trim().is_empty() {
        return Ok(R::default());
    }
    decode(|| serde_json::from_str(wire))
}

/// Decodes a record from a JSON value.
pub fn from_wire_value<R: Record>(value: Value) -> Result<R, ModelError> {
    decode(|| serde_json::from_value(value))
}
