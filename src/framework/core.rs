//! # Core Record Contract
//!
//! This module defines the generic building blocks every generated model implements.
//!
//! ## Key Types
//!
//! - [`WireEnum`]: Closed enumerations with a bijective wire-string mapping.
//! - [`Structural`]: Stable structural hashing and diagnostic rendering.
//! - [`Record`]: The trait all request, result and shared records implement.
//! - [`ModelError`]: Errors raised at the record and codec boundary.

use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

// =============================================================================
// 1. ERRORS
// =============================================================================

/// Errors raised by enumerations, records and the JSON codec.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ModelError {
    /// A wire string did not name any variant of the enumeration.
    ///
    /// An empty `value` means the string was empty or absent.
    #[error("Invalid {enum_name} value: {value:?}")]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
    },

    /// A field required by an operation was absent.
    #[error("Malformed {record}: missing required field `{field}`")]
    MalformedRecord {
        record: &'static str,
        field: &'static str,
    },

    /// A map entry was added under a key that is already present.
    #[error("Duplicated key {key:?} provided for `{field}`")]
    DuplicateKey { field: &'static str, key: String },

    /// The JSON representation could not be produced or parsed.
    #[error("Codec error: {0}")]
    Codec(String),
}

impl ModelError {
    pub(crate) fn invalid_enum(enum_name: &'static str, value: impl Into<String>) -> Self {
        ModelError::InvalidEnumValue {
            enum_name,
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Codec(e.to_string())
    }
}

// =============================================================================
// 2. ENUMERATED VALUES
// =============================================================================

/// A closed set of variants, each carrying exactly one canonical wire string.
///
/// Implementations are generated by [`wire_enum!`](crate::framework::macros),
/// which emits an exhaustive `match` in both directions. Parsing is exact:
/// no trimming, no case folding, no default variant.
pub trait WireEnum: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// The canonical wire string. Total, never fails.
    fn as_wire(&self) -> &'static str;

    /// Parses a wire string, failing on empty or unknown input.
    fn from_wire(value: &str) -> Result<Self, ModelError>;

    /// Parses an optional wire string; an absent string is an error.
    fn from_wire_opt(value: Option<&str>) -> Result<Self, ModelError> {
        match value {
            Some(value) => Self::from_wire(value),
            None => Err(ModelError::invalid_enum(Self::NAME, "")),
        }
    }

    /// Every variant, in declaration order.
    fn variants() -> Vec<Self>;
}

// =============================================================================
// 3. STRUCTURAL HASH & RENDERING
// =============================================================================

/// Seed every record hash starts from.
pub const HASH_SEED: i32 = 1;

/// Multiplier applied before folding in each field hash.
pub const HASH_PRIME: i32 = 31;

/// Folds one component hash into an accumulated hash.
pub fn fold_hash(acc: i32, component: i32) -> i32 {
    acc.wrapping_mul(HASH_PRIME).wrapping_add(component)
}

/// Polynomial hash over the characters of a string.
pub fn hash_str(value: &str) -> i32 {
    value.chars().fold(0, |acc, c| fold_hash(acc, c as i32))
}

/// Value equality, stable process-independent hashing and diagnostic rendering.
///
/// `structural_eq` is reflexive for every value, `NaN` included, and values it
/// deems equal always produce equal `structural_hash` results. The rendering is
/// for diagnostics only and is never parsed back.
pub trait Structural {
    fn structural_eq(&self, other: &Self) -> bool;

    fn structural_hash(&self) -> i32;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Structural for String {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn structural_hash(&self) -> i32 {
        hash_str(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Structural for i32 {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn structural_hash(&self) -> i32 {
        *self
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Structural for bool {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn structural_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Bit pattern every `NaN` hashes as.
const CANONICAL_NAN_BITS: u32 = 0x7fc0_0000;

impl Structural for f32 {
    /// IEEE equality, except that any two `NaN`s are equal.
    fn structural_eq(&self, other: &Self) -> bool {
        self == other || (self.is_nan() && other.is_nan())
    }

    fn structural_hash(&self) -> i32 {
        // 0.0 == -0.0, so both must hash alike; likewise every NaN payload.
        if *self == 0.0 {
            0
        } else if self.is_nan() {
            CANONICAL_NAN_BITS as i32
        } else {
            self.to_bits() as i32
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T: Structural> Structural for Vec<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(a, b)| a.structural_eq(b))
    }

    fn structural_hash(&self) -> i32 {
        self.iter()
            .fold(HASH_SEED, |acc, item| fold_hash(acc, item.structural_hash()))
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<T: Structural> Structural for BTreeMap<String, T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((ka, va), (kb, vb))| ka == kb && va.structural_eq(vb))
    }

    fn structural_hash(&self) -> i32 {
        self.iter().fold(0, |acc, (key, value)| {
            acc.wrapping_add(key.structural_hash() ^ value.structural_hash())
        })
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=", key)?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

// =============================================================================
// 4. STRUCTURED RECORDS
// =============================================================================

/// Trait implemented by every structured record (requests, results and shared shapes).
///
/// # Contract
/// - Records start with every field absent ([`Default`]).
/// - Equality is presence-aware and recursive ([`PartialEq`] delegates to
///   [`Structural::structural_eq`]).
/// - [`Structural::structural_hash`] folds field hashes in declaration order,
///   contributing `0` for absent fields.
/// - Serialization omits absent fields; deserialization ignores unknown ones.
///
/// Implementations are generated by [`record!`](crate::framework::macros).
pub trait Record:
    Structural + Clone + Default + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Record type name.
    const NAME: &'static str;

    /// Wire names of every field, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Whether the field with the given wire name is present.
    ///
    /// Unknown names are reported as absent.
    fn is_present(&self, wire_name: &str) -> bool;

    /// Wire names of the present fields, in declaration order.
    fn present_fields(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .copied()
            .filter(|name| self.is_present(name))
            .collect()
    }

    /// Fails with [`ModelError::MalformedRecord`] on the first absent field in `required`.
    fn require(&self, required: &[&'static str]) -> Result<(), ModelError> {
        match required.iter().find(|name| !self.is_present(name)) {
            Some(&field) => Err(ModelError::MalformedRecord {
                record: Self::NAME,
                field,
            }),
            None => Ok(()),
        }
    }
}
