//! Declaration macros for enumerations and records.
//!
//! [`wire_enum!`] declares a closed enumeration with its wire strings.
//! [`record!`] declares a structured record whose fields are all optional. Each
//! field is tagged with a kind that picks its accessors:
//!
//! - `scalar T` - getter, `set_x(Option<T>)`, `with_x(impl Into<T>)`.
//! - `list T` - getter returning a slice, `set_x(Option<&[T]>)` (copies), and
//!   `with_x(iter)` which appends to a present sequence or creates one.
//! - `map T` - string-keyed map; `with_x(entries)` replaces,
//!   `add_x_entry(k, v)` inserts (rejecting duplicates), `clear_x_entries()`.
//!
//! ```ignore
//! record! {
//!     pub struct BatchGetVariableRequest {
//!         names: list String => "names",
//!     }
//! }
//! ```

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::strum::EnumIter, ::strum::EnumCount,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::framework::WireEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn as_wire(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            fn from_wire(value: &str) -> Result<Self, $crate::framework::ModelError> {
                match value {
                    $( $wire => Ok(Self::$variant), )+
                    _ => Err($crate::framework::ModelError::InvalidEnumValue {
                        enum_name: stringify!($name),
                        value: value.to_string(),
                    }),
                }
            }

            fn variants() -> Vec<Self> {
                <Self as ::strum::IntoEnumIterator>::iter().collect()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::framework::WireEnum::as_wire(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::framework::ModelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <Self as $crate::framework::WireEnum>::from_wire(value)
            }
        }

        impl $crate::framework::Structural for $name {
            fn structural_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn structural_hash(&self) -> i32 {
                $crate::framework::hash_str($crate::framework::WireEnum::as_wire(self))
            }

            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::framework::WireEnum::as_wire(self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::framework::WireEnum::as_wire(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::framework::WireEnum>::from_wire(&value).map_err(|e| {
                    $crate::framework::codec::note_enum_failure(&e);
                    <D::Error as ::serde::de::Error>::custom(e)
                })
            }
        }
    };
}

macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                $field: Option<$crate::framework::macros::field_type!($kind $ty)>,
            )*
        }

        impl $name {
            /// Creates a record with every field absent.
            pub fn new() -> Self {
                Self::default()
            }

            $( $crate::framework::macros::field_accessors!($kind $field $wire $ty); )*
        }

        impl $crate::framework::Record for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = &[$($wire),*];

            fn is_present(&self, wire_name: &str) -> bool {
                match wire_name {
                    $( $wire => self.$field.is_some(), )*
                    _ => false,
                }
            }
        }

        impl $crate::framework::Structural for $name {
            #[allow(unused_variables)]
            fn structural_eq(&self, other: &Self) -> bool {
                true $(
                    && match (&self.$field, &other.$field) {
                        (Some(a), Some(b)) => $crate::framework::Structural::structural_eq(a, b),
                        (None, None) => true,
                        _ => false,
                    }
                )*
            }

            #[allow(unused_mut)]
            fn structural_hash(&self) -> i32 {
                let mut hash = $crate::framework::HASH_SEED;
                $(
                    hash = $crate::framework::fold_hash(
                        hash,
                        self.$field
                            .as_ref()
                            .map_or(0, $crate::framework::Structural::structural_hash),
                    );
                )*
                hash
            }

            #[allow(unused_mut, unused_variables, unused_assignments)]
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("{")?;
                let mut separator = "";
                $(
                    if let Some(value) = &self.$field {
                        f.write_str(separator)?;
                        f.write_str($wire)?;
                        f.write_str(": ")?;
                        $crate::framework::Structural::render(value, f)?;
                        separator = ", ";
                    }
                )*
                f.write_str("}")
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::framework::Structural::render(self, f)
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::framework::Structural::structural_eq(self, other)
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32($crate::framework::Structural::structural_hash(self));
            }
        }
    };
}

macro_rules! field_type {
    (scalar $ty:ty) => { $ty };
    (list $ty:ty) => { ::std::vec::Vec<$ty> };
    (map $ty:ty) => { ::std::collections::BTreeMap<::std::string::String, $ty> };
}

macro_rules! field_accessors {
    (scalar $field:ident $wire:literal $ty:ty) => {
        ::paste::paste! {
            /// Returns the field, or `None` when absent.
            pub fn $field(&self) -> Option<&$ty> {
                self.$field.as_ref()
            }

            /// Sets the field; `None` clears it.
            pub fn [<set_ $field>](&mut self, value: Option<$ty>) {
                self.$field = value;
            }

            /// Sets the field and returns the record for chaining.
            pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        }
    };
    (list $field:ident $wire:literal $ty:ty) => {
        ::paste::paste! {
            /// Returns the field, or `None` when absent.
            pub fn $field(&self) -> Option<&[$ty]> {
                self.$field.as_deref()
            }

            /// Replaces the sequence with a copy of `values`; `None` clears it.
            pub fn [<set_ $field>](&mut self, values: Option<&[$ty]>) {
                self.$field = values.map($crate::framework::collection::copy_of);
            }

            /// Appends to the sequence, creating it first when absent.
            /// Repeated calls accumulate rather than replace.
            pub fn [<with_ $field>]<V: Into<$ty>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
                $crate::framework::collection::append_or_init(
                    &mut self.$field,
                    values.into_iter().map(Into::into),
                );
                self
            }
        }
    };
    (map $field:ident $wire:literal $ty:ty) => {
        ::paste::paste! {
            /// Returns the field, or `None` when absent.
            pub fn $field(&self) -> Option<&::std::collections::BTreeMap<::std::string::String, $ty>> {
                self.$field.as_ref()
            }

            /// Sets the field; `None` clears it.
            pub fn [<set_ $field>](
                &mut self,
                value: Option<::std::collections::BTreeMap<::std::string::String, $ty>>,
            ) {
                self.$field = value;
            }

            /// Replaces the map with the given entries.
            pub fn [<with_ $field>]<K: Into<::std::string::String>, V: Into<$ty>>(
                mut self,
                entries: impl IntoIterator<Item = (K, V)>,
            ) -> Self {
                $crate::framework::collection::replace_entries(
                    &mut self.$field,
                    entries.into_iter().map(|(key, value)| (key.into(), value.into())),
                );
                self
            }

            /// Adds one entry, creating the map when absent; an existing key is an error.
            pub fn [<add_ $field _entry>](
                mut self,
                key: impl Into<::std::string::String>,
                value: impl Into<$ty>,
            ) -> Result<Self, $crate::framework::ModelError> {
                $crate::framework::collection::insert_entry(
                    &mut self.$field,
                    $wire,
                    key.into(),
                    value.into(),
                )?;
                Ok(self)
            }

            /// Clears the map back to absent.
            pub fn [<clear_ $field _entries>](mut self) -> Self {
                self.$field = None;
                self
            }
        }
    };
}

pub(crate) use {field_accessors, field_type, record, wire_enum};
