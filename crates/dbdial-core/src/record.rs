//! Static field tables for arbitrary record types
//!
//! Field-level operations (timezone correction, CHAR padding trim) work on
//! any record that declares its fields through [`RecordFields`]. The
//! [`record_fields!`](crate::record_fields) macro generates the table and
//! accessors for a plain struct:
//!
//! ```ignore
//! struct Order {
//!     id: i64,
//!     code: String,
//!     ordered_at: Timestamp,
//!     shipped_at: Timestamp,
//! }
//!
//! dbdial_core::record_fields! {
//!     Order {
//!         id: other,
//!         code: text,
//!         ordered_at: timestamp,
//!         shipped_at: timestamp,
//!     }
//! }
//!
//! assert_eq!(timestamp_fields::<Order>(), vec!["ordered_at", "shipped_at"]);
//! ```

use crate::{DbDialError, FieldAccessReason, Result};
use chrono::DateTime;
use chrono_tz::Tz;

/// A zone-stamped timestamp as returned by the drivers
pub type Timestamp = DateTime<Tz>;

/// Kind of value a declared field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Timestamp,
    Text,
    Other,
}

/// One declared field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A record type that declares its fields statically
pub trait RecordFields {
    /// All fields in declaration order
    fn field_defs() -> &'static [FieldDef];

    /// Mutable access to a timestamp field
    fn timestamp_mut(&mut self, name: &str) -> Option<&mut Timestamp>;

    /// Mutable access to a text field
    fn text_mut(&mut self, _name: &str) -> Option<&mut String> {
        None
    }
}

/// Names of all timestamp fields of `R`, in declaration order
pub fn timestamp_fields<R: RecordFields>() -> Vec<&'static str> {
    R::field_defs()
        .iter()
        .filter(|def| def.kind == FieldKind::Timestamp)
        .map(|def| def.name)
        .collect()
}

/// Check that `name` is declared with the expected kind
pub(crate) fn check_field<R: RecordFields>(name: &str, expected: FieldKind) -> Result<()> {
    let def = R::field_defs()
        .iter()
        .find(|def| def.name == name)
        .ok_or_else(|| DbDialError::field(name, FieldAccessReason::Missing))?;

    if def.kind != expected {
        let reason = match expected {
            FieldKind::Text => FieldAccessReason::NotText,
            _ => FieldAccessReason::NotTimestamp,
        };
        return Err(DbDialError::field(name, reason));
    }
    Ok(())
}

/// Trim surrounding whitespace from every text field.
///
/// CHAR columns come back padded with spaces up to the column width.
pub fn trim_padded_text<R: RecordFields>(record: &mut R) -> Result<()> {
    for def in R::field_defs().iter().filter(|def| def.kind == FieldKind::Text) {
        let value = record
            .text_mut(def.name)
            .ok_or_else(|| DbDialError::field(def.name, FieldAccessReason::NotText))?;
        let trimmed = value.trim();
        if trimmed.len() != value.len() {
            *value = trimmed.to_string();
        }
    }
    Ok(())
}

/// Implement [`RecordFields`] for a struct from a list of `field: kind`
/// pairs, where kind is one of `timestamp`, `text` or `other`.
#[macro_export]
macro_rules! record_fields {
    ($record:ident { $($field:ident : $kind:ident),* $(,)? }) => {
        impl $crate::RecordFields for $record {
            fn field_defs() -> &'static [$crate::FieldDef] {
                const FIELDS: &[$crate::FieldDef] = &[
                    $($crate::FieldDef::new(stringify!($field), $crate::__field_kind!($kind)),)*
                ];
                FIELDS
            }

            #[allow(unreachable_patterns)]
            fn timestamp_mut(&mut self, name: &str) -> Option<&mut $crate::Timestamp> {
                match name {
                    $(stringify!($field) => $crate::__field_as_timestamp!($kind, &mut self.$field),)*
                    _ => None,
                }
            }

            #[allow(unreachable_patterns)]
            fn text_mut(&mut self, name: &str) -> Option<&mut String> {
                match name {
                    $(stringify!($field) => $crate::__field_as_text!($kind, &mut self.$field),)*
                    _ => None,
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_kind {
    (timestamp) => {
        $crate::FieldKind::Timestamp
    };
    (text) => {
        $crate::FieldKind::Text
    };
    (other) => {
        $crate::FieldKind::Other
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_as_timestamp {
    (timestamp, $place:expr) => {
        Some($place)
    };
    ($other:ident, $place:expr) => {
        None
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_as_text {
    (text, $place:expr) => {
        Some($place)
    };
    ($other:ident, $place:expr) => {
        None
    };
}
