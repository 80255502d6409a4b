//! DbDial Core - Dialect abstractions shared by every DbDial crate
//!
//! This crate provides the fundamental types and traits that the driver,
//! connection and CLI crates depend on. It defines:
//!
//! - `ConnectionRecord` - One normalized, dialect-independent connection setting
//! - `ConnectionString` - Structured DSN with a single serialization rule
//! - `DialectDriver` - Trait implemented by every dialect crate
//! - `PlaceholderFormat` / `StatementBuilder` - `?` placeholder rewriting
//! - `RecordFields` - Static field tables used by the timezone corrector
//! - `reanchor` / `relabel` - Timezone correction of timestamp fields

mod config;
mod connection_string;
mod driver;
mod error;
mod params;
mod placeholder;
pub mod record;
pub mod timezone;

pub use config::*;
pub use connection_string::*;
pub use driver::*;
pub use error::*;
pub use params::*;
pub use placeholder::*;
pub use record::{FieldDef, FieldKind, RecordFields, Timestamp, timestamp_fields, trim_padded_text};
pub use timezone::{DB_TIME_FORMAT, format_db_time, parse_db_time, reanchor, relabel, resolve_zone};

/// Re-exported so downstream crates name zones without a direct dependency
pub use chrono_tz::Tz;
