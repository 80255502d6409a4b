//! DbDial Drivers - Dialect driver implementations
//!
//! This crate collects the dialect drivers behind the `DialectDriver` trait
//! defined in `dbdial-core` and resolves them by configuration tag.

#[cfg(feature = "mssql")]
pub use dbdial_driver_mssql as mssql;
#[cfg(feature = "mysql")]
pub use dbdial_driver_mysql as mysql;
#[cfg(feature = "oracle")]
pub use dbdial_driver_oracle as oracle;

mod registry;

pub use registry::{DriverRegistry, build_dsn, default_registry, driver_name, statement_builder};

/// Re-export commonly used types from dbdial-core
pub use dbdial_core::{
    ConnectionRecord, ConnectionString, DbDialError, Dialect, DialectDriver, PlaceholderFormat,
    Result, StatementBuilder,
};
