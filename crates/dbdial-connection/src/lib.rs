//! DbDial Connection - Repositories over an external database client
//!
//! The database client itself (connection pool, query execution) is an
//! external collaborator reached through [`DatabaseOpener`] and
//! [`DatabaseHandle`]. This crate resolves the dialect driver for a
//! record, opens a handle with the right DSN, applies the pool limits and
//! keeps the timezone needed to correct values read back.

mod handle;
mod manager;
pub mod pool;
mod repository;

#[cfg(test)]
mod testing;

pub use handle::{DatabaseHandle, DatabaseOpener};
pub use manager::ConnectionManager;
pub use pool::PoolLimits;
pub use repository::Repository;
