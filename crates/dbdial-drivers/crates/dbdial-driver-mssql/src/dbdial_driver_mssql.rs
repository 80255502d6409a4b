//! SQL Server dialect for DbDial

mod driver;

#[cfg(test)]
mod driver_tests;

pub use driver::MssqlDriver;
