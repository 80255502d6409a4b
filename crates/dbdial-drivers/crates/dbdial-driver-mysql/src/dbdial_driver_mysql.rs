//! MySQL dialect for DbDial
//!
//! Builds go-sql-driver style DSNs (`user:pass@tcp(host)/db?params`) and
//! encodes free-form parameters into driver options or session variables.

mod driver;
mod options;

#[cfg(test)]
mod driver_tests;
#[cfg(test)]
mod options_tests;

pub use driver::MySqlDriver;
pub use options::{MYSQL_DRIVER_OPTIONS, encode_params, is_driver_option};
