//! MySQL dialect driver

use dbdial_core::{ConnectionRecord, ConnectionString, Credentials, Dialect, DialectDriver};

use crate::encode_params;

/// MySQL dialect driver
pub struct MySqlDriver;

impl MySqlDriver {
    /// Create a new MySQL driver instance
    pub fn new() -> Self {
        tracing::debug!("MySQL driver initialized");
        Self
    }
}

impl Default for MySqlDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectDriver for MySqlDriver {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn display_name(&self) -> &'static str {
        "MySQL"
    }

    fn driver_name(&self) -> &'static str {
        "mysql"
    }

    fn connection_string_help(&self) -> &'static str {
        "user:password@tcp(host:port)/database?param=value"
    }

    fn connection_string(&self, record: &ConnectionRecord) -> ConnectionString {
        ConnectionString::new(format!("tcp({})", record.host))
            .credentials(Credentials::user_password(
                record.username.as_str(),
                record.password.as_str(),
            ))
            .path(record.database.as_str())
            .params(encode_params(record))
    }
}
