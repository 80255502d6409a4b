//! Dialect driver trait definition

use crate::{ConnectionRecord, ConnectionString, DbDialError, PlaceholderFormat, Result, StatementBuilder};
use std::fmt;
use std::str::FromStr;

/// Supported database dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dialect {
    MySql,
    Oracle,
    SqlServer,
}

impl Dialect {
    /// Every supported dialect, in registration order
    pub const ALL: [Dialect; 3] = [Dialect::MySql, Dialect::Oracle, Dialect::SqlServer];

    /// Configuration tag (e.g. "mysql", "sqlserver")
    pub fn tag(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Oracle => "oracle",
            Dialect::SqlServer => "sqlserver",
        }
    }

    /// Native placeholder syntax of this dialect
    pub fn placeholder_format(&self) -> PlaceholderFormat {
        match self {
            Dialect::MySql => PlaceholderFormat::Question,
            Dialect::Oracle => PlaceholderFormat::Colon,
            Dialect::SqlServer => PlaceholderFormat::AtP,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Dialect {
    type Err = DbDialError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "mysql" => Ok(Dialect::MySql),
            "oracle" => Ok(Dialect::Oracle),
            "sqlserver" => Ok(Dialect::SqlServer),
            "" => Err(DbDialError::Configuration("Missing driver".to_string())),
            other => Err(DbDialError::Configuration(format!(
                "Unsupported driver [{}]",
                other
            ))),
        }
    }
}

/// Trait implemented by every dialect crate
pub trait DialectDriver: Send + Sync {
    /// The dialect this driver serves
    fn dialect(&self) -> Dialect;

    /// Configuration tag (e.g. "mysql")
    fn id(&self) -> &'static str {
        self.dialect().tag()
    }

    /// Display name for logs and the CLI
    fn display_name(&self) -> &'static str;

    /// Identifier of the client library used to open connections
    fn driver_name(&self) -> &'static str;

    /// Connection string format help text
    fn connection_string_help(&self) -> &'static str {
        ""
    }

    /// Build the structured DSN for a record
    fn connection_string(&self, record: &ConnectionRecord) -> ConnectionString;

    /// Build the serialized DSN for a record
    fn build_dsn(&self, record: &ConnectionRecord) -> String {
        let dsn = self.connection_string(record);
        tracing::debug!(
            name = %record.name,
            driver = self.id(),
            dsn = %dsn.redacted(),
            "built connection string"
        );
        dsn.to_string()
    }

    /// Native placeholder syntax
    fn placeholder_format(&self) -> PlaceholderFormat {
        self.dialect().placeholder_format()
    }

    /// Statement builder bound to this dialect's placeholder syntax
    fn statement_builder(&self) -> StatementBuilder {
        StatementBuilder::new(self.dialect())
    }
}
