//! Error types for DbDial

use thiserror::Error;

/// Why a named field could not be used by a field-level operation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAccessReason {
    #[error("no such field")]
    Missing,

    #[error("field is not a timestamp")]
    NotTimestamp,

    #[error("field is not text")]
    NotText,
}

/// Core error type for DbDial operations
#[derive(Error, Debug)]
pub enum DbDialError {
    /// Unsupported dialect, bad timezone, invalid pool limits. Never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Field access error on `{field}`: {reason}")]
    FieldAccess {
        field: String,
        reason: FieldAccessReason,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Driver error: {0}")]
    Driver(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DbDialError {
    pub(crate) fn field(field: &str, reason: FieldAccessReason) -> Self {
        DbDialError::FieldAccess {
            field: field.to_string(),
            reason,
        }
    }

    /// Returns true for errors that must abort startup
    pub fn is_configuration(&self) -> bool {
        matches!(self, DbDialError::Configuration(_))
    }
}

/// Result type alias for DbDial operations
pub type Result<T> = std::result::Result<T, DbDialError>;
