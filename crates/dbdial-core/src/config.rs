//! Connection records and YAML configuration loading
//!
//! A configuration file is a YAML list of records:
//!
//! ```yaml
//! - name: primary
//!   driver: mysql
//!   host: localhost:3306
//!   user: app
//!   pass: secret
//!   database: app
//!   tz: Asia/Tokyo
//!   max_open_conn: 8
//!   max_idle_conn: 8
//!   max_lifetime: 8000   # milliseconds
//!   params:
//!     charset: utf8mb4
//!     autocommit: true
//! ```

use crate::{DbDialError, Dialect, ParamValue, Result, resolve_zone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::time::Duration;

/// One normalized connection setting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    /// Connection identity
    #[serde(default)]
    pub name: String,
    /// Dialect tag ("mysql", "oracle", "sqlserver")
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub host: String,
    #[serde(rename = "user", default)]
    pub username: String,
    #[serde(rename = "pass", default)]
    pub password: String,
    #[serde(default)]
    pub database: String,
    /// IANA zone identifier of the database server; empty means UTC
    #[serde(rename = "tz", default)]
    pub timezone: String,
    /// Maximum open connections; negative means unlimited, 0 is rejected
    #[serde(rename = "max_open_conn", default)]
    pub max_open: i32,
    /// Maximum idle connections; values <= 0 retain none
    #[serde(rename = "max_idle_conn", default)]
    pub max_idle: i32,
    /// Maximum connection lifetime in milliseconds; values <= 0 mean no limit
    #[serde(rename = "max_lifetime", default)]
    pub max_lifetime_ms: i64,
    /// Free-form driver parameters
    #[serde(default, deserialize_with = "crate::params::deserialize_params")]
    pub params: HashMap<String, ParamValue>,
}

impl ConnectionRecord {
    /// Create a record with the given identity and dialect tag
    pub fn new(name: &str, driver: &str) -> Self {
        Self {
            name: name.to_string(),
            driver: driver.to_string(),
            ..Default::default()
        }
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }

    pub fn with_database(mut self, database: &str) -> Self {
        self.database = database.to_string();
        self
    }

    pub fn with_timezone(mut self, timezone: &str) -> Self {
        self.timezone = timezone.to_string();
        self
    }

    pub fn with_pool_limits(mut self, max_open: i32, max_idle: i32, max_lifetime_ms: i64) -> Self {
        self.max_open = max_open;
        self.max_idle = max_idle;
        self.max_lifetime_ms = max_lifetime_ms;
        self
    }

    /// Set a free-form driver parameter
    pub fn with_param(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Resolve the dialect tag
    pub fn dialect(&self) -> Result<Dialect> {
        self.driver.parse()
    }

    /// Resolve the configured timezone
    pub fn location(&self) -> Result<Tz> {
        resolve_zone(&self.timezone)
    }

    /// Maximum connection lifetime. Non-positive values yield zero.
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.max_lifetime_ms).unwrap_or(0))
    }

    /// Check the record for settings that must abort startup, and log the
    /// risky ones.
    pub fn verify(&self) -> Result<()> {
        self.dialect()?;
        self.location()?;

        if self.max_open == 0 {
            return Err(DbDialError::Configuration(format!(
                "{}: max_open_conn is 0 (unlimited). Recommended: measured limit or fewer than the number of CPU cores",
                self.name
            )));
        }
        if self.max_idle <= 0 {
            tracing::warn!(
                name = %self.name,
                max_idle_conn = self.max_idle,
                "max_idle_conn <= 0, idle connections are not retained. Recommended: >= max_open_conn"
            );
        }
        if self.max_lifetime_ms <= 0 {
            tracing::warn!(
                name = %self.name,
                max_lifetime = self.max_lifetime_ms,
                "max_lifetime <= 0, connections are reused forever. Recommended: <= max_open_conn * 1 second"
            );
        }
        Ok(())
    }
}

/// Parse a single record from a YAML document
pub fn parse_config(bytes: &[u8]) -> Result<ConnectionRecord> {
    Ok(serde_yaml::from_slice(bytes)?)
}

/// Decode and verify a YAML list of records
pub fn decode_config(mut reader: impl Read) -> Result<Vec<ConnectionRecord>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let records: Vec<ConnectionRecord> = if content.trim().is_empty() {
        Vec::new()
    } else {
        serde_yaml::from_str::<Option<Vec<ConnectionRecord>>>(&content)?.unwrap_or_default()
    };

    if records.is_empty() {
        return Err(DbDialError::Configuration(
            "No database settings found".to_string(),
        ));
    }

    for record in &records {
        record.verify()?;
    }

    tracing::debug!(count = records.len(), "database settings decoded");
    Ok(records)
}
