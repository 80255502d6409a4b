//! Driver registry for resolving dialect drivers by tag

use dbdial_core::{ConnectionRecord, DbDialError, Dialect, DialectDriver, Result, StatementBuilder};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

static DEFAULT_REGISTRY: LazyLock<DriverRegistry> = LazyLock::new(DriverRegistry::with_defaults);

/// Registry of available dialect drivers
pub struct DriverRegistry {
    drivers: HashMap<Dialect, Arc<dyn DialectDriver>>,
}

impl DriverRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            drivers: HashMap::new(),
        }
    }

    /// Create a registry with all built-in drivers registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        #[cfg(feature = "mysql")]
        registry.register(Arc::new(crate::mysql::MySqlDriver::new()));
        #[cfg(feature = "oracle")]
        registry.register(Arc::new(crate::oracle::OracleDriver::new()));
        #[cfg(feature = "mssql")]
        registry.register(Arc::new(crate::mssql::MssqlDriver::new()));

        registry
    }

    /// Register a driver, replacing any driver for the same dialect
    pub fn register(&mut self, driver: Arc<dyn DialectDriver>) {
        tracing::info!(driver = driver.id(), "registering dialect driver");
        self.drivers.insert(driver.dialect(), driver);
    }

    /// Get the driver for a dialect tag.
    ///
    /// Fails with a configuration error when the tag is empty, unknown, or
    /// names a dialect that was not compiled in.
    pub fn get(&self, tag: &str) -> Result<Arc<dyn DialectDriver>> {
        let dialect: Dialect = tag.parse()?;
        self.drivers.get(&dialect).cloned().ok_or_else(|| {
            tracing::warn!(driver = %tag, "driver not found in registry");
            DbDialError::Configuration(format!("Unsupported driver [{}]", tag))
        })
    }

    /// List all registered dialect tags
    pub fn list(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.drivers.keys().map(|d| d.tag()).collect();
        tags.sort_unstable();
        tags
    }

    /// Check if a dialect tag is registered
    pub fn has(&self, tag: &str) -> bool {
        self.get(tag).is_ok()
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Process-wide registry with every compiled-in driver
pub fn default_registry() -> &'static DriverRegistry {
    &DEFAULT_REGISTRY
}

/// Build the DSN for a record with the driver selected by its dialect tag
pub fn build_dsn(record: &ConnectionRecord) -> Result<String> {
    let driver = default_registry().get(&record.driver)?;
    Ok(driver.build_dsn(record))
}

/// Resolve the client-library identifier for a dialect tag
pub fn driver_name(tag: &str) -> Result<&'static str> {
    Ok(default_registry().get(tag)?.driver_name())
}

/// Statement builder for a dialect tag
pub fn statement_builder(tag: &str) -> Result<StatementBuilder> {
    Ok(default_registry().get(tag)?.statement_builder())
}
