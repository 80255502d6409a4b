//! A configured database with its dialect and timezone

use std::sync::Arc;

use dbdial_core::{ConnectionRecord, Dialect, DialectDriver, Result, StatementBuilder, Tz};
use dbdial_drivers::default_registry;

use crate::{DatabaseHandle, DatabaseOpener, PoolLimits};

/// An open database together with everything needed to talk to it:
/// the dialect driver, the resolved server timezone and the record it was
/// built from.
pub struct Repository {
    record: ConnectionRecord,
    driver: Arc<dyn DialectDriver>,
    location: Tz,
    handle: Arc<dyn DatabaseHandle>,
}

impl Repository {
    /// Open a repository for `record`.
    ///
    /// The dialect and timezone are resolved before anything is opened,
    /// so a record with an unusable timezone never reaches the client.
    #[tracing::instrument(skip(record, opener), fields(name = %record.name, driver = %record.driver))]
    pub async fn new(record: ConnectionRecord, opener: &dyn DatabaseOpener) -> Result<Self> {
        let driver = default_registry().get(&record.driver)?;
        let location = record.location()?;

        let dsn = driver.connection_string(&record);
        let handle = opener
            .open(driver.driver_name(), &dsn.to_string())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, dsn = %dsn.redacted(), "failed to open database");
                e
            })?;
        PoolLimits::from_record(&record).apply(handle.as_ref());

        tracing::info!(
            driver_name = driver.driver_name(),
            location = %location,
            "repository created"
        );
        Ok(Self {
            record,
            driver,
            location,
            handle,
        })
    }

    /// The underlying database handle
    pub fn handle(&self) -> &Arc<dyn DatabaseHandle> {
        &self.handle
    }

    /// Client-library identifier the handle was opened with
    pub fn driver_name(&self) -> &'static str {
        self.driver.driver_name()
    }

    /// The dialect driver
    pub fn driver(&self) -> &Arc<dyn DialectDriver> {
        &self.driver
    }

    pub fn dialect(&self) -> Dialect {
        self.driver.dialect()
    }

    /// Timezone of the database server, used to correct values read back
    pub fn location(&self) -> Tz {
        self.location
    }

    pub fn record(&self) -> &ConnectionRecord {
        &self.record
    }

    pub fn statement_builder(&self) -> StatementBuilder {
        self.driver.statement_builder()
    }

    /// Close the underlying handle
    pub async fn close(&self) -> Result<()> {
        tracing::debug!(name = %self.record.name, "closing repository");
        self.handle.close().await
    }
}
