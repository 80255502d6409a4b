//! Traits implemented by the database client

use async_trait::async_trait;
use dbdial_core::Result;
use std::sync::Arc;
use std::time::Duration;

/// An open database handle owning its own connection pool
#[async_trait]
pub trait DatabaseHandle: Send + Sync {
    /// Maximum number of open connections; 0 means unlimited
    fn set_max_open(&self, n: u32);

    /// Maximum number of idle connections kept in the pool
    fn set_max_idle(&self, n: u32);

    /// Maximum time a connection may be reused; zero means no limit
    fn set_max_lifetime(&self, lifetime: Duration);

    /// Close the handle and every pooled connection
    async fn close(&self) -> Result<()>;
}

/// Opens database handles from a client-library name and a DSN
#[async_trait]
pub trait DatabaseOpener: Send + Sync {
    async fn open(&self, driver_name: &str, dsn: &str) -> Result<Arc<dyn DatabaseHandle>>;
}
