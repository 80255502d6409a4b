//! Mock database client shared by the unit tests

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dbdial_core::{DbDialError, Result};
use parking_lot::Mutex;

use crate::{DatabaseHandle, DatabaseOpener};

/// Mock handle recording the limits it was given
pub struct MockHandle {
    pub driver_name: String,
    pub dsn: String,
    max_open: AtomicU32,
    max_idle: AtomicU32,
    max_lifetime: Mutex<Duration>,
    closed: AtomicBool,
}

impl MockHandle {
    pub fn new() -> Self {
        Self::opened("mock", "")
    }

    fn opened(driver_name: &str, dsn: &str) -> Self {
        Self {
            driver_name: driver_name.to_string(),
            dsn: dsn.to_string(),
            max_open: AtomicU32::new(0),
            max_idle: AtomicU32::new(0),
            max_lifetime: Mutex::new(Duration::ZERO),
            closed: AtomicBool::new(false),
        }
    }

    pub fn limits(&self) -> (u32, u32, Duration) {
        (
            self.max_open.load(Ordering::SeqCst),
            self.max_idle.load(Ordering::SeqCst),
            *self.max_lifetime.lock(),
        )
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatabaseHandle for MockHandle {
    fn set_max_open(&self, n: u32) {
        self.max_open.store(n, Ordering::SeqCst);
    }

    fn set_max_idle(&self, n: u32) {
        self.max_idle.store(n, Ordering::SeqCst);
    }

    fn set_max_lifetime(&self, lifetime: Duration) {
        *self.max_lifetime.lock() = lifetime;
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Mock opener that keeps every handle it opened
pub struct MockOpener {
    opened: Mutex<Vec<Arc<MockHandle>>>,
    calls: AtomicUsize,
    fail: bool,
}

impl MockOpener {
    pub fn new() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// Opener whose every call fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn opened(&self) -> Vec<Arc<MockHandle>> {
        self.opened.lock().clone()
    }
}

#[async_trait]
impl DatabaseOpener for MockOpener {
    async fn open(&self, driver_name: &str, dsn: &str) -> Result<Arc<dyn DatabaseHandle>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DbDialError::Driver(format!("cannot reach {}", driver_name)));
        }
        let handle = Arc::new(MockHandle::opened(driver_name, dsn));
        self.opened.lock().push(handle.clone());
        Ok(handle)
    }
}
