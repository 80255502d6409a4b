//! Pool limits applied to every opened handle

use std::time::Duration;

use dbdial_core::ConnectionRecord;

use crate::DatabaseHandle;

/// Pool sizing and connection lifecycle limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolLimits {
    /// Maximum number of open connections
    max_open: u32,
    /// Maximum number of idle connections
    max_idle: u32,
    /// Maximum reuse time of a connection
    max_lifetime: Duration,
}

impl PoolLimits {
    /// Create pool limits with the given sizes and no lifetime limit
    pub fn new(max_open: u32, max_idle: u32) -> Self {
        Self {
            max_open,
            max_idle,
            max_lifetime: Duration::ZERO,
        }
    }

    /// Set the maximum connection lifetime
    pub fn with_max_lifetime(mut self, lifetime: Duration) -> Self {
        self.max_lifetime = lifetime;
        self
    }

    /// Limits configured on a record. Negative sizes clamp to 0, which the
    /// client reads as unlimited open and no idle connections.
    pub fn from_record(record: &ConnectionRecord) -> Self {
        Self::new(
            u32::try_from(record.max_open).unwrap_or(0),
            u32::try_from(record.max_idle).unwrap_or(0),
        )
        .with_max_lifetime(record.max_lifetime())
    }

    pub fn max_open(&self) -> u32 {
        self.max_open
    }

    pub fn max_idle(&self) -> u32 {
        self.max_idle
    }

    pub fn max_lifetime(&self) -> Duration {
        self.max_lifetime
    }

    /// Apply the limits to a handle
    pub fn apply(&self, handle: &dyn DatabaseHandle) {
        handle.set_max_open(self.max_open);
        handle.set_max_idle(self.max_idle);
        handle.set_max_lifetime(self.max_lifetime);
        tracing::debug!(
            max_open = self.max_open,
            max_idle = self.max_idle,
            max_lifetime_ms = self.max_lifetime.as_millis() as u64,
            "pool limits applied"
        );
    }
}

impl Default for PoolLimits {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
