//! Service counters.
//!
//! Counters are plain relaxed atomics: they are only ever read as a
//! snapshot for reporting, never used for coordination.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde::Serialize;

/// Counters for every operation the service performs.
pub struct ServiceMetrics {
    /// Service start time.
    started_at: Instant,

    // Registration metrics
    registrations: AtomicU64,
    unregistrations: AtomicU64,

    // Publish metrics
    publishes: AtomicU64,
    notifications_enqueued: AtomicU64,

    // Fetch metrics
    fetches: AtomicU64,
    notifications_delivered: AtomicU64,
}

impl ServiceMetrics {
    /// Create a zeroed set of counters.
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            registrations: AtomicU64::new(0),
            unregistrations: AtomicU64::new(0),
            publishes: AtomicU64::new(0),
            notifications_enqueued: AtomicU64::new(0),
            fetches: AtomicU64::new(0),
            notifications_delivered: AtomicU64::new(0),
        }
    }

    /// Record a register call.
    pub fn record_registration(&self) {
        self.registrations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an unregister call.
    pub fn record_unregistration(&self) {
        self.unregistrations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a publish and the number of notifications it fanned out to.
    pub fn record_publish(&self, enqueued: usize) {
        self.publishes.fetch_add(1, Ordering::Relaxed);
        self.notifications_enqueued
            .fetch_add(enqueued as u64, Ordering::Relaxed);
    }

    /// Record a fetch-and-clear and the size of the returned batch.
    pub fn record_fetch(&self, delivered: usize) {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.notifications_delivered
            .fetch_add(delivered as u64, Ordering::Relaxed);
    }

    /// Seconds since the counters were created.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Read all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uptime_secs: self.uptime_secs(),
            registrations: self.registrations.load(Ordering::Relaxed),
            unregistrations: self.unregistrations.load(Ordering::Relaxed),
            publishes: self.publishes.load(Ordering::Relaxed),
            notifications_enqueued: self.notifications_enqueued.load(Ordering::Relaxed),
            fetches: self.fetches.load(Ordering::Relaxed),
            notifications_delivered: self.notifications_delivered.load(Ordering::Relaxed),
        }
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of [`ServiceMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub uptime_secs: u64,
    pub registrations: u64,
    pub unregistrations: u64,
    pub publishes: u64,
    pub notifications_enqueued: u64,
    pub fetches: u64,
    pub notifications_delivered: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = ServiceMetrics::new();
        metrics.record_registration();
        metrics.record_registration();
        metrics.record_unregistration();
        metrics.record_publish(3);
        metrics.record_publish(0);
        metrics.record_fetch(2);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.registrations, 2);
        assert_eq!(snapshot.unregistrations, 1);
        assert_eq!(snapshot.publishes, 2);
        assert_eq!(snapshot.notifications_enqueued, 3);
        assert_eq!(snapshot.fetches, 1);
        assert_eq!(snapshot.notifications_delivered, 2);
    }
}
