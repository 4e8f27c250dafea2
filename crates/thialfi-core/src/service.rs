//! Notification service facade.
//!
//! Built once at startup from a storage backend and shared by every request
//! handler. It wires the [`Registrar`], [`Matcher`] and [`Publisher`] to the
//! same store and counts what passes through.

use std::collections::BTreeSet;

use crate::matcher::Matcher;
use crate::metrics::{MetricsSnapshot, ServiceMetrics};
use crate::model::Notification;
use crate::publisher::Publisher;
use crate::registrar::Registrar;
use crate::storage::{SharedStorage, StoreStats};

/// Entry point for everything the transport can ask of the service.
pub struct NotificationService {
    store: SharedStorage,
    registrar: Registrar,
    matcher: Matcher,
    publisher: Publisher,
    metrics: ServiceMetrics,
}

impl NotificationService {
    /// Create the service over `store`.
    pub fn new(store: SharedStorage) -> Self {
        let registrar = Registrar::new(store.clone());
        let matcher = Matcher::new(store.clone());
        let publisher = Publisher::new(registrar.clone(), matcher.clone());

        Self {
            store,
            registrar,
            matcher,
            publisher,
            metrics: ServiceMetrics::new(),
        }
    }

    /// Register `client_id` for changes to `object_id`.
    pub fn register(&self, client_id: &str, object_id: &str) {
        self.registrar.register(client_id, object_id);
        self.matcher.register_client(object_id, client_id);
        self.metrics.record_registration();
        tracing::debug!(client_id, object_id, "client registered");
    }

    /// Drop the registration of `client_id` for `object_id`, if present.
    pub fn unregister(&self, client_id: &str, object_id: &str) {
        self.registrar.unregister(client_id, object_id);
        self.matcher.unregister_client(object_id, client_id);
        self.metrics.record_unregistration();
        tracing::debug!(client_id, object_id, "client unregistered");
    }

    /// Publish a new version of `object_id`. Returns the number of
    /// notifications queued.
    pub fn publish(&self, object_id: &str, version: i64) -> usize {
        let delivered = self.publisher.publish(object_id, version);
        self.metrics.record_publish(delivered);
        delivered
    }

    /// Take every pending notification for `client_id`.
    pub fn fetch(&self, client_id: &str) -> Vec<Notification> {
        let batch = self.registrar.fetch_and_clear(client_id);
        self.metrics.record_fetch(batch.len());
        tracing::debug!(client_id, delivered = batch.len(), "notifications fetched");
        batch
    }

    /// Pending notifications for `client_id`, without clearing them.
    pub fn pending(&self, client_id: &str) -> Vec<Notification> {
        self.registrar.notifications(client_id)
    }

    /// Objects `client_id` is registered for.
    pub fn registrations(&self, client_id: &str) -> BTreeSet<String> {
        self.registrar.registrations(client_id)
    }

    /// Clients registered for `object_id`.
    pub fn registrants(&self, object_id: &str) -> BTreeSet<String> {
        self.matcher.registrants(object_id)
    }

    /// Last published version of `object_id`, `0` if none.
    pub fn object_version(&self, object_id: &str) -> i64 {
        self.matcher.object_version(object_id)
    }

    /// Sizes of the backing store.
    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }

    /// Operation counters.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemStore;

    #[test]
    fn test_metrics_follow_operations() {
        let service = NotificationService::new(Arc::new(MemStore::new()));
        service.register("c1", "o1");
        service.register("c2", "o1");
        service.publish("o1", 1);
        service.fetch("c1");
        service.unregister("c2", "o1");

        let metrics = service.metrics();
        assert_eq!(metrics.registrations, 2);
        assert_eq!(metrics.unregistrations, 1);
        assert_eq!(metrics.publishes, 1);
        assert_eq!(metrics.notifications_enqueued, 2);
        assert_eq!(metrics.fetches, 1);
        assert_eq!(metrics.notifications_delivered, 1);

        let stats = service.stats();
        assert_eq!(stats.registrations, 1);
        assert_eq!(stats.pending_notifications, 1);
        assert_eq!(stats.versioned_objects, 1);
    }

    #[test]
    fn test_pending_does_not_clear() {
        let service = NotificationService::new(Arc::new(MemStore::new()));
        service.register("c1", "o1");
        service.publish("o1", 4);

        assert_eq!(service.pending("c1").len(), 1);
        assert_eq!(service.fetch("c1").len(), 1);
        assert!(service.pending("c1").is_empty());
    }
}
