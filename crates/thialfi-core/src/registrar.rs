//! Client registrations and pending notifications.

use std::collections::BTreeSet;

use crate::model::Notification;
use crate::storage::SharedStorage;

/// Manages client registrations and notification queues on top of a
/// [`Storage`](crate::Storage) backend.
///
/// The registrar keeps no state of its own; every call goes straight to the
/// backend.
#[derive(Clone)]
pub struct Registrar {
    store: SharedStorage,
}

impl Registrar {
    /// Create a registrar over `store`.
    pub fn new(store: SharedStorage) -> Self {
        Self { store }
    }

    /// Register a client for an object.
    pub fn register(&self, client_id: &str, object_id: &str) {
        self.store.add_registration(client_id, object_id);
    }

    /// Unregister a client from an object. Does nothing if not registered.
    pub fn unregister(&self, client_id: &str, object_id: &str) {
        self.store.remove_registration(client_id, object_id);
    }

    /// Objects the client is registered for.
    pub fn registrations(&self, client_id: &str) -> BTreeSet<String> {
        self.store.registrations(client_id)
    }

    /// Queue a notification for its client.
    pub fn add_notification(&self, notification: Notification) {
        self.store.add_notification(notification);
    }

    /// Pending notifications for a client, left in place.
    pub fn notifications(&self, client_id: &str) -> Vec<Notification> {
        self.store.notifications(client_id)
    }

    /// Take all pending notifications for a client.
    pub fn fetch_and_clear(&self, client_id: &str) -> Vec<Notification> {
        self.store.fetch_and_clear_notifications(client_id)
    }
}
