//! In-memory storage backend.
//!
//! ## Layout
//!
//! ```text
//! registrations: RwLock<{ by_client: client → {object}, by_object: object → {client} }>
//! versions:      DashMap<object, version>
//! queues:        DashMap<client, [Notification]>
//! ```
//!
//! Both registration indices sit under one lock so an add or remove is never
//! observed half-applied. Versions and queues are sharded maps: each
//! operation holds only the shard lock for its key, so distinct clients do not
//! serialize behind each other.

use std::collections::{BTreeSet, HashMap};

use dashmap::DashMap;
use parking_lot::RwLock;

use super::{Storage, StoreStats};
use crate::model::Notification;

/// Forward and reverse registration indices.
#[derive(Debug, Default)]
struct RegistrationIndex {
    /// client_id -> object_ids
    by_client: HashMap<String, BTreeSet<String>>,
    /// object_id -> client_ids
    by_object: HashMap<String, BTreeSet<String>>,
}

impl RegistrationIndex {
    fn insert(&mut self, client_id: &str, object_id: &str) -> bool {
        let added = self
            .by_client
            .entry(client_id.to_string())
            .or_default()
            .insert(object_id.to_string());
        self.by_object
            .entry(object_id.to_string())
            .or_default()
            .insert(client_id.to_string());
        added
    }

    fn remove(&mut self, client_id: &str, object_id: &str) -> bool {
        let removed = remove_from(&mut self.by_client, client_id, object_id);
        remove_from(&mut self.by_object, object_id, client_id);
        removed
    }
}

/// Remove `value` from the set under `key`, dropping the set once empty.
fn remove_from(map: &mut HashMap<String, BTreeSet<String>>, key: &str, value: &str) -> bool {
    let Some(set) = map.get_mut(key) else {
        return false;
    };
    let removed = set.remove(value);
    if set.is_empty() {
        map.remove(key);
    }
    removed
}

/// Simple in-memory storage for a single process.
///
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemStore {
    registrations: RwLock<RegistrationIndex>,
    versions: DashMap<String, i64>,
    queues: DashMap<String, Vec<Notification>>,
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemStore {
    fn add_registration(&self, client_id: &str, object_id: &str) {
        let added = self.registrations.write().insert(client_id, object_id);
        if added {
            tracing::trace!(client_id, object_id, "registration added");
        }
    }

    fn remove_registration(&self, client_id: &str, object_id: &str) {
        let removed = self.registrations.write().remove(client_id, object_id);
        if removed {
            tracing::trace!(client_id, object_id, "registration removed");
        }
    }

    fn registrations(&self, client_id: &str) -> BTreeSet<String> {
        self.registrations
            .read()
            .by_client
            .get(client_id)
            .cloned()
            .unwrap_or_default()
    }

    fn add_notification(&self, notification: Notification) {
        self.queues
            .entry(notification.client_id.clone())
            .or_default()
            .push(notification);
    }

    fn notifications(&self, client_id: &str) -> Vec<Notification> {
        self.queues
            .get(client_id)
            .map(|queue| queue.value().clone())
            .unwrap_or_default()
    }

    fn fetch_and_clear_notifications(&self, client_id: &str) -> Vec<Notification> {
        // Removing the entry takes the queue under the shard lock; the next
        // enqueue for this client starts a fresh one.
        self.queues
            .remove(client_id)
            .map(|(_, queue)| queue)
            .unwrap_or_default()
    }

    fn update_object_version(&self, object_id: &str, version: i64) {
        self.versions.insert(object_id.to_string(), version);
    }

    fn object_version(&self, object_id: &str) -> i64 {
        self.versions
            .get(object_id)
            .map(|version| *version.value())
            .unwrap_or_default()
    }

    fn registrants(&self, object_id: &str) -> BTreeSet<String> {
        self.registrations
            .read()
            .by_object
            .get(object_id)
            .cloned()
            .unwrap_or_default()
    }

    fn stats(&self) -> StoreStats {
        let (clients, registered_objects, registrations) = {
            let index = self.registrations.read();
            (
                index.by_client.len(),
                index.by_object.len(),
                index.by_client.values().map(BTreeSet::len).sum(),
            )
        };

        StoreStats {
            clients,
            registered_objects,
            registrations,
            versioned_objects: self.versions.len(),
            pending_notifications: self.queues.iter().map(|queue| queue.len()).sum(),
        }
    }
}
