//! Pluggable storage for registrations, versions and notification queues.
//!
//! The [`Storage`] trait is the single contract the [`Registrar`] and
//! [`Matcher`] are written against. Backends own all shared mutable state and
//! must make two composite operations atomic:
//!
//! - adding or removing a registration updates the client→objects and
//!   object→clients indices together, so the two never disagree;
//! - fetching a client's notifications returns the queue and empties it in one
//!   critical section, so a concurrent enqueue lands either in the returned
//!   batch or in the next one.
//!
//! Every operation is total: unknown client or object IDs produce empty sets,
//! empty queues or version `0`, never an error.
//!
//! [`Registrar`]: crate::Registrar
//! [`Matcher`]: crate::Matcher

mod memory;

pub use memory::MemStore;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use crate::model::Notification;

/// Storage operations shared by the registrar and the matcher.
pub trait Storage: Send + Sync {
    // Registration operations

    /// Record that `client_id` is interested in `object_id`. Idempotent.
    fn add_registration(&self, client_id: &str, object_id: &str);

    /// Forget the registration of `client_id` for `object_id`, if any.
    fn remove_registration(&self, client_id: &str, object_id: &str);

    /// Objects `client_id` is registered for.
    fn registrations(&self, client_id: &str) -> BTreeSet<String>;

    // Notification operations

    /// Append a notification to its client's queue.
    fn add_notification(&self, notification: Notification);

    /// Read a client's queue without clearing it.
    fn notifications(&self, client_id: &str) -> Vec<Notification>;

    /// Take a client's queue, leaving it empty.
    fn fetch_and_clear_notifications(&self, client_id: &str) -> Vec<Notification>;

    // Object/version operations

    /// Overwrite the stored version of `object_id`.
    ///
    /// There is no check against the previous version; callers that need
    /// monotonic versions must enforce it themselves.
    fn update_object_version(&self, object_id: &str, version: i64);

    /// Stored version of `object_id`, or `0` if it was never updated.
    fn object_version(&self, object_id: &str) -> i64;

    /// Clients registered for `object_id`.
    fn registrants(&self, object_id: &str) -> BTreeSet<String>;

    /// Point-in-time counts of what the backend holds.
    fn stats(&self) -> StoreStats;
}

/// Shared storage handle.
pub type SharedStorage = Arc<dyn Storage>;

/// Sizes of the backend's indices.
///
/// Each count is read separately, so the snapshot as a whole is not
/// consistent under concurrent writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Clients with at least one registration.
    pub clients: usize,
    /// Objects with at least one registrant.
    pub registered_objects: usize,
    /// Total (client, object) registrations.
    pub registrations: usize,
    /// Objects that have a stored version.
    pub versioned_objects: usize,
    /// Notifications waiting across all clients.
    pub pending_notifications: usize,
}
