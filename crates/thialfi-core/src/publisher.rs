//! Publish fan-out.
//!
//! Publishing is the one operation that spans both halves of the storage
//! contract:
//!
//! ```text
//! publish(object, version)
//!   matcher.update_object_version()   version ledger
//!   matcher.registrants()             snapshot of the reverse index
//!   registrar.add_notification() × N  one per registrant, per-client FIFO
//! ```
//!
//! The steps are not wrapped in a transaction. A registration racing with a
//! publish may or may not be in the snapshot, and if the process dies halfway
//! through the loop the remaining registrants never hear about this version.
//! Delivery is best-effort and at-most-once.

use crate::matcher::Matcher;
use crate::model::Notification;
use crate::registrar::Registrar;

/// Fans a version update out to every registrant of the object.
#[derive(Clone)]
pub struct Publisher {
    registrar: Registrar,
    matcher: Matcher,
}

impl Publisher {
    /// Create a publisher that records versions through `matcher` and queues
    /// notifications through `registrar`.
    pub fn new(registrar: Registrar, matcher: Matcher) -> Self {
        Self { registrar, matcher }
    }

    /// Set `object_id` to `version` and notify its current registrants.
    ///
    /// Returns the number of notifications queued.
    pub fn publish(&self, object_id: &str, version: i64) -> usize {
        self.matcher.update_object_version(object_id, version);

        let registrants = self.matcher.registrants(object_id);
        if registrants.is_empty() {
            tracing::trace!(object_id, version, "published with no registrants");
            return 0;
        }

        let delivered = registrants.len();
        for client_id in registrants {
            self.registrar
                .add_notification(Notification::new(client_id, object_id, version));
        }

        tracing::debug!(object_id, version, delivered, "published version");
        delivered
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::{MemStore, SharedStorage};

    fn publisher() -> (Publisher, Registrar, Matcher) {
        let store: SharedStorage = Arc::new(MemStore::new());
        let registrar = Registrar::new(store.clone());
        let matcher = Matcher::new(store);
        (
            Publisher::new(registrar.clone(), matcher.clone()),
            registrar,
            matcher,
        )
    }

    #[test]
    fn test_publish_notifies_every_registrant() {
        let (publisher, registrar, matcher) = publisher();
        registrar.register("c1", "o1");
        registrar.register("c2", "o1");
        registrar.register("c3", "o2");

        assert_eq!(publisher.publish("o1", 7), 2);

        assert_eq!(matcher.object_version("o1"), 7);
        assert_eq!(registrar.notifications("c1"), vec![Notification::new("c1", "o1", 7)]);
        assert_eq!(registrar.notifications("c2"), vec![Notification::new("c2", "o1", 7)]);
        assert!(registrar.notifications("c3").is_empty());
    }

    #[test]
    fn test_publish_without_registrants_only_sets_version() {
        let (publisher, registrar, matcher) = publisher();

        assert_eq!(publisher.publish("o1", 5), 0);

        assert_eq!(matcher.object_version("o1"), 5);
        assert!(registrar.notifications("c1").is_empty());
    }

    #[test]
    fn test_repeated_publishes_are_not_coalesced() {
        let (publisher, registrar, _) = publisher();
        registrar.register("c1", "o1");

        publisher.publish("o1", 1);
        publisher.publish("o1", 1);
        publisher.publish("o1", 2);

        let versions: Vec<i64> = registrar
            .fetch_and_clear("c1")
            .into_iter()
            .map(|n| n.version)
            .collect();
        assert_eq!(versions, vec![1, 1, 2]);
    }
}
