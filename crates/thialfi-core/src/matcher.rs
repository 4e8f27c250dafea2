//! Object versions and the object→clients view used for fan-out.

use std::collections::BTreeSet;

use crate::storage::SharedStorage;

/// Provides object/version operations on top of a [`Storage`](crate::Storage)
/// backend.
///
/// Registrations made here and through the [`Registrar`](crate::Registrar)
/// land in the same relation.
#[derive(Clone)]
pub struct Matcher {
    store: SharedStorage,
}

impl Matcher {
    /// Create a matcher over `store`.
    pub fn new(store: SharedStorage) -> Self {
        Self { store }
    }

    /// Set the version of an object.
    pub fn update_object_version(&self, object_id: &str, version: i64) {
        self.store.update_object_version(object_id, version);
    }

    /// Version of an object, `0` if never published.
    pub fn object_version(&self, object_id: &str) -> i64 {
        self.store.object_version(object_id)
    }

    /// Register a client for an object.
    pub fn register_client(&self, object_id: &str, client_id: &str) {
        self.store.add_registration(client_id, object_id);
    }

    /// Unregister a client from an object.
    pub fn unregister_client(&self, object_id: &str, client_id: &str) {
        self.store.remove_registration(client_id, object_id);
    }

    /// Clients registered for an object.
    pub fn registrants(&self, object_id: &str) -> BTreeSet<String> {
        self.store.registrants(object_id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::registrar::Registrar;
    use crate::storage::MemStore;

    #[test]
    fn test_shares_relation_with_registrar() {
        let store: SharedStorage = Arc::new(MemStore::new());
        let registrar = Registrar::new(store.clone());
        let matcher = Matcher::new(store);

        registrar.register("c1", "o1");
        assert!(matcher.registrants("o1").contains("c1"));

        matcher.unregister_client("o1", "c1");
        assert!(registrar.registrations("c1").is_empty());

        matcher.register_client("o2", "c2");
        assert!(registrar.registrations("c2").contains("o2"));
    }

    #[test]
    fn test_object_version() {
        let matcher = Matcher::new(Arc::new(MemStore::new()));
        assert_eq!(matcher.object_version("o1"), 0);

        matcher.update_object_version("o1", 7);
        assert_eq!(matcher.object_version("o1"), 7);
    }
}
