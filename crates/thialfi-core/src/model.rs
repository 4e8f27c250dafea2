//! Data model shared by the storage contract and the transport.

use serde::{Deserialize, Serialize};

/// A versioned shared object.
///
/// Objects come into existence on their first version update and are never
/// removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    /// Opaque object identifier.
    pub id: String,
    /// Last published version.
    pub version: i64,
}

/// A client of the service.
///
/// Clients are known only by their ID; the name is carried for callers that
/// want it and is not used by any operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Opaque client identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Interest of one client in one object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Registration {
    /// Registered client.
    pub client_id: String,
    /// Object the client is interested in.
    pub object_id: String,
}

impl Registration {
    /// Create a registration.
    pub fn new(client_id: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            object_id: object_id.into(),
        }
    }
}

/// A pending notice that an object changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Client the notification is queued for.
    pub client_id: String,
    /// Object that changed.
    pub object_id: String,
    /// New version of the object. Meaningless when `unknown` is set.
    pub version: i64,
    /// True if the object's version is unknown.
    pub unknown: bool,
}

impl Notification {
    /// Notification that `object_id` is now at `version`.
    pub fn new(client_id: impl Into<String>, object_id: impl Into<String>, version: i64) -> Self {
        Self {
            client_id: client_id.into(),
            object_id: object_id.into(),
            version,
            unknown: false,
        }
    }

    /// Notification that the version of `object_id` is no longer known.
    pub fn unknown_version(client_id: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            object_id: object_id.into(),
            version: 0,
            unknown: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_wire_format() {
        let n = Notification::new("c1", "o1", 42);
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "client_id": "c1",
                "object_id": "o1",
                "version": 42,
                "unknown": false
            })
        );
    }

    #[test]
    fn test_unknown_version() {
        let n = Notification::unknown_version("c1", "o1");
        assert!(n.unknown);
        assert_eq!(n.version, 0);
    }

    #[test]
    fn test_client_name_defaults_empty() {
        let client: Client = serde_json::from_str(r#"{"id":"c1"}"#).unwrap();
        assert_eq!(client.id, "c1");
        assert!(client.name.is_empty());
    }
}
