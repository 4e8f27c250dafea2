//! Thialfi Core - Registration index, version ledger and notification queues.
//!
//! This crate holds everything the notify service knows: which clients are
//! registered for which objects, the last published version of every object,
//! and the pending notifications waiting for each client. All state lives
//! behind the [`Storage`] contract; the [`Registrar`], [`Matcher`] and
//! [`Publisher`] only hold handles to it.

pub mod error;
pub mod matcher;
pub mod metrics;
pub mod model;
pub mod publisher;
pub mod registrar;
pub mod service;
pub mod storage;

pub use error::{validate_id, Error, Result};
pub use matcher::Matcher;
pub use metrics::{MetricsSnapshot, ServiceMetrics};
pub use model::{Client, Notification, Object, Registration};
pub use publisher::Publisher;
pub use registrar::Registrar;
pub use service::NotificationService;
pub use storage::{MemStore, SharedStorage, Storage, StoreStats};
