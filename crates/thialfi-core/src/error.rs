//! Core error types.
//!
//! Every storage operation is total, so the only failure the core knows about
//! is an identifier that cannot name a client or an object.

use thiserror::Error;

/// Core errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An identifier was empty.
    #[error("{field} must not be empty")]
    EmptyId {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Check that `value` can be used as a client or object identifier.
///
/// Identifiers are opaque, so the only rule is that they are non-empty.
pub fn validate_id<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::EmptyId { field });
    }
    Ok(value)
}
