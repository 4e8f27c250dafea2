//! HTTP route handlers.

pub mod health;
pub mod notifications;
pub mod publish;
pub mod registration;
