//! # Domain Models
//!
//! Value types shared by the configuration store and the client registry.
//! Keep this crate lean: no I/O, no locking, just data and simple helpers.

pub mod config;
pub mod namespace;
pub mod options;

pub use config::EndpointConfig;
pub use namespace::{DEFAULT_NAMESPACE, Namespace, NamespaceError};
pub use options::ClientOptions;
