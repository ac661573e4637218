//! Facade crate for the API client manager.
//! Re-exports the domain types, the configuration store and the client registry.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Build a [`config::DocumentConfigStore`] (or load one with [`bootstrap`]).
//! - Wrap it in a [`client::ClientRegistry`] owned by your composition root.
//! - Register the auth source, then hand `&ClientRegistry` to every service SDK.

use std::path::Path;

pub use acm_client as client;
pub use acm_config as config;
pub use acm_domain as domain;

/// Commonly used items.
pub mod prelude {
    pub use acm_client::{
        ApiClient, ApiClientError, AuthError, AuthSource, ClientFactory, ClientRegistry,
        GraphqlClient, GraphqlClientFactory, GraphqlOptions, StaticTokenSource,
    };
    pub use acm_config::{ConfigStore, ConfigStoreExt, DocumentConfigStore};
    pub use acm_domain::{ClientOptions, DEFAULT_NAMESPACE, EndpointConfig, Namespace};
}

/// Loads the configuration document at `path` (with `<env_prefix>__` overrides)
/// and wraps it in a registry backed by the stock GraphQL client.
///
/// # Errors
/// Returns [`config::ConfigStoreError`] if the document cannot be loaded.
pub fn bootstrap(
    path: impl AsRef<Path>,
    env_prefix: &str,
) -> Result<client::ClientRegistry<client::GraphqlClientFactory>, config::ConfigStoreError> {
    let store = config::DocumentConfigStore::load(path, env_prefix)?;
    Ok(client::ClientRegistry::new(store, client::GraphqlClientFactory))
}
