//! # API Client Registry
//!
//! Resolves endpoint configuration for named backend services and hands out
//! lazily constructed, cached GraphQL clients bound to a shared auth source.
//! Several service SDKs in one process can ask for "the client for namespace N"
//! without re-implementing endpoint resolution, credential wiring, or client
//! lifecycle.
//!
//! # Architectural Overview
//!
//! 1. **[`ConfigurationResolver`]**: namespace → [`EndpointConfig`]. The default
//!    namespace honours an explicit override first, then the configuration
//!    store (caching what it finds). Other namespaces always go to the store.
//! 2. **[`ClientRegistry`]**: owns the [`AuthSource`] and the namespace → client
//!    cache. Namespaces whose configuration equals the default's share the
//!    default's cache slot (see [`cache_key`]). Replacing the auth source drops
//!    every cached client.
//! 3. **[`ClientFactory`]**: the seam where concrete clients are built.
//!    [`GraphqlClientFactory`] is the stock implementation.
//!
//! # Example
//!
//! ```rust
//! use acm_client::{ClientRegistry, GraphqlClientFactory, StaticTokenSource};
//! use acm_config::DocumentConfigStore;
//! use acm_domain::EndpointConfig;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), acm_client::ApiClientError> {
//! let registry = ClientRegistry::new(DocumentConfigStore::new(), GraphqlClientFactory);
//! registry
//!     .set_config(EndpointConfig::new("us-east-1", "https://aws"))
//!     .set_auth_source(Arc::new(StaticTokenSource::new("jwt")));
//!
//! let client = registry.get_default_client()?;
//! assert_eq!(client.url(), "https://aws");
//! assert!(Arc::ptr_eq(&client, &registry.get_default_client()?));
//! # Ok(())
//! # }
//! ```

mod auth;
mod error;
mod factory;
mod graphql;
mod registry;
mod resolver;

pub use acm_domain::{ClientOptions, DEFAULT_NAMESPACE, EndpointConfig, Namespace};
pub use auth::{AuthError, AuthSource, EMPTY_TOKEN, StaticTokenSource, TokenProvider};
pub use error::ApiClientError;
pub use factory::{ApiClient, ClientFactory, ClientSpec};
pub use graphql::{DEFAULT_STORE_CAPACITY, GraphqlClient, GraphqlClientFactory, GraphqlOptions};
pub use registry::{ClientRegistry, cache_key};
pub use resolver::ConfigurationResolver;
