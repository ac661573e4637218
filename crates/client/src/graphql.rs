//! Stock GraphQL client and factory.
//!
//! The client carries everything a transport needs to talk to an AppSync-style
//! endpoint (URL, region, Cognito user pool token) plus a bounded in-memory
//! normalized store. Query execution itself is left to the transport layer.

use crate::auth::TokenProvider;
use crate::error::ApiClientError;
use crate::factory::{ApiClient, ClientFactory, ClientSpec};
use acm_domain::{EndpointConfig, Namespace};
use futures_util::FutureExt;
use futures_util::future::{self, BoxFuture};
use moka::sync::Cache;
use serde_json::Value;
use tracing::debug;

/// Default number of entries the local store keeps before evicting.
pub const DEFAULT_STORE_CAPACITY: u64 = 10_000;

/// Transport tuning for [`GraphqlClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphqlOptions {
    /// Disables offline support (queued mutations, persisted store).
    pub disable_offline: bool,
    /// Maximum number of normalized entries kept in the local store.
    pub store_capacity: u64,
}

impl Default for GraphqlOptions {
    fn default() -> Self {
        Self { disable_offline: false, store_capacity: DEFAULT_STORE_CAPACITY }
    }
}

/// Builds [`GraphqlClient`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphqlClientFactory;

impl ClientFactory for GraphqlClientFactory {
    type Client = GraphqlClient;
    type Options = GraphqlOptions;

    fn create(&self, spec: ClientSpec<'_, GraphqlOptions>) -> Result<GraphqlClient, ApiClientError> {
        if spec.endpoint.api_url().trim().is_empty() {
            return Err(ApiClientError::ClientConstruction {
                message: format!("empty API URL for namespace {}", spec.namespace).into(),
            });
        }
        if spec.options.store_capacity == 0 {
            return Err(ApiClientError::ClientConstruction {
                message: "store_capacity must be greater than zero".into(),
            });
        }

        Ok(GraphqlClient {
            namespace: spec.namespace,
            endpoint: spec.endpoint,
            token_provider: spec.token_provider,
            offline: !spec.options.disable_offline,
            store: Cache::builder().max_capacity(spec.options.store_capacity).build(),
        })
    }
}

/// A GraphQL client bound to one endpoint and one auth source.
#[derive(Debug)]
pub struct GraphqlClient {
    namespace: Namespace,
    endpoint: EndpointConfig,
    token_provider: TokenProvider,
    offline: bool,
    store: Cache<String, Value>,
}

impl GraphqlClient {
    /// The cache slot this client occupies in its registry.
    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    #[must_use]
    pub const fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    #[must_use]
    pub fn url(&self) -> &str {
        self.endpoint.api_url()
    }

    #[must_use]
    pub fn region(&self) -> &str {
        self.endpoint.region()
    }

    #[must_use]
    pub const fn is_offline_enabled(&self) -> bool {
        self.offline
    }

    #[must_use]
    pub const fn token_provider(&self) -> &TokenProvider {
        &self.token_provider
    }

    /// Latest bearer token, or an empty token if the auth source failed.
    pub async fn auth_token(&self) -> String {
        self.token_provider.token().await
    }

    /// Value of the `Authorization` header. Cognito user pool auth sends the
    /// raw JWT without a scheme prefix.
    pub async fn authorization_header(&self) -> String {
        self.auth_token().await
    }

    /// Stores a normalized entry (e.g. `Card:42`) in the local store.
    pub fn write_entry(&self, key: impl Into<String>, value: Value) {
        self.store.insert(key.into(), value);
    }

    #[must_use]
    pub fn read_entry(&self, key: &str) -> Option<Value> {
        self.store.get(key)
    }

    /// Number of entries in the local store, after pending evictions ran.
    #[must_use]
    pub fn store_len(&self) -> u64 {
        self.store.run_pending_tasks();
        self.store.entry_count()
    }
}

impl ApiClient for GraphqlClient {
    fn reset_store(&self) -> BoxFuture<'_, Result<(), ApiClientError>> {
        self.store.invalidate_all();
        debug!(namespace = %self.namespace, "Local store cleared");
        future::ready(Ok(())).boxed()
    }
}
