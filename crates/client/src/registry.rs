use crate::auth::{AuthSource, TokenProvider};
use crate::error::ApiClientError;
use crate::factory::{ApiClient, ClientFactory, ClientSpec};
use crate::resolver::ConfigurationResolver;
use acm_config::ConfigStore;
use acm_domain::{ClientOptions, DEFAULT_NAMESPACE, EndpointConfig, Namespace};
use futures_util::future::join_all;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Derives the cache slot for a resolved configuration.
///
/// A namespace whose configuration equals the default configuration shares
/// the default namespace's slot; anything else keeps its own name.
#[must_use]
pub fn cache_key(
    requested: &Namespace,
    resolved: &EndpointConfig,
    default: Option<&EndpointConfig>,
) -> Namespace {
    if default == Some(resolved) { DEFAULT_NAMESPACE } else { requested.clone() }
}

#[derive(Debug)]
struct RegistryState<C> {
    auth: Option<Arc<dyn AuthSource>>,
    clients: FxHashMap<Namespace, Arc<C>>,
}

impl<C> Default for RegistryState<C> {
    fn default() -> Self {
        Self { auth: None, clients: FxHashMap::default() }
    }
}

/// Hands out one shared client per distinct backend configuration.
///
/// The registry owns the [`AuthSource`] and the namespace → client cache.
/// Clients are built lazily by the [`ClientFactory`] on first request and
/// reused until the auth source is replaced, which drops every cached client
/// at once.
///
/// # Concurrency
///
/// The auth source and the cache live under one lock, so a replacement and
/// the resulting invalidation are observed atomically. Cache hits only take
/// the read lock. Misses build the client under the write lock after a
/// re-check, so each slot is constructed at most once per auth source.
///
/// # Example
///
/// ```rust
/// use acm_client::{ClientOptions, ClientRegistry, GraphqlClientFactory, Namespace, StaticTokenSource};
/// use acm_config::DocumentConfigStore;
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = DocumentConfigStore::from_json(
///     r#"{"billingService":{"region":"eu-west-1","apiUrl":"https://billing/graphql"}}"#,
/// )?;
/// let registry = ClientRegistry::new(store, GraphqlClientFactory);
/// registry.set_auth_source(Arc::new(StaticTokenSource::new("jwt")));
///
/// let options = ClientOptions::for_namespace(Namespace::new("billingService")?);
/// let client = registry.get_client(&options)?;
/// assert_eq!(client.region(), "eu-west-1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ClientRegistry<F: ClientFactory> {
    resolver: ConfigurationResolver,
    factory: F,
    state: RwLock<RegistryState<F::Client>>,
}

impl<F: ClientFactory> ClientRegistry<F> {
    #[must_use]
    pub fn new(store: impl ConfigStore + 'static, factory: F) -> Self {
        Self::with_resolver(ConfigurationResolver::new(store), factory)
    }

    #[must_use]
    pub fn with_resolver(resolver: ConfigurationResolver, factory: F) -> Self {
        Self { resolver, factory, state: RwLock::new(RegistryState::default()) }
    }

    #[must_use]
    pub const fn resolver(&self) -> &ConfigurationResolver {
        &self.resolver
    }

    #[must_use]
    pub const fn factory(&self) -> &F {
        &self.factory
    }

    /// Registers the auth source shared by all clients.
    ///
    /// A source that is a different `Arc` from the current one replaces it
    /// and clears the whole cache: every existing client closed over the old
    /// source's token retrieval. Passing the current source again is a no-op.
    pub fn set_auth_source(&self, source: Arc<dyn AuthSource>) -> &Self {
        let mut state = self.state.write();

        if state.auth.as_ref().is_some_and(|current| Arc::ptr_eq(current, &source)) {
            trace!("Auth source unchanged, keeping cached clients");
            return self;
        }

        let invalidated = state.clients.len();
        state.clients.clear();
        state.auth = Some(source);
        info!(invalidated, "Auth source replaced");

        self
    }

    /// Sets the default-namespace configuration, overriding the store.
    ///
    /// Cached clients are kept: they stay bound to the configuration they
    /// were built with.
    pub fn set_config(&self, config: EndpointConfig) -> &Self {
        debug!(endpoint = %config, "Default configuration set");
        self.resolver.set_explicit_default(config);
        self
    }

    /// Removes the default-namespace override. Cached clients are kept.
    pub fn unset_config(&self) {
        debug!("Default configuration unset");
        self.resolver.clear_explicit_default();
    }

    /// Returns the client for the namespace in `options`, building it on first use.
    ///
    /// The configuration is resolved before the auth source is checked, so a
    /// missing configuration is reported first.
    ///
    /// # Errors
    /// * [`ApiClientError::ConfigurationNotSet`] if the namespace has no configuration.
    /// * [`ApiClientError::InvalidConfiguration`] if its set lacks `region` or `apiUrl`.
    /// * [`ApiClientError::AuthSourceNotSet`] if no auth source was registered.
    /// * [`ApiClientError::ClientConstruction`] if the factory fails.
    pub fn get_client(
        &self,
        options: &ClientOptions<F::Options>,
    ) -> Result<Arc<F::Client>, ApiClientError> {
        let requested = options.requested_namespace();

        let config = match self.resolver.resolve(&requested) {
            Ok(Some(config)) => config,
            Ok(None) => return Err(ApiClientError::ConfigurationNotSet),
            Err(err) if err.is_absence() => return Err(ApiClientError::ConfigurationNotSet),
            Err(err) => return Err(ApiClientError::from_store(&requested, err)),
        };

        let key = cache_key(&requested, &config, self.resolver.explicit_default().as_ref());

        {
            let state = self.state.read();
            if state.auth.is_none() {
                return Err(ApiClientError::AuthSourceNotSet);
            }
            if let Some(client) = state.clients.get(&key) {
                debug!(namespace = %key, requested = %requested, "Client cache hit");
                return Ok(Arc::clone(client));
            }
        }

        let mut state = self.state.write();
        let Some(source) = state.auth.clone() else {
            return Err(ApiClientError::AuthSourceNotSet);
        };
        if let Some(client) = state.clients.get(&key) {
            debug!(namespace = %key, requested = %requested, "Client cache hit after re-check");
            return Ok(Arc::clone(client));
        }

        let client = Arc::new(self.factory.create(ClientSpec {
            namespace: key.clone(),
            endpoint: config,
            token_provider: TokenProvider::new(source),
            options: &options.transport,
        })?);

        debug!(namespace = %key, requested = %requested, "Client constructed");
        state.clients.insert(key, Arc::clone(&client));

        Ok(client)
    }

    /// Shorthand for [`ClientRegistry::get_client`] on the default namespace.
    ///
    /// # Errors
    /// Same as [`ClientRegistry::get_client`].
    pub fn get_default_client(&self) -> Result<Arc<F::Client>, ApiClientError> {
        self.get_client(&ClientOptions::default())
    }

    /// Resolves the endpoint configuration of `namespace` (default if `None`).
    ///
    /// Neither the cache nor the auth source is involved.
    ///
    /// # Errors
    /// * [`ApiClientError::ConfigurationNotSet`] if nothing is configured.
    /// * [`ApiClientError::ConfigurationSetNotFound`] if the loaded document lacks the namespace.
    /// * [`ApiClientError::InvalidConfiguration`] if its set lacks `region` or `apiUrl`.
    pub fn get_api_client_config(
        &self,
        namespace: Option<&Namespace>,
    ) -> Result<EndpointConfig, ApiClientError> {
        let namespace = namespace.cloned().unwrap_or_default();
        self.resolver
            .resolve(&namespace)
            .map_err(|err| ApiClientError::from_store(&namespace, err))?
            .ok_or(ApiClientError::ConfigurationNotSet)
    }

    /// Clears the local store of every cached client.
    ///
    /// All resets run concurrently and are awaited to completion; entries stay
    /// in the cache. Completes immediately when nothing is cached.
    ///
    /// # Errors
    /// Returns the first [`ApiClientError`] reported, after every reset settled.
    pub async fn reset(&self) -> Result<(), ApiClientError> {
        let clients: Vec<(Namespace, Arc<F::Client>)> = {
            let state = self.state.read();
            state.clients.iter().map(|(key, client)| (key.clone(), Arc::clone(client))).collect()
        };

        if clients.is_empty() {
            return Ok(());
        }

        let results = join_all(clients.iter().map(|(_, client)| client.reset_store())).await;

        let mut first_error = None;
        for ((namespace, _), result) in clients.iter().zip(results) {
            if let Err(err) = result {
                warn!(namespace = %namespace, error = %err, "Client store reset failed");
                first_error.get_or_insert(err);
            }
        }

        debug!(clients = clients.len(), failed = first_error.is_some(), "Client stores reset");
        first_error.map_or(Ok(()), Err)
    }

    /// Namespaces that currently hold a cached client.
    #[must_use]
    pub fn cached_namespaces(&self) -> Vec<Namespace> {
        let mut namespaces: Vec<Namespace> = self.state.read().clients.keys().cloned().collect();
        namespaces.sort();
        namespaces
    }

    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.state.read().clients.len()
    }

    #[must_use]
    pub fn has_auth_source(&self) -> bool {
        self.state.read().auth.is_some()
    }
}
