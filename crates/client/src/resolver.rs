//! Namespace → endpoint configuration resolution.

use acm_config::{ConfigStore, ConfigStoreError, ConfigStoreExt};
use acm_domain::{DEFAULT_NAMESPACE, EndpointConfig, Namespace};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::trace;

/// Turns a namespace into an [`EndpointConfig`].
///
/// Precedence for the default namespace:
/// 1. the explicit default set with [`ConfigurationResolver::set_explicit_default`];
/// 2. the store's `apiService` set, which is then kept as the explicit default
///    so later lookups skip the store.
///
/// Any other namespace is read from the store on every call; the registry
/// caches clients, not configurations.
#[derive(Debug)]
pub struct ConfigurationResolver {
    store: Arc<dyn ConfigStore>,
    explicit_default: RwLock<Option<EndpointConfig>>,
}

impl ConfigurationResolver {
    #[must_use]
    pub fn new(store: impl ConfigStore + 'static) -> Self {
        Self::from_shared(Arc::new(store))
    }

    #[must_use]
    pub fn from_shared(store: Arc<dyn ConfigStore>) -> Self {
        Self { store, explicit_default: RwLock::new(None) }
    }

    /// Resolves the configuration for `namespace`.
    ///
    /// For the default namespace, a store that is not loaded or lacks the set
    /// yields `Ok(None)`: the caller decides whether that is fatal.
    ///
    /// # Errors
    /// * Default namespace: [`ConfigStoreError::InvalidSet`] if the store's set is malformed.
    /// * Other namespaces: every store failure, including
    ///   [`ConfigStoreError::NotLoaded`] and [`ConfigStoreError::SetNotFound`].
    pub fn resolve(&self, namespace: &Namespace) -> Result<Option<EndpointConfig>, ConfigStoreError> {
        if namespace.is_default() {
            return self.resolve_default();
        }

        trace!(namespace = %namespace, "Resolving configuration from store");
        self.store.bind_config_set::<EndpointConfig>(namespace.as_str()).map(Some)
    }

    fn resolve_default(&self) -> Result<Option<EndpointConfig>, ConfigStoreError> {
        if let Some(config) = self.explicit_default.read().clone() {
            return Ok(Some(config));
        }

        match self.store.bind_config_set::<EndpointConfig>(DEFAULT_NAMESPACE.as_str()) {
            Ok(config) => {
                trace!(endpoint = %config, "Default configuration taken from store");
                // An override installed meanwhile wins over the store value.
                let mut slot = self.explicit_default.write();
                Ok(Some(slot.get_or_insert(config).clone()))
            },
            Err(err) if err.is_absence() => {
                trace!(error = %err, "No default configuration available");
                Ok(None)
            },
            Err(err) => Err(err),
        }
    }

    /// Installs the default-namespace configuration, overriding the store.
    pub fn set_explicit_default(&self, config: EndpointConfig) {
        *self.explicit_default.write() = Some(config);
    }

    /// Removes the override; the next default lookup goes back to the store.
    pub fn clear_explicit_default(&self) {
        *self.explicit_default.write() = None;
    }

    #[must_use]
    pub fn explicit_default(&self) -> Option<EndpointConfig> {
        self.explicit_default.read().clone()
    }

    /// True iff an explicit default is set and equals `config` field by field.
    #[must_use]
    pub fn is_equivalent_to_default(&self, config: &EndpointConfig) -> bool {
        self.explicit_default.read().as_ref() == Some(config)
    }
}
