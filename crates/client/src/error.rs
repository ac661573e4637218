use acm_config::ConfigStoreError;
use acm_domain::Namespace;
use std::borrow::Cow;

/// A specialized [`ApiClientError`] enum of this crate.
///
/// Every variant is terminal for the call that raised it; nothing is retried
/// internally. `ConfigurationNotSet` and `AuthSourceNotSet` usually point at
/// a setup-ordering mistake in the caller's startup sequence.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    /// No configuration exists for the requested namespace.
    #[error("Configuration not set")]
    ConfigurationNotSet,

    /// The loaded configuration document has no set for the namespace.
    #[error("Configuration set not found: {namespace}")]
    ConfigurationSetNotFound { namespace: Cow<'static, str> },

    /// A configuration set exists but lacks `region` or `apiUrl`.
    #[error("Invalid configuration for {namespace}: {source}")]
    InvalidConfiguration { namespace: Cow<'static, str>, source: ConfigStoreError },

    /// A client was requested before an auth source was registered.
    #[error("Auth source has not been set")]
    AuthSourceNotSet,

    /// The client factory refused to build a client.
    #[error("Client construction failed: {message}")]
    ClientConstruction { message: Cow<'static, str> },

    /// A cached client failed to clear its local store.
    #[error("Client store reset failed: {message}")]
    StoreReset { message: Cow<'static, str> },
}

impl ApiClientError {
    /// Maps a store failure raised while resolving `requested`.
    pub(crate) fn from_store(requested: &Namespace, err: ConfigStoreError) -> Self {
        match err {
            ConfigStoreError::NotLoaded => Self::ConfigurationNotSet,
            ConfigStoreError::SetNotFound { namespace } => {
                Self::ConfigurationSetNotFound { namespace }
            },
            source => Self::InvalidConfiguration {
                namespace: Cow::Owned(requested.as_str().to_owned()),
                source,
            },
        }
    }
}
