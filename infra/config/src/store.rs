use crate::error::ConfigStoreError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;

/// A source of named configuration sets.
pub trait ConfigStore: Debug + Send + Sync {
    /// Returns the raw configuration set bound to `namespace`.
    ///
    /// # Errors
    /// * [`ConfigStoreError::NotLoaded`] if no document is available.
    /// * [`ConfigStoreError::SetNotFound`] if the document has no such set.
    fn config_set(&self, namespace: &str) -> Result<Value, ConfigStoreError>;
}

/// Typed binding on top of [`ConfigStore`].
pub trait ConfigStoreExt: ConfigStore {
    /// Binds the set for `namespace` to the shape `T`.
    ///
    /// # Errors
    /// Propagates [`ConfigStore::config_set`] failures and returns
    /// [`ConfigStoreError::InvalidSet`] if the set does not deserialize into `T`.
    fn bind_config_set<T: DeserializeOwned>(&self, namespace: &str) -> Result<T, ConfigStoreError> {
        let raw = self.config_set(namespace)?;
        serde_json::from_value(raw).map_err(|source| ConfigStoreError::InvalidSet {
            namespace: Cow::Owned(namespace.to_owned()),
            source,
        })
    }
}

impl<S: ConfigStore + ?Sized> ConfigStoreExt for S {}

impl<S: ConfigStore + ?Sized> ConfigStore for Arc<S> {
    fn config_set(&self, namespace: &str) -> Result<Value, ConfigStoreError> {
        (**self).config_set(namespace)
    }
}
