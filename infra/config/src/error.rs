use std::borrow::Cow;

/// A specialized [`ConfigStoreError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum ConfigStoreError {
    /// No configuration document has been loaded.
    #[error("Configuration not set")]
    NotLoaded,

    /// The loaded document has no set bound to the namespace.
    #[error("Configuration set not found: {namespace}")]
    SetNotFound { namespace: Cow<'static, str> },

    /// The set exists but does not match the requested shape.
    #[error("Invalid configuration set {namespace}: {source}")]
    InvalidSet { namespace: Cow<'static, str>, source: serde_json::Error },

    /// The document is not valid JSON.
    #[error("Failed to parse configuration document: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// The document root is not a JSON object.
    #[error("Configuration document root must be an object")]
    NotAnObject,

    /// Layered loading (file + environment) failed.
    #[error("Failed to load configuration document: {source}")]
    Load {
        #[from]
        source: config::ConfigError,
    },
}

impl ConfigStoreError {
    pub(crate) fn set_not_found(namespace: &str) -> Self {
        Self::SetNotFound { namespace: Cow::Owned(namespace.to_owned()) }
    }

    /// Whether the error only reports that nothing is configured for the
    /// namespace, as opposed to a set that exists but is malformed.
    #[must_use]
    pub const fn is_absence(&self) -> bool {
        matches!(self, Self::NotLoaded | Self::SetNotFound { .. })
    }
}
