use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// The namespace used when a caller does not name one.
pub const DEFAULT_NAMESPACE: Namespace = Namespace(Cow::Borrowed("apiService"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamespaceError {
    #[error("Namespace cannot be empty")]
    Empty,
}

/// Identifier of a backend service's configuration set (e.g. `apiService`).
///
/// There is no registry of valid namespaces: any non-empty string is a lookup
/// key, and resolution either finds a configuration or reports its absence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(Cow<'static, str>);

impl Namespace {
    /// Creates a namespace from any non-empty string.
    ///
    /// # Errors
    /// Returns [`NamespaceError::Empty`] for an empty name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self, NamespaceError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NamespaceError::Empty);
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == DEFAULT_NAMESPACE
    }
}

impl Default for Namespace {
    fn default() -> Self {
        DEFAULT_NAMESPACE
    }
}

impl TryFrom<String> for Namespace {
    type Error = NamespaceError;

    fn try_from(value: String) -> Result<Self, NamespaceError> {
        Self::new(value)
    }
}

impl TryFrom<&'static str> for Namespace {
    type Error = NamespaceError;

    fn try_from(value: &'static str) -> Result<Self, NamespaceError> {
        Self::new(value)
    }
}

impl From<Namespace> for String {
    fn from(value: Namespace) -> Self {
        value.0.into_owned()
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Namespace {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
