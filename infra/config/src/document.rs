use crate::error::ConfigStoreError;
use crate::store::ConfigStore;
use config::{Case, Config, Environment, File};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

type Document = Map<String, Value>;

/// An in-memory configuration document shared between clones.
///
/// The document can be replaced at runtime with [`DocumentConfigStore::set_document`];
/// every clone observes the replacement. An empty document string unloads the
/// store, after which every lookup reports [`ConfigStoreError::NotLoaded`].
#[derive(Debug, Clone, Default)]
pub struct DocumentConfigStore {
    document: Arc<RwLock<Option<Document>>>,
}

impl DocumentConfigStore {
    /// Creates a store with no document loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigStoreError::Parse`] for malformed JSON and
    /// [`ConfigStoreError::NotAnObject`] if the root is not an object.
    pub fn from_json(json: &str) -> Result<Self, ConfigStoreError> {
        let store = Self::new();
        store.set_document(json)?;
        Ok(store)
    }

    /// Loads the document from a file, overlaid with environment variables.
    ///
    /// Layering:
    /// 1. **Base File**: the file at `path` (format inferred from the extension), required.
    /// 2. **Environment Overrides**: variables prefixed with `<env_prefix>__`. Nested keys
    ///    use double underscores and snake case words, which are folded to camel case:
    ///    `ACM__API_SERVICE__API_URL` overrides `apiService.apiUrl`.
    ///
    /// # Errors
    /// Returns [`ConfigStoreError::Load`] if the file is missing or the sources
    /// cannot be merged into a document.
    pub fn load(path: impl AsRef<Path>, env_prefix: &str) -> Result<Self, ConfigStoreError> {
        Self::load_layered(path, Self::environment(env_prefix))
    }

    /// The environment source used by [`DocumentConfigStore::load`].
    #[must_use]
    pub fn environment(env_prefix: &str) -> Environment {
        Environment::with_prefix(env_prefix).separator("__").convert_case(Case::Camel)
    }

    /// Loads the document from a file overlaid with an explicit environment source.
    ///
    /// # Errors
    /// Same as [`DocumentConfigStore::load`].
    pub fn load_layered(
        path: impl AsRef<Path>,
        environment: Environment,
    ) -> Result<Self, ConfigStoreError> {
        let path = path.as_ref();

        let document = Config::builder()
            .add_source(File::from(path).required(true))
            .add_source(environment)
            .build()?
            .try_deserialize::<Document>()?;

        info!(path = %path.display(), sets = document.len(), "Loaded configuration document");

        Ok(Self { document: Arc::new(RwLock::new(Some(document))) })
    }

    /// Replaces the current document.
    ///
    /// An empty (or whitespace-only) string unloads the store.
    ///
    /// # Errors
    /// Returns [`ConfigStoreError::Parse`] for malformed JSON and
    /// [`ConfigStoreError::NotAnObject`] if the root is not an object. The
    /// previous document is kept on error.
    pub fn set_document(&self, json: &str) -> Result<(), ConfigStoreError> {
        if json.trim().is_empty() {
            self.clear();
            return Ok(());
        }

        let Value::Object(document) = serde_json::from_str::<Value>(json)? else {
            return Err(ConfigStoreError::NotAnObject);
        };

        debug!(sets = document.len(), "Configuration document replaced");
        *self.document.write() = Some(document);
        Ok(())
    }

    /// Unloads the document.
    pub fn clear(&self) {
        *self.document.write() = None;
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.document.read().is_some()
    }

    /// Names of all configuration sets in the loaded document.
    #[must_use]
    pub fn namespaces(&self) -> Vec<String> {
        self.document.read().as_ref().map_or_else(Vec::new, |doc| doc.keys().cloned().collect())
    }
}

impl ConfigStore for DocumentConfigStore {
    fn config_set(&self, namespace: &str) -> Result<Value, ConfigStoreError> {
        let guard = self.document.read();
        let document = guard.as_ref().ok_or(ConfigStoreError::NotLoaded)?;
        document.get(namespace).cloned().ok_or_else(|| ConfigStoreError::set_not_found(namespace))
    }
}
