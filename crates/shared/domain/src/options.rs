use crate::namespace::Namespace;

/// Per-request options for obtaining a client.
///
/// `transport` carries the factory-specific tuning knobs (offline support,
/// local store sizing, ...). It is handed to the factory verbatim and never
/// inspected by the registry.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions<O = ()> {
    /// Overrides the endpoint location with that of a specific service's
    /// configuration set. `None` selects the default namespace.
    pub config_namespace: Option<Namespace>,
    pub transport: O,
}

impl<O: Default> ClientOptions<O> {
    /// Options targeting `namespace` with default transport settings.
    #[must_use]
    pub fn for_namespace(namespace: Namespace) -> Self {
        Self { config_namespace: Some(namespace), transport: O::default() }
    }
}

impl<O> ClientOptions<O> {
    #[must_use]
    pub fn with_transport<T>(self, transport: T) -> ClientOptions<T> {
        ClientOptions { config_namespace: self.config_namespace, transport }
    }

    /// The namespace this request resolves against.
    #[must_use]
    pub fn requested_namespace(&self) -> Namespace {
        self.config_namespace.clone().unwrap_or_default()
    }
}
