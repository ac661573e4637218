use crate::auth::TokenProvider;
use crate::error::ApiClientError;
use acm_domain::{EndpointConfig, Namespace};
use futures_util::future::BoxFuture;
use std::fmt::Debug;

/// Capabilities the registry needs from a constructed client.
pub trait ApiClient: Debug + Send + Sync + 'static {
    /// Clears the client's local store (normalized cache, offline queue, ...).
    fn reset_store(&self) -> BoxFuture<'_, Result<(), ApiClientError>>;
}

/// Everything a factory needs to build one client.
#[derive(Debug)]
pub struct ClientSpec<'a, O> {
    /// The cache slot the client will occupy.
    pub namespace: Namespace,
    pub endpoint: EndpointConfig,
    pub token_provider: TokenProvider,
    /// Transport options exactly as the caller passed them.
    pub options: &'a O,
}

/// Builds concrete clients for the registry.
///
/// Construction is synchronous; any asynchronous work belongs in the token
/// provider or in the client's own request path.
pub trait ClientFactory: Debug + Send + Sync {
    type Client: ApiClient;
    type Options: Debug + Default + Send + Sync;

    /// # Errors
    /// Returns [`ApiClientError::ClientConstruction`] when the spec cannot be
    /// turned into a working client.
    fn create(&self, spec: ClientSpec<'_, Self::Options>) -> Result<Self::Client, ApiClientError>;
}
