use futures_util::FutureExt;
use futures_util::future::{self, BoxFuture};
use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::warn;

/// Token handed to the transport when the auth source fails.
///
/// The request then fails at the transport layer with an error the caller can
/// process, instead of client construction failing.
pub const EMPTY_TOKEN: &str = "";

/// Failure to produce a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Auth token unavailable: {message}")]
pub struct AuthError {
    message: Cow<'static, str>,
}

impl AuthError {
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into() }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The credential collaborator bound to every client the registry builds.
///
/// Implementations own their refresh mechanics; the registry only ever asks
/// for the latest token. Identity matters: the registry compares auth sources
/// by `Arc` pointer, and a different pointer invalidates all cached clients.
pub trait AuthSource: Debug + Send + Sync + 'static {
    /// Returns the current bearer token, refreshing it if needed.
    fn latest_auth_token(&self) -> BoxFuture<'_, Result<String, AuthError>>;
}

/// An [`AuthSource`] that always yields the same token.
#[derive(Debug, Clone)]
pub struct StaticTokenSource {
    token: String,
}

impl StaticTokenSource {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl AuthSource for StaticTokenSource {
    fn latest_auth_token(&self) -> BoxFuture<'_, Result<String, AuthError>> {
        future::ready(Ok(self.token.clone())).boxed()
    }
}

/// Token retrieval capability closed over a specific [`AuthSource`].
///
/// Cheap to clone; every clone refers to the same source.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    source: Arc<dyn AuthSource>,
}

impl TokenProvider {
    #[must_use]
    pub fn new(source: Arc<dyn AuthSource>) -> Self {
        Self { source }
    }

    /// Fetches the latest token, surfacing the auth source's failure.
    ///
    /// # Errors
    /// Returns the [`AuthError`] reported by the auth source.
    pub async fn try_token(&self) -> Result<String, AuthError> {
        self.source.latest_auth_token().await
    }

    /// Fetches the latest token, degrading any failure to [`EMPTY_TOKEN`].
    ///
    /// This is the variant transports should use: a failed token lookup must
    /// not abort the request pipeline, the backend rejects the empty token.
    pub async fn token(&self) -> String {
        match self.try_token().await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "Auth token retrieval failed, sending an empty token");
                EMPTY_TOKEN.to_owned()
            },
        }
    }

    /// Whether both providers wrap the same auth source.
    #[must_use]
    pub fn shares_source(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}
