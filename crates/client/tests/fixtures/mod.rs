#![allow(dead_code, unreachable_pub)]

use acm_client::{
    ApiClient, ApiClientError, AuthError, AuthSource, ClientFactory, ClientRegistry, ClientSpec,
    EndpointConfig, Namespace, TokenProvider,
};
use acm_config::DocumentConfigStore;
use futures_util::FutureExt;
use futures_util::future::{self, BoxFuture};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const DOCUMENT: &str = r#"{
    "federatedSignIn": {
        "appClientId": "120q904mra9d5l4psmvdbrgm49",
        "webDomain": "id-dev-fsso-sudoplatform.auth.us-east-1.amazoncognito.com",
        "refreshTokenLifetime": 60
    },
    "apiService": {
        "apiUrl": "https://xy7zw5ys7rahrponv7h26vjn6y.appsync-api.us-east-1.amazonaws.com/graphql",
        "region": "us-east-1"
    },
    "identityService": {
        "region": "us-east-1",
        "poolId": "us-east-1_ZiPDToF73",
        "apiUrl": "https://mqn7cjrzcrd75jpsma3xw4744a.appsync-api.us-east-1.amazonaws.com/graphql",
        "registrationMethods": ["TEST", "FSSO"]
    },
    "alternativeService": {
        "region": "us-east-1",
        "poolId": "us-east-1_6NalHLdlq",
        "apiUrl": "https://u2ysyzwojzaahbsq5toulhdt4e.appsync-api.us-east-1.amazonaws.com/graphql",
        "pbkdfRounds": 100000
    },
    "mirrorService": {
        "region": "us-east-1",
        "apiUrl": "https://aws"
    },
    "brokenService": {
        "region": "us-east-1"
    }
}"#;

pub const ALTERNATIVE_URL: &str =
    "https://u2ysyzwojzaahbsq5toulhdt4e.appsync-api.us-east-1.amazonaws.com/graphql";
pub const STORE_DEFAULT_URL: &str =
    "https://xy7zw5ys7rahrponv7h26vjn6y.appsync-api.us-east-1.amazonaws.com/graphql";

#[must_use]
pub fn ns(name: &'static str) -> Namespace {
    Namespace::new(name).expect("valid namespace")
}

#[must_use]
pub fn aws_config() -> EndpointConfig {
    EndpointConfig::new("us-east-1", "https://aws")
}

#[must_use]
pub fn loaded_store() -> DocumentConfigStore {
    DocumentConfigStore::from_json(DOCUMENT).expect("fixture document")
}

/// Registry over the fixture document with a counting mock factory.
#[must_use]
pub fn registry(store: DocumentConfigStore) -> ClientRegistry<MockFactory> {
    ClientRegistry::new(store, MockFactory::default())
}

#[must_use]
pub fn token_source(token: &str) -> Arc<dyn AuthSource> {
    Arc::new(acm_client::StaticTokenSource::new(token))
}

#[derive(Debug)]
pub struct FailingAuthSource;

impl AuthSource for FailingAuthSource {
    fn latest_auth_token(&self) -> BoxFuture<'_, Result<String, AuthError>> {
        future::ready(Err(AuthError::new("not signed in"))).boxed()
    }
}

#[derive(Debug, Default)]
pub struct MockOptions {
    pub label: Option<String>,
    pub fail_reset: bool,
}

#[derive(Debug)]
pub struct MockClient {
    pub serial: usize,
    pub namespace: Namespace,
    pub endpoint: EndpointConfig,
    pub token_provider: TokenProvider,
    pub label: Option<String>,
    pub fail_reset: bool,
    pub resets: AtomicUsize,
}

impl MockClient {
    pub fn resets(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }
}

impl ApiClient for MockClient {
    fn reset_store(&self) -> BoxFuture<'_, Result<(), ApiClientError>> {
        async move {
            tokio::task::yield_now().await;
            self.resets.fetch_add(1, Ordering::SeqCst);
            if self.fail_reset {
                return Err(ApiClientError::StoreReset { message: "disk full".into() });
            }
            Ok(())
        }
        .boxed()
    }
}

#[derive(Debug, Default)]
pub struct MockFactory {
    built: AtomicUsize,
}

impl MockFactory {
    pub fn built(&self) -> usize {
        self.built.load(Ordering::SeqCst)
    }
}

impl ClientFactory for MockFactory {
    type Client = MockClient;
    type Options = MockOptions;

    fn create(&self, spec: ClientSpec<'_, MockOptions>) -> Result<MockClient, ApiClientError> {
        let serial = self.built.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(MockClient {
            serial,
            namespace: spec.namespace,
            endpoint: spec.endpoint,
            token_provider: spec.token_provider,
            label: spec.options.label.clone(),
            fail_reset: spec.options.fail_reset,
            resets: AtomicUsize::new(0),
        })
    }
}
