use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of a GraphQL backend: the AWS region and the API URL.
///
/// Two configurations are equivalent when both fields compare equal, which is
/// exactly what the derived [`PartialEq`] checks. Unknown fields of a bound
/// configuration set are ignored, but both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    region: String,
    api_url: String,
}

impl EndpointConfig {
    #[must_use]
    pub fn new(region: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self { region: region.into(), api_url: api_url.into() }
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl fmt::Display for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.api_url, self.region)
    }
}
