//! # Configuration Store
//!
//! A process configuration document made of named configuration sets, one per
//! backend service:
//!
//! ```json
//! {
//!   "apiService": { "region": "us-east-1", "apiUrl": "https://.../graphql" },
//!   "identityService": { "region": "us-east-1", "poolId": "..." }
//! }
//! ```
//!
//! Consumers bind a set to their own typed shape with
//! [`ConfigStoreExt::bind_config_set`]. Extra fields in a set are ignored; missing
//! required fields surface as [`ConfigStoreError::InvalidSet`].
//!
//! ## Example
//!
//! ```rust
//! use acm_config::{ConfigStoreExt, DocumentConfigStore};
//!
//! #[derive(serde::Deserialize)]
//! struct Endpoint {
//!     region: String,
//! }
//!
//! let store = DocumentConfigStore::from_json(r#"{"apiService":{"region":"us-east-1"}}"#).unwrap();
//! let endpoint: Endpoint = store.bind_config_set("apiService").unwrap();
//! assert_eq!(endpoint.region, "us-east-1");
//! ```

mod document;
mod error;
mod store;

pub use document::DocumentConfigStore;
pub use error::ConfigStoreError;
pub use store::{ConfigStore, ConfigStoreExt};
