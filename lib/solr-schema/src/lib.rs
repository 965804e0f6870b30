//! # Solr Schema
//!
//! Read-only client for the [Solr Schema API](https://solr.apache.org/guide/solr/latest/indexing-guide/schema-api.html).
//!
//! Every call issues one `GET` request to
//! `<base>[/<core>]/schema[/<sub-path>]?wt=json...`, decodes the JSON response and
//! returns it together with the `responseHeader.status` of the Solr envelope.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use solr_schema::SchemaClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SchemaClient::new("http://localhost:8983/solr", "techproducts")?;
//!
//! let unique_key = client.unique_key().await?;
//! assert!(unique_key.is_success());
//! let key = unique_key.get("uniqueKey").and_then(|value| value.as_str());
//!
//! let whole_schema = client.all().await?;
//! let field_count = whole_schema
//!     .pointer("/schema/fields")
//!     .and_then(|fields| fields.as_array())
//!     .map(Vec::len);
//! # Ok(())
//! # }
//! ```
//!
//! ## Query Parameters
//!
//! ```rust,no_run
//! use solr_schema::{SchemaClient, SchemaQuery};
//!
//! # async fn example(client: &SchemaClient) -> Result<(), Box<dyn std::error::Error>> {
//! let params = SchemaQuery::new()
//!     .add_param("fl", "id")
//!     .add_param("fl", "title")
//!     .add_param("showDefaults", "true");
//!
//! let fields = client.get("fields", Some(params)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The `wt` (output format) parameter is always `json`.
//!
//! ## Transports
//!
//! Requests go through a [`Transport`]. The default [`ReqwestTransport`] wraps a
//! [`reqwest::Client`]; use [`SchemaClientBuilder::with_reqwest_client`] to set
//! timeouts or proxies, or [`SchemaClient::with_transport`] to plug another one.
//!
//! ## Errors
//!
//! See [`SchemaClientError`]: a response without a numeric `responseHeader.status`
//! is reported as [`SchemaClientError::MalformedEnvelope`].

mod client;
pub use self::client::{
    AuthenticationError, ClientConfig, Credentials, DEFAULT_BASE_URL, EnvelopeError,
    SchemaClient, SchemaClientBuilder, SchemaClientError, SchemaQuery, SchemaResult, SecureString,
};

pub mod transport;
pub use self::transport::{ReqwestTransport, Transport, TransportError, TransportRequest};
