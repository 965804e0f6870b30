use serde::{Deserialize, Serialize};

use super::Credentials;

/// Base address of a Solr instance started with the default settings.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8983/solr";

/// Connection configuration of a [`SchemaClient`](super::SchemaClient).
///
/// The configuration can be embedded in the configuration file of an application:
///
/// ```rust
/// use solr_schema::{ClientConfig, SchemaClient};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config: ClientConfig = serde_json::from_str(
///     r#"{
///         "base_url": "http://search.internal:8983/solr",
///         "core": "products",
///         "credentials": { "username": "solr", "password": "SolrRocks" }
///     }"#,
/// )?;
/// let client = SchemaClient::from_config(config)?;
/// assert_eq!(client.core(), "products");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Absolute URL (or absolute request path) of the Solr instance, kept verbatim.
    pub base_url: String,
    /// Core name, empty for the default schema of the instance.
    pub core: String,
    /// Basic authentication credentials.
    pub credentials: Option<Credentials>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            core: String::new(),
            credentials: None,
        }
    }
}
