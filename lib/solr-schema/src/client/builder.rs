use super::config::DEFAULT_BASE_URL;
use super::path::validate_base_address;
use super::{ClientConfig, Credentials, SchemaClient, SchemaClientError, SecureString};
use crate::transport::ReqwestTransport;

/// Builder for [`SchemaClient`] instances.
///
/// # Default Configuration
///
/// - **Base URL**: `http://localhost:8983/solr`
/// - **Core**: none (requests go to `<base>/schema`)
/// - **Credentials**: none
/// - **HTTP client**: `reqwest::Client::new()`
///
/// # Example
///
/// ```rust
/// use solr_schema::SchemaClient;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SchemaClient::builder()
///     .with_base_url("https://search.example.com/solr")?
///     .with_core("products")
///     .with_basic_auth("solr", "SolrRocks")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SchemaClientBuilder {
    client: reqwest::Client,
    base_url: String,
    core: String,
    credentials: Option<Credentials>,
}

impl SchemaClientBuilder {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaClientError::MalformedAddress`] if the base URL is invalid.
    pub fn build(self) -> Result<SchemaClient, SchemaClientError> {
        let Self {
            client,
            base_url,
            core,
            credentials,
        } = self;

        validate_base_address(&base_url)?;

        let config = ClientConfig {
            base_url,
            core,
            credentials: credentials.filter(|credentials| !credentials.is_empty()),
        };

        Ok(SchemaClient {
            transport: ReqwestTransport::new(client),
            config,
        })
    }

    /// Sets the base URL of the Solr instance, such as `http://localhost:8983/solr`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaClientError::MalformedAddress`] if `base_url` is neither an
    /// absolute URL nor an absolute request path.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, SchemaClientError> {
        let base_url = base_url.into();
        validate_base_address(&base_url)?;
        self.base_url = base_url;
        Ok(self)
    }

    /// Sets the core name, empty for no core segment.
    pub fn with_core(mut self, core: impl Into<String>) -> Self {
        self.core = core.into();
        self
    }

    /// Sets basic authentication credentials.
    ///
    /// An empty username together with an empty password disables authentication.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<SecureString>,
    ) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Uses a preconfigured reqwest client (timeouts, proxies, TLS...).
    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

impl Default for SchemaClientBuilder {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            core: String::new(),
            credentials: None,
        }
    }
}
